use std::fmt::Write;

use actix_web::{http::header::ContentType, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::{
    domain::Testimonial,
    util::{escape_html, format_flash_messages},
};

const STORIES_TITLE: &str =
    "Testimonials from Happy freeCodeCamp Students who got Software Engineer Jobs";

/// 页面统一使用`layout.html`，并显示待展示的flash消息
fn render(title: &str, body: &str, flash_messages: &IncomingFlashMessages) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            include_str!("pages/layout.html"),
            title = title,
            notices = format_flash_messages(flash_messages),
            body = body,
        ))
}

pub async fn home(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Learn to code for free",
        include_str!("pages/home.html"),
        &flash_messages,
    )
}

pub async fn unsubscribed_page(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "You have been unsubscribed",
        include_str!("pages/unsubscribed.html"),
        &flash_messages,
    )
}

pub async fn fastest_web_page(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "This is the fastest web page on the internet",
        include_str!("pages/fastest_web_page.html"),
        &flash_messages,
    )
}

pub async fn nonprofits(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Your Nonprofit Can Get Pro Bono Code",
        include_str!("pages/nonprofits.html"),
        &flash_messages,
    )
}

pub async fn nonprofits_form(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Nonprofit Projects Proposal Form",
        include_str!("pages/nonprofits_form.html"),
        &flash_messages,
    )
}

pub async fn agile_project_managers(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Get Agile Project Management Experience for the PMI-ACP",
        include_str!("pages/agile_project_managers.html"),
        &flash_messages,
    )
}

pub async fn agile_project_managers_form(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Agile Project Management Program Application Form",
        include_str!("pages/agile_project_managers_form.html"),
        &flash_messages,
    )
}

pub async fn bootcamp_calculator(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Coding Bootcamp Cost Calculator",
        include_str!("pages/bootcamp_calculator.html"),
        &flash_messages,
    )
}

pub async fn software_resources_for_nonprofits(
    flash_messages: IncomingFlashMessages,
) -> HttpResponse {
    render(
        "Software Resources for Nonprofits",
        include_str!("pages/software_resources.html"),
        &flash_messages,
    )
}

pub async fn academic_honesty(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        "Academic Honesty policy",
        include_str!("pages/academic_honesty.html"),
        &flash_messages,
    )
}

pub async fn show_testimonials(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        STORIES_TITLE,
        &stories_body(Testimonial::featured(), true),
        &flash_messages,
    )
}

pub async fn show_all_testimonials(flash_messages: IncomingFlashMessages) -> HttpResponse {
    render(
        STORIES_TITLE,
        &stories_body(Testimonial::all(), false),
        &flash_messages,
    )
}

fn stories_body(stories: &[Testimonial], more_stories: bool) -> String {
    let mut body = String::from("<div class=\"stories\">\n");
    for story in stories {
        let _ = writeln!(
            body,
            "<blockquote class=\"story\"><p>{}</p><footer>{}, {} in {}</footer></blockquote>",
            escape_html(&story.quote),
            escape_html(&story.name),
            escape_html(&story.job),
            escape_html(&story.location)
        );
    }
    body.push_str("</div>\n");
    if more_stories {
        body.push_str("<p><a href=\"/all-stories\">Read more stories</a></p>\n");
    }

    body
}
