use actix_web::{http::header::LOCATION, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use std::fmt::Write;

pub fn e500<T>(e: T) -> actix_web::Error
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    actix_web::error::ErrorInternalServerError(e)
}

/// 302 Found
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// 301 Moved Permanently
pub fn moved_permanently(location: &str) -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn format_flash_messages(flash_messages: &IncomingFlashMessages) -> String {
    let mut notice_html = String::new();
    for m in flash_messages.iter() {
        let class = match m.level() {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Success => "success",
            _ => "info",
        };
        // 消息中可能带有用户输入的路径参数
        let _ = writeln!(
            notice_html,
            r#"<p class="{class}"><i>{}</i></p>"#,
            escape_html(m.content())
        );
    }

    notice_html
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// tracing error log
/// 递归调用底层错误信息，显示完整错误链
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    write!(f, "{e}")?;
    let mut current = e.source();
    while let Some(cause) = current {
        write!(f, " Caused by: {cause}")?;
        current = cause.source();
    }
    Ok(())
}
