use std::{net::TcpListener, sync::Arc};

use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use secrecy::{ExposeSecret, SecretString};
use tracing_actix_web::TracingLogger;

use crate::{github_client::GithubClient, routes, store::UserStore};

pub fn run(
    listener: TcpListener,
    store: Arc<dyn UserStore>,
    github_client: GithubClient,
    hmac_secret: SecretString,
) -> Result<Server, std::io::Error> {
    // `Key::from`在密钥不足64字节时会panic
    if hmac_secret.expose_secret().len() < 64 {
        return Err(std::io::Error::other("hmac_secret must be at least 64 bytes."));
    }
    let message_store =
        CookieMessageStore::builder(Key::from(hmac_secret.expose_secret().as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let store = web::Data::from(store);
    let github_client = web::Data::new(github_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(github_client.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            // 退订
            .route("/u/{email}", web::get().to(routes::unsubscribe))
            .route("/unsubscribe/{email}", web::get().to(routes::unsubscribe))
            .service(
                web::resource("/z")
                    .app_data(
                        web::QueryConfig::default()
                            .error_handler(routes::reject_malformed_query),
                    )
                    .route(web::get().to(routes::unsubscribe_anonymous)),
            )
            .route("/unsubscribed", web::get().to(routes::unsubscribed_page))
            // 外部链接
            .route("/chat", web::get().to(routes::chat))
            .route("/twitch", web::get().to(routes::twitch))
            .route(
                "/how-nonprofit-projects-work",
                web::get().to(routes::how_nonprofit_projects_work),
            )
            .route("/api/github", web::get().to(routes::github_counts))
            // 静态页面
            .route(
                "/the-fastest-web-page-on-the-internet",
                web::get().to(routes::fastest_web_page),
            )
            .route("/nonprofits", web::get().to(routes::nonprofits))
            .route("/nonprofits-form", web::get().to(routes::nonprofits_form))
            .route(
                "/pmi-acp-agile-project-managers",
                web::get().to(routes::agile_project_managers),
            )
            .route(
                "/pmi-acp-agile-project-managers-form",
                web::get().to(routes::agile_project_managers_form),
            )
            .route(
                "/coding-bootcamp-cost-calculator",
                web::get().to(routes::bootcamp_calculator),
            )
            .route("/stories", web::get().to(routes::show_testimonials))
            .route("/all-stories", web::get().to(routes::show_all_testimonials))
            .route(
                "/software-resources-for-nonprofits",
                web::get().to(routes::software_resources_for_nonprofits),
            )
            .route("/academic-honesty", web::get().to(routes::academic_honesty))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
