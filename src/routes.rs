mod github;
mod pages;
mod redirects;
mod unsubscribe;

pub use github::*;
pub use pages::*;
pub use redirects::*;
pub use unsubscribe::*;

use actix_web::{HttpResponse, Responder};

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}
