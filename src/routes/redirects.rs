use actix_web::HttpResponse;

use crate::util::{moved_permanently, redirect};

pub async fn chat() -> HttpResponse {
    redirect("https://gitter.im/FreeCodeCamp/FreeCodeCamp")
}

pub async fn twitch() -> HttpResponse {
    redirect("https://twitch.tv/freecodecamp")
}

pub async fn how_nonprofit_projects_work() -> HttpResponse {
    moved_permanently("https://medium.freecodecamp.com/open-source-for-good-1a0ea9f32d5a")
}
