use actix_web::{web, HttpResponse};

use crate::{github_client::GithubClient, util::e500};

/// 返回仓库的issue和pull request数量
#[tracing::instrument(name = "查询GitHub仓库数据", skip(github_client))]
pub async fn github_counts(
    github_client: web::Data<GithubClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let counts = github_client.counts().await.map_err(e500)?;

    Ok(HttpResponse::Ok().json(counts))
}
