use actix_web::{web, HttpResponse};
use futures::future::try_join_all;

use super::{unsubscribed, UnsubscribeError};
use crate::{domain::UserEmail, store::UserStore};

#[derive(serde::Deserialize)]
pub struct PathData {
    email: String,
}

#[tracing::instrument(
    name = "通过邮件地址退订",
    skip(path, store),
    fields(email = %path.email, users = tracing::field::Empty)
)]
pub async fn unsubscribe(
    path: web::Path<PathData>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, UnsubscribeError> {
    let email = UserEmail::parse(&path.email).map_err(UnsubscribeError::InvalidEmail)?;

    let users = store
        .find_by_email(&email)
        .await
        .map_err(UnsubscribeError::Store)?;
    if users.is_empty() {
        return Err(UnsubscribeError::EmailNotFound);
    }
    tracing::Span::current().record("users", users.len());

    // 同一邮件地址可能对应多个用户，全部更新完成后再响应
    // 其中一个失败时，已完成的更新不会回滚
    try_join_all(
        users
            .iter()
            .map(|user| store.update_send_quincy_email(user.id, false)),
    )
    .await
    .map_err(UnsubscribeError::Mutation)?;
    tracing::info!("{}位用户退订成功.", users.len());

    Ok(unsubscribed())
}
