use actix_web::{error::QueryPayloadError, web, HttpRequest, HttpResponse};

use super::{unsubscribed, UnsubscribeError};
use crate::{
    domain::{UnsubscribeId, User},
    store::UserStore,
};

#[derive(serde::Deserialize)]
pub struct Parameters {
    #[serde(rename = "unsubscribeId")]
    unsubscribe_id: Option<String>,
}

/// 查询参数无法解析时（例如重复的`unsubscribeId`）按无效标识处理
pub fn reject_malformed_query(e: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("failed to parse unsubscribe query. {e}");
    UnsubscribeError::InvalidUnsubscribeId.into()
}

#[tracing::instrument(
    name = "用户点击邮件中的退订链接",
    skip(parameters, store),
    fields(user_id = tracing::field::Empty)
)]
pub async fn unsubscribe_anonymous(
    parameters: web::Query<Parameters>,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, UnsubscribeError> {
    let unsubscribe_id = parameters.0.unsubscribe_id.unwrap_or_default();
    let unsubscribe_id = UnsubscribeId::parse(&unsubscribe_id).map_err(|e| {
        tracing::warn!("{e}");
        UnsubscribeError::InvalidUnsubscribeId
    })?;

    let user = store
        .find_by_unsubscribe_id(&unsubscribe_id)
        .await
        .map_err(UnsubscribeError::Store)?
        .filter(User::has_email)
        .ok_or(UnsubscribeError::UnknownUnsubscribeId)?;
    tracing::Span::current().record("user_id", tracing::field::display(&user.id));

    store
        .update_send_quincy_email(user.id, false)
        .await
        .map_err(UnsubscribeError::Mutation)?;

    // 重新读取，保证内存中的记录与存储一致
    match store
        .reload(user.id)
        .await
        .map_err(UnsubscribeError::Mutation)?
    {
        Some(user) => tracing::info!(
            "用户退订成功, send_quincy_email = {}.",
            user.send_quincy_email
        ),
        None => tracing::warn!("用户更新后已不存在."),
    }

    Ok(unsubscribed())
}
