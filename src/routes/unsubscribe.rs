mod anonymous;
mod email;

pub use anonymous::{reject_malformed_query, unsubscribe_anonymous};
pub use email::unsubscribe;

use std::fmt::Debug;

use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;

use crate::util::{error_chain_fmt, redirect};

const SUCCESS_MESSAGE: &str = "We've successfully updated your Email preferences.";

/// 退订成功，跳转到确认页面
fn unsubscribed() -> HttpResponse {
    FlashMessage::info(SUCCESS_MESSAGE).send();
    redirect("/unsubscribed")
}

/// 输入错误和用户不存在时跳转回首页并提示，存储错误返回500
#[derive(thiserror::Error)]
pub enum UnsubscribeError {
    #[error("Oops... something is not right. We could not unsubscribe that email address")]
    InvalidUnsubscribeId,
    #[error("{0}")]
    InvalidEmail(String),
    #[error(
        "We couldn't find a user account to unsubscribe, \
        are you clicking a link from an email we sent?"
    )]
    UnknownUnsubscribeId,
    #[error("Email address not found. Please update your Email preferences from your settings.")]
    EmailNotFound,
    #[error("failed to look up users to unsubscribe.")]
    Store(#[source] anyhow::Error),
    #[error("failed to update email preferences.")]
    Mutation(#[source] anyhow::Error),
}

impl Debug for UnsubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for UnsubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            UnsubscribeError::Store(_) | UnsubscribeError::Mutation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            UnsubscribeError::InvalidUnsubscribeId | UnsubscribeError::InvalidEmail(_) => {
                FlashMessage::error(self.to_string()).send();
                redirect("/")
            }
            UnsubscribeError::UnknownUnsubscribeId | UnsubscribeError::EmailNotFound => {
                FlashMessage::info(self.to_string()).send();
                redirect("/")
            }
            UnsubscribeError::Store(_) | UnsubscribeError::Mutation(_) => {
                HttpResponse::new(self.status_code())
            }
        }
    }
}
