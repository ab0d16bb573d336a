use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::UserStore;
use crate::domain::{UnsubscribeId, User, UserEmail};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "根据unsubscribe_id查询用户", skip(self))]
    async fn find_by_unsubscribe_id(
        &self,
        unsubscribe_id: &UnsubscribeId,
    ) -> Result<Option<User>, anyhow::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, unsubscribe_id, send_quincy_email FROM users
            WHERE unsubscribe_id = $1
            "#,
        )
        .bind(unsubscribe_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .context("failed to perform a query to retrieve a user by unsubscribe id.")
    }

    #[tracing::instrument(name = "根据email查询用户", skip(self))]
    async fn find_by_email(&self, email: &UserEmail) -> Result<Vec<User>, anyhow::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, unsubscribe_id, send_quincy_email FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_all(&self.pool)
        .await
        .context("failed to perform a query to retrieve users by email.")
    }

    #[tracing::instrument(name = "更新send_quincy_email", skip(self))]
    async fn update_send_quincy_email(
        &self,
        user_id: Uuid,
        send_quincy_email: bool,
    ) -> Result<(), anyhow::Error> {
        sqlx::query(
            r#"
            UPDATE users SET send_quincy_email = $1
            WHERE id = $2
            "#,
        )
        .bind(send_quincy_email)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to update email preference of user {user_id}."))?;

        Ok(())
    }

    #[tracing::instrument(name = "重新读取用户", skip(self))]
    async fn reload(&self, user_id: Uuid) -> Result<Option<User>, anyhow::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, unsubscribe_id, send_quincy_email FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to reload user {user_id}."))
    }
}
