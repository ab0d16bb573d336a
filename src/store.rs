mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PostgresUserStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{UnsubscribeId, User, UserEmail};

/// 用户存储，每次调用只执行一次，不做重试
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_unsubscribe_id(
        &self,
        unsubscribe_id: &UnsubscribeId,
    ) -> Result<Option<User>, anyhow::Error>;

    /// 存储层不保证邮件地址唯一
    async fn find_by_email(&self, email: &UserEmail) -> Result<Vec<User>, anyhow::Error>;

    /// 只修改`send_quincy_email`一个字段
    async fn update_send_quincy_email(
        &self,
        user_id: Uuid,
        send_quincy_email: bool,
    ) -> Result<(), anyhow::Error>;

    /// 从存储中重新读取用户记录
    async fn reload(&self, user_id: Uuid) -> Result<Option<User>, anyhow::Error>;
}
