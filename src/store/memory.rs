use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserStore;
use crate::domain::{UnsubscribeId, User, UserEmail};

/// 内存存储，用于测试和本地运行
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn get(&self, user_id: Uuid) -> Option<User> {
        self.users.read().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_unsubscribe_id(
        &self,
        unsubscribe_id: &UnsubscribeId,
    ) -> Result<Option<User>, anyhow::Error> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.unsubscribe_id == unsubscribe_id.as_ref())
            .cloned())
    }

    async fn find_by_email(&self, email: &UserEmail) -> Result<Vec<User>, anyhow::Error> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| u.email.as_deref() == Some(email.as_ref()))
            .cloned()
            .collect())
    }

    async fn update_send_quincy_email(
        &self,
        user_id: Uuid,
        send_quincy_email: bool,
    ) -> Result<(), anyhow::Error> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| anyhow::anyhow!("user {user_id} does not exist."))?;
        user.send_quincy_email = send_quincy_email;

        Ok(())
    }

    async fn reload(&self, user_id: Uuid) -> Result<Option<User>, anyhow::Error> {
        Ok(self.get(user_id).await)
    }
}
