use uuid::Uuid;

/// 用户记录，退订流程只会修改`send_quincy_email`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub unsubscribe_id: String,
    pub send_quincy_email: bool,
}

impl User {
    /// 空字符串等同于没有邮件地址
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}
