use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct UserEmail(String);

impl UserEmail {
    /// 错误信息会直接展示给用户
    pub fn parse(s: &str) -> Result<UserEmail, String> {
        if s.validate_email() {
            Ok(Self(s.into()))
        } else {
            Err(format!(r#""{s}" isn't a valid email address."#))
        }
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
