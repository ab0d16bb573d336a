/// 退订链接中的记录标识，格式与Mongo ObjectId一致：24位十六进制字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsubscribeId(String);

impl UnsubscribeId {
    const LENGTH: usize = 24;

    pub fn parse(s: &str) -> Result<UnsubscribeId, String> {
        if s.len() == Self::LENGTH && s.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.into()))
        } else {
            Err(format!("`{s}` is not a valid unsubscribe id."))
        }
    }
}

impl AsRef<str> for UnsubscribeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
