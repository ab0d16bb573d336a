use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use crate::config::GithubConfig;

pub const PULLS_UNAVAILABLE: &str = "Can't connect to github";
pub const ISSUES_UNAVAILABLE: &str = "Can't connect to GitHub";

pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    repository: String,
    client_id: String,
    client_secret: SecretString,
}

/// 数量，GitHub不可用时为提示字符串
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Count {
    Total(i64),
    Unavailable(&'static str),
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct RepoCounts {
    pub issues: Count,
    pub pulls: Count,
}

impl GithubClient {
    fn new(
        base_url: &str,
        repository: &str,
        client_id: &str,
        client_secret: SecretString,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("failed to build github client.")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').into(),
            repository: repository.into(),
            client_id: client_id.into(),
            client_secret,
        })
    }

    pub fn from_config(config: &GithubConfig) -> Result<Self, anyhow::Error> {
        Self::new(
            &config.base_url,
            &config.repository,
            &config.client_id,
            config.client_secret.clone(),
            &config.user_agent,
            Duration::from_millis(config.timeout_milliseconds),
        )
    }

    /// 先查询pull request，再查询issue
    /// GitHub的issue列表包含pull request，因此issue数量需要减去pull request数量
    #[tracing::instrument(name = "querying github counts", skip_all, fields(repository = %self.repository))]
    pub async fn counts(&self) -> reqwest::Result<RepoCounts> {
        let pulls = match self.count("pulls").await? {
            Some(n) => Count::Total(n),
            None => Count::Unavailable(PULLS_UNAVAILABLE),
        };

        let issues = self.count("issues").await?;
        let issues = match (&pulls, issues) {
            (Count::Total(pulls), Some(issues)) => Count::Total(issues - pulls),
            _ => Count::Unavailable(ISSUES_UNAVAILABLE),
        };

        Ok(RepoCounts { issues, pulls })
    }

    /// 只有连接失败才返回`Err`，响应不可用时返回`None`
    async fn count(&self, resource: &str) -> reqwest::Result<Option<i64>> {
        let url = format!("{}/repos/{}/{}", self.base_url, self.repository, resource);
        let res = self
            .client
            .get(url)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose_secret()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::warn!("github responded {} for {resource}.", res.status());
            return Ok(None);
        }

        let body = res.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }

        let count = match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(serde_json::Value::Array(items)) => Some(items.len() as i64),
            Ok(serde_json::Value::Object(fields)) => Some(fields.len() as i64),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("failed to parse github {resource} response. {e}");
                None
            }
        };

        Ok(count)
    }
}
