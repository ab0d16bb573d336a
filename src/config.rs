use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub database: DBConfig,
    pub github: GithubConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// 签名flash消息cookie，长度至少64字节
    pub hmac_secret: SecretString,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct DBConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub db_name: String,
    #[serde(default)]
    pub require_ssl: bool,
}

impl DBConfig {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.db_name)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct GithubConfig {
    pub base_url: String,
    /// `owner/name`
    pub repository: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

/// 读取`config.yaml`，再用`APP_`前缀的环境变量覆盖
/// 例如`APP_WEB__PORT=8080`
pub fn config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
}
