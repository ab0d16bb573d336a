use std::{net::TcpListener, sync::Arc, time::Duration};

use campsite::{github_client::GithubClient, store::PostgresUserStore, telemetry};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 遥测初始化
    telemetry::init_subscriber("campsite", std::io::stdout);

    let config = campsite::config::config().expect("failed to read config.yaml.");
    let listener = TcpListener::bind(config.web.server_address())?;
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.database.with_db());

    let store = Arc::new(PostgresUserStore::new(pool));
    let github_client =
        GithubClient::from_config(&config.github).expect("failed to build github client.");

    campsite::run(listener, store, github_client, config.web.hmac_secret)?.await
}
