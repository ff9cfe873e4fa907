use tracing_subscriber::EnvFilter;

use pawcare_api::config::{ApiConfig, LogFormat};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Plain => subscriber.init(),
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "pawcare api listening");

    axum::serve(listener, pawcare_api::router()).await?;
    Ok(())
}
