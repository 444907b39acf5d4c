//! Job search server entry point.

use backend::{config::BackendConfig, corpus::load_corpus, server::serve};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BackendConfig::from_env()?;
    tracing::info!("starting job search server: {:?}", config);

    let corpus = load_corpus(&config).await?;
    serve(config, corpus).await
}
