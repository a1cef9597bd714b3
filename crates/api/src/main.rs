use std::sync::Arc;

use anyhow::Context;
use ecosprout_api::ServerConfig;
use ecosprout_store::InMemoryContentStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ecosprout_observability::init();

    let config = ServerConfig::from_env()?;
    let app = ecosprout_api::app::build_app(Arc::new(InMemoryContentStore::seeded()));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
