use tracing_subscriber::{EnvFilter, fmt};

use books::shell::config::AppConfig;
use books::shell::http::app;
use books::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    // In-memory deps for now
    let state = AppState::in_memory();

    let addr = config.socket_addr()?;
    tracing::info!("Books API: http://{}/books", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
