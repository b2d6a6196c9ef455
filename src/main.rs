mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;
mod websocket;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nosugar_gateway=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::load()?;
    info!("Translation engine: {}", config.translation_engine);
    if config.client_api_key.is_none() {
        info!("CLIENT_API_KEY not set; translation endpoint is open to all callers");
    }

    // Engine selection happens exactly once, here.
    let app_state = AppState::new(&config);
    let app = routes::build_app(app_state, config.request_timeout());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server started on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
