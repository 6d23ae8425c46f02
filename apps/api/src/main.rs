mod config;
mod errors;
mod lookup;
mod profile;
mod profile_client;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::lookup::LookupOrchestrator;
use crate::profile_client::{ProfileClient, ProfileSource};
use crate::render::PageRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Profile Viewer v{}", env!("CARGO_PKG_VERSION"));

    if config.rapidapi_key.is_empty() || config.rapidapi_host.is_empty() {
        warn!("RAPIDAPI_KEY / RAPIDAPI_HOST not set; lookups will be rejected by the provider");
    } else {
        info!(
            "Profile API: {} (key {})",
            config.profile_api_base_url,
            config.masked_key()
        );
    }

    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let profile_source: Arc<dyn ProfileSource> = Arc::new(ProfileClient::new(
        http_client,
        config.profile_api_base_url.clone(),
        config.rapidapi_key.clone(),
        config.rapidapi_host.clone(),
    ));

    match config.fetch_timeout {
        Some(limit) => info!("Profile lookups time out after {}s", limit.as_secs()),
        None => info!("Profile lookup timeout disabled"),
    }
    let lookup = Arc::new(LookupOrchestrator::new(
        profile_source.clone(),
        config.fetch_timeout,
    ));

    let renderer = Arc::new(PageRenderer::new()?);

    let state = AppState {
        config: config.clone(),
        lookup,
        profile_source,
        renderer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
