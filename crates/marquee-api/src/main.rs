//! # marquee-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the movie catalog.
//! Binds to a configurable port (default 3000).

use marquee_api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // Load the seed dataset into the catalog; refuse to start on a bad seed.
    let state = AppState::new().map_err(|e| {
        tracing::error!("seed dataset failed to load: {e}");
        e
    })?;

    let app = marquee_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("marquee API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
