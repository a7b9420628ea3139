#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axum::{Router, middleware, routing::get};
use sentiment_api::{construct_router, state::State};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod config;
mod telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let prometheus = telemetry::init()?;

    tracing::info!("Starting Sentiment Gateway API Service");

    let config = config::Config::from_env()?;
    tracing::info!(
        "Loaded configuration: predictor={}, timeout_ms={}, store={}",
        config.gateway.predictor_url,
        config.gateway.predictor_timeout_ms,
        config.gateway.store
    );

    let state = Arc::new(State::new(config.gateway.clone())?);

    let app = Router::new()
        .merge(construct_router(state))
        .route(
            "/metrics",
            get(move || {
                let prometheus = prometheus.clone();
                async move { prometheus.render() }
            }),
        )
        .route_layer(middleware::from_fn(telemetry::track_requests))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
