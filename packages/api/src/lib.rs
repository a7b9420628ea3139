//! Sentiment Gateway
//!
//! Accepts free text over HTTP, forwards it to an external sentiment predictor
//! and answers with a label/probability pair. Stored predictions can be read,
//! re-classified and deleted by identifier.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sentiment_api::{config::GatewayConfig, construct_router, state::State};
//!
//! let state = Arc::new(State::new(GatewayConfig::from_env()?)?);
//! let app = construct_router(state);
//! ```

use axum::{Json, Router, routing::get};
use state::AppState;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

mod routes;

pub mod config;
pub mod error;
pub mod gateway;
pub mod openapi;
pub mod prediction;
pub mod predictor;
pub mod repository;
pub mod state;

pub use axum;

pub fn construct_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::sentiment::routes())
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}
