use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::prediction::TextRequest;
use crate::state::AppState;

pub mod create_prediction;
pub mod delete_prediction;
pub mod get_prediction;
pub mod update_prediction;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sentiment", post(create_prediction::create_prediction))
        .route(
            "/sentiment/{id}",
            get(get_prediction::get_prediction)
                .put(update_prediction::update_prediction)
                .delete(delete_prediction::delete_prediction),
        )
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// An unreadable body is treated like a body without text.
pub(crate) fn read_text_request(payload: Result<Json<TextRequest>, JsonRejection>) -> TextRequest {
    match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body");
            TextRequest::default()
        }
    }
}
