use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, read_text_request};
use crate::{
    error::ApiError,
    prediction::{PredictionResponse, TextRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/sentiment",
    tag = "sentiment",
    request_body = TextRequest,
    responses(
        (status = 200, description = "Text classified (label \"Undefined\" with probability 0.0 when the predictor is unavailable)", body = PredictionResponse),
        (status = 400, description = "Text missing or shorter than 5 characters", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "POST /sentiment", skip(state, payload))]
pub async fn create_prediction(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let request = read_text_request(payload);
    let created = state.gateway.create(request.text.as_deref()).await?;
    let body = Json(PredictionResponse::from(created.prediction));

    let response = match created.id {
        Some(id) => {
            tracing::info!(id = %id, "Prediction stored");
            ([(header::LOCATION, format!("/sentiment/{}", id))], body).into_response()
        }
        None => body.into_response(),
    };

    Ok(response)
}
