use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use super::{ErrorResponse, read_text_request};
use crate::{
    error::ApiError,
    prediction::{PredictionResponse, TextRequest},
    state::AppState,
};

#[utoipa::path(
    put,
    path = "/sentiment/{id}",
    tag = "sentiment",
    params(("id" = String, Path, description = "Prediction identifier")),
    request_body = TextRequest,
    responses(
        (status = 200, description = "Updated prediction", body = PredictionResponse),
        (status = 400, description = "Text missing or shorter than 5 characters", body = ErrorResponse),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "PUT /sentiment/{id}", skip(state, payload))]
pub async fn update_prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let request = read_text_request(payload);
    let prediction = state.gateway.update(&id, request.text.as_deref()).await?;
    Ok(Json(prediction.into()))
}
