use axum::{
    Json,
    extract::{Path, State},
};

use super::ErrorResponse;
use crate::{error::ApiError, prediction::PredictionResponse, state::AppState};

#[utoipa::path(
    get,
    path = "/sentiment/{id}",
    tag = "sentiment",
    params(("id" = String, Path, description = "Prediction identifier")),
    responses(
        (status = 200, description = "Stored prediction", body = PredictionResponse),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "GET /sentiment/{id}", skip(state))]
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let prediction = state.gateway.get(&id).await?;
    Ok(Json(prediction.into()))
}
