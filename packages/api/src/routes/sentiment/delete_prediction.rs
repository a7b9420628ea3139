use axum::{
    Json,
    extract::{Path, State},
};

use super::{ErrorResponse, MessageResponse};
use crate::{
    error::{ApiError, DELETED_MESSAGE},
    state::AppState,
};

#[utoipa::path(
    delete,
    path = "/sentiment/{id}",
    tag = "sentiment",
    params(("id" = String, Path, description = "Prediction identifier")),
    responses(
        (status = 200, description = "Prediction deleted", body = MessageResponse),
        (status = 404, description = "Unknown identifier", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "DELETE /sentiment/{id}", skip(state))]
pub async fn delete_prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.gateway.delete(&id).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
