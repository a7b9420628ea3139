use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GatewayError;

/// Minimum number of characters (not bytes) a text must carry to be classified.
pub const MIN_TEXT_CHARS: usize = 5;

pub const FALLBACK_LABEL: &str = "Undefined";

/// A sentiment label with its confidence score.
///
/// This is also the wire shape the external predictor answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub label: String,
    pub probability: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }

    /// Record returned when the predictor gave no usable answer.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_LABEL, 0.0)
    }

    pub fn is_fallback(&self) -> bool {
        self.label == FALLBACK_LABEL && self.probability == 0.0
    }
}

/// Caller-facing representation of a [`Prediction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    pub previsao: String,
    pub probabilidade: f64,
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            previsao: prediction.label,
            probabilidade: prediction.probability,
        }
    }
}

/// Body accepted by the create and update endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TextRequest {
    pub text: Option<String>,
}

pub fn validate_text(text: Option<&str>) -> Result<&str, GatewayError> {
    match text {
        Some(text) if text.chars().count() >= MIN_TEXT_CHARS => Ok(text),
        _ => Err(GatewayError::InvalidInput),
    }
}
