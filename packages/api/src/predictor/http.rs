use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use super::{Predictor, PredictorError, record_fallback};
use crate::prediction::Prediction;

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Predictor reached with a single JSON POST per call.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, PredictorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub async fn try_predict(&self, text: &str) -> Result<Prediction, PredictorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        // An empty body or a JSON `null` means the predictor had nothing to say.
        let prediction: Option<Prediction> =
            serde_json::from_slice(&body).map_err(|e| PredictorError::Decode(e.to_string()))?;
        let prediction =
            prediction.ok_or_else(|| PredictorError::Decode("null response".to_string()))?;

        if prediction.label.trim().is_empty() {
            return Err(PredictorError::EmptyLabel);
        }

        Ok(prediction)
    }
}

#[async_trait::async_trait]
impl Predictor for HttpPredictor {
    #[tracing::instrument(name = "predictor.predict", skip(self, text), fields(endpoint = %self.endpoint))]
    async fn predict(&self, text: &str) -> Prediction {
        match self.try_predict(text).await {
            Ok(prediction) => {
                if prediction.is_fallback() {
                    // Indistinguishable from a degraded answer once it leaves this client.
                    tracing::info!("Predictor itself answered with the undefined record");
                } else {
                    tracing::debug!(label = %prediction.label, probability = prediction.probability, "Predictor answered");
                }
                prediction
            }
            Err(err) => record_fallback(&err),
        }
    }
}
