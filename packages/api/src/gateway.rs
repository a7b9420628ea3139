use crate::error::GatewayError;
use crate::prediction::{Prediction, validate_text};
use crate::predictor::DynPredictor;
use crate::repository::DynRepository;

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    pub prediction: Prediction,
    /// Identifier assigned by the repository, if it keeps records.
    pub id: Option<String>,
}

/// Validates requests and orchestrates the predictor and the repository.
///
/// Holds no mutable state of its own; both collaborators are injected.
#[derive(Clone)]
pub struct Gateway {
    predictor: DynPredictor,
    repository: DynRepository,
}

impl Gateway {
    pub fn new(predictor: DynPredictor, repository: DynRepository) -> Self {
        Self {
            predictor,
            repository,
        }
    }

    pub async fn create(&self, text: Option<&str>) -> Result<Created, GatewayError> {
        let text = validate_text(text)?;
        let prediction = self.predictor.predict(text).await;
        let id = self.repository.insert(prediction.clone()).await?;
        Ok(Created { prediction, id })
    }

    pub async fn get(&self, id: &str) -> Result<Prediction, GatewayError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    pub async fn update(&self, id: &str, text: Option<&str>) -> Result<Prediction, GatewayError> {
        let text = validate_text(text)?;
        self.repository
            .update(id, text)
            .await?
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(GatewayError::NotFound(id.to_string()))
        }
    }
}
