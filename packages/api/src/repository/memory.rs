use dashmap::DashMap;

use super::{PredictionRepository, seed_records};
use crate::error::GatewayError;
use crate::prediction::Prediction;
use crate::predictor::DynPredictor;

/// Process-local store. Updates re-classify the new text through the predictor.
pub struct MemoryRepository {
    records: DashMap<String, Prediction>,
    predictor: DynPredictor,
}

impl MemoryRepository {
    pub fn new(predictor: DynPredictor) -> Self {
        Self {
            records: DashMap::new(),
            predictor,
        }
    }

    pub fn seeded(predictor: DynPredictor) -> Self {
        let repo = Self::new(predictor);
        for (id, prediction) in seed_records() {
            repo.records.insert(id.to_string(), prediction);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait::async_trait]
impl PredictionRepository for MemoryRepository {
    async fn get(&self, id: &str) -> Result<Option<Prediction>, GatewayError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, id: &str, text: &str) -> Result<Option<Prediction>, GatewayError> {
        if !self.records.contains_key(id) {
            return Ok(None);
        }

        // No map guard is held across the predictor call.
        let prediction = self.predictor.predict(text).await;

        match self.records.get_mut(id) {
            Some(mut entry) => {
                *entry = prediction.clone();
                Ok(Some(prediction))
            }
            // deleted while the predictor was running
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, GatewayError> {
        Ok(self.records.remove(id).is_some())
    }

    async fn insert(&self, prediction: Prediction) -> Result<Option<String>, GatewayError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.records.insert(id.clone(), prediction);
        Ok(Some(id))
    }
}
