use super::{PredictionRepository, seed_records};
use crate::error::GatewayError;
use crate::prediction::Prediction;

/// Stateless backend answering from a fixed rule set.
///
/// Nothing is ever stored: reads see the seed records, updates ignore the text
/// and always succeed, and only id "1" can be deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRepository;

#[async_trait::async_trait]
impl PredictionRepository for FixtureRepository {
    async fn get(&self, id: &str) -> Result<Option<Prediction>, GatewayError> {
        Ok(seed_records()
            .into_iter()
            .find(|(key, _)| *key == id)
            .map(|(_, prediction)| prediction))
    }

    async fn update(&self, id: &str, _text: &str) -> Result<Option<Prediction>, GatewayError> {
        let prediction = if id == "1" {
            Prediction::new("Neutral", 0.60)
        } else {
            Prediction::new("Positive", 0.85)
        };
        Ok(Some(prediction))
    }

    async fn delete(&self, id: &str) -> Result<bool, GatewayError> {
        Ok(id == "1")
    }

    async fn insert(&self, _prediction: Prediction) -> Result<Option<String>, GatewayError> {
        Ok(None)
    }
}
