use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::prediction::Prediction;
use crate::predictor::DynPredictor;

mod fixture;
mod memory;

pub use fixture::FixtureRepository;
pub use memory::MemoryRepository;

/// Prediction records addressed by identifier.
///
/// Unknown ids are reported as `None` (get/update) or `false` (delete); the
/// gateway turns those into `NotFound`.
#[async_trait::async_trait]
pub trait PredictionRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<Prediction>, GatewayError>;

    /// Replaces the record behind `id` with one derived from `text`.
    async fn update(&self, id: &str, text: &str) -> Result<Option<Prediction>, GatewayError>;

    async fn delete(&self, id: &str) -> Result<bool, GatewayError>;

    /// Keeps a freshly created prediction. Returns its id when the backend persists records.
    async fn insert(&self, prediction: Prediction) -> Result<Option<String>, GatewayError>;
}

pub type DynRepository = Arc<dyn PredictionRepository>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryBackend {
    #[default]
    Memory,
    Fixture,
}

impl FromStr for RepositoryBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => Ok(RepositoryBackend::Memory),
            "fixture" | "fixtures" | "static" => Ok(RepositoryBackend::Fixture),
            other => Err(format!(
                "Unknown store backend '{}'. Expected: memory or fixture",
                other
            )),
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryBackend::Memory => write!(f, "memory"),
            RepositoryBackend::Fixture => write!(f, "fixture"),
        }
    }
}

/// Records every backend starts out with.
pub(crate) fn seed_records() -> [(&'static str, Prediction); 2] {
    [
        ("1", Prediction::new("Positive", 0.95)),
        ("2", Prediction::new("Negative", 0.80)),
    ]
}

pub fn create_repository(backend: RepositoryBackend, predictor: DynPredictor) -> DynRepository {
    match backend {
        RepositoryBackend::Memory => Arc::new(MemoryRepository::seeded(predictor)),
        RepositoryBackend::Fixture => Arc::new(FixtureRepository),
    }
}
