use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::gateway::Gateway;
use crate::predictor::{DynPredictor, PredictorError, create_predictor};
use crate::repository::{DynRepository, create_repository};

pub type AppState = Arc<State>;

pub struct State {
    pub config: GatewayConfig,
    pub gateway: Gateway,
}

impl State {
    /// Wires the HTTP predictor and the configured store.
    pub fn new(config: GatewayConfig) -> Result<Self, PredictorError> {
        let predictor = create_predictor(&config)?;
        let repository = create_repository(config.store, predictor.clone());
        Ok(Self::with_parts(config, predictor, repository))
    }

    pub fn with_parts(
        config: GatewayConfig,
        predictor: DynPredictor,
        repository: DynRepository,
    ) -> Self {
        Self {
            config,
            gateway: Gateway::new(predictor, repository),
        }
    }
}
