//! Client side of the external sentiment predictor.
//!
//! The gateway only ever sees a [`Prediction`]: every failure to obtain a
//! usable answer is absorbed here and replaced by [`Prediction::fallback`].

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::prediction::Prediction;

mod http;

pub use http::HttpPredictor;

/// Reasons the predictor produced no usable result.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("predictor unreachable: {0}")]
    Transport(String),
    #[error("predictor answered with status {0}")]
    Status(u16),
    #[error("predictor response could not be decoded: {0}")]
    Decode(String),
    #[error("predictor returned an empty label")]
    EmptyLabel,
}

impl PredictorError {
    pub fn reason(&self) -> &'static str {
        match self {
            PredictorError::Transport(_) => "transport",
            PredictorError::Status(_) => "status",
            PredictorError::Decode(_) => "decode",
            PredictorError::EmptyLabel => "empty_label",
        }
    }
}

#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    /// Classifies `text`. Never fails: unusable answers become the fallback record.
    async fn predict(&self, text: &str) -> Prediction;
}

pub type DynPredictor = Arc<dyn Predictor>;

pub fn create_predictor(config: &GatewayConfig) -> Result<DynPredictor, PredictorError> {
    let predictor = HttpPredictor::new(&config.predictor_url, config.predictor_timeout())?;
    Ok(Arc::new(predictor))
}

pub(crate) fn record_fallback(err: &PredictorError) -> Prediction {
    tracing::warn!(reason = err.reason(), error = %err, "Predictor unusable, using fallback");
    metrics::counter!("predictor_fallback_total", "reason" => err.reason()).increment(1);
    Prediction::fallback()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Answers every call with the same record and counts the calls.
    pub struct CountingPredictor {
        answer: Prediction,
        calls: AtomicUsize,
    }

    impl CountingPredictor {
        pub fn new(answer: Prediction) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: AtomicUsize::new(0),
            })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Predictor for CountingPredictor {
        async fn predict(&self, _text: &str) -> Prediction {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone()
        }
    }
}
