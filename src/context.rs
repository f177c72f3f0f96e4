//! Service context - artifacts loaded once at startup, read-only afterwards

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::logic::model::{Classifier, ForestClassifier, ScalingAdapter};
use crate::logic::{Dataset, Predictor};

pub struct ServiceContext {
    pub predictor: Predictor,
    pub dataset: Option<Dataset>,
    pub loaded_at: DateTime<Utc>,
}

impl ServiceContext {
    pub fn new(predictor: Predictor, dataset: Option<Dataset>) -> Self {
        Self {
            predictor,
            dataset,
            loaded_at: Utc::now(),
        }
    }

    /// Load every artifact named by the config. Missing or invalid files are
    /// logged and leave that component in its degraded mode.
    pub fn load(config: &Config) -> Self {
        tracing::info!("Loading system resources...");

        let classifier: Option<Arc<dyn Classifier>> = match ForestClassifier::load(&config.model_path) {
            Ok(model) => {
                tracing::info!(
                    "Model loaded: {} ({} trees)",
                    model.name,
                    model.trees.len()
                );
                Some(Arc::new(model) as Arc<dyn Classifier>)
            }
            Err(e) => {
                tracing::warn!("Model unavailable ({}), using rule-based fallback", e);
                None
            }
        };

        let scaler = ScalingAdapter::load_or_passthrough(&config.scaler_path);

        let dataset = match Dataset::load(&config.data_path) {
            Ok(dataset) => {
                tracing::info!("Data loaded: {} of {} rows", dataset.len(), dataset.total());
                Some(dataset)
            }
            Err(e) => {
                tracing::warn!("Dataset unavailable ({}), dashboard will be empty", e);
                None
            }
        };

        Self::new(Predictor::new(classifier, scaler), dataset)
    }
}
