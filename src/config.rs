//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Serialized classifier artifact (JSON)
    pub model_path: PathBuf,

    /// Serialized scaling transform artifact (JSON)
    pub scaler_path: PathBuf,

    /// Planet dataset (CSV)
    pub data_path: PathBuf,

    /// Environment (development, production)
    pub environment: String,

    /// Rows fabricated by the generator
    pub generator_samples: usize,

    /// RNG seed used by the generator
    pub generator_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            model_path: PathBuf::from("models/random_forest.json"),
            scaler_path: PathBuf::from("models/scaler.json"),
            data_path: PathBuf::from("data/habitability_data.csv"),
            environment: "development".to_string(),
            generator_samples: 1000,
            generator_seed: 42,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            scaler_path: env::var("SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scaler_path),

            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            generator_samples: env::var("GENERATOR_SAMPLES")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.generator_samples),

            generator_seed: env::var("GENERATOR_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.generator_seed),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
