//! Core logic: feature pipeline, model, prediction and dashboard

pub mod dashboard;
pub mod dataset;
pub mod features;
pub mod model;
pub mod predictor;

pub use dataset::Dataset;
pub use predictor::{PredictError, Predictor};
