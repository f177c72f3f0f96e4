//! Prediction Service
//!
//! payload → inputs → features → vector → scaling → probability → result.
//! Uses the loaded classifier when present, the radius rule otherwise.

use std::sync::Arc;

use serde_json::Value;

use crate::logic::features::{FeatureVector, PlanetInputs, RawInput};
use crate::logic::model::{
    fallback_probability, is_habitable, round_confidence, sanitize_probability, Classifier,
    ModelError, ScalingAdapter,
};
use crate::models::{HabitabilityLabel, PredictionMethod, PredictionResult, UNKNOWN_PLANET};

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

/// Classifier (optional) plus scaler, shared read-only across requests
#[derive(Clone, Default)]
pub struct Predictor {
    classifier: Option<Arc<dyn Classifier>>,
    scaler: ScalingAdapter,
}

impl Predictor {
    pub fn new(classifier: Option<Arc<dyn Classifier>>, scaler: ScalingAdapter) -> Self {
        Self { classifier, scaler }
    }

    pub fn classifier_name(&self) -> Option<&str> {
        self.classifier.as_deref().map(|c| c.name())
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn has_scaler(&self) -> bool {
        self.scaler.is_loaded()
    }

    /// Parse a request body and predict. An empty body counts as `{}`.
    pub fn predict_body(&self, body: &[u8]) -> Result<PredictionResult, PredictError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return self.predict_value(&Value::Object(RawInput::new()));
        }
        let value: Value = serde_json::from_slice(body)?;
        self.predict_value(&value)
    }

    pub fn predict_value(&self, value: &Value) -> Result<PredictionResult, PredictError> {
        match value {
            Value::Object(raw) => self.predict(raw),
            other => Err(PredictError::NotAnObject(json_kind(other))),
        }
    }

    pub fn predict(&self, raw: &RawInput) -> Result<PredictionResult, PredictError> {
        let (inputs, defaulted) = PlanetInputs::from_raw(raw);
        if !defaulted.is_empty() {
            tracing::debug!("Defaulted fields: {:?}", defaulted);
        }

        let vector = FeatureVector::assemble(&inputs.engineer());
        tracing::trace!("Feature vector: {:?}", vector.iter().collect::<Vec<_>>());
        let scaled = self.scaler.apply(&vector);

        let (probability, method) = match &self.classifier {
            Some(classifier) => (classifier.predict_proba(&scaled)?, PredictionMethod::Classifier),
            None => (fallback_probability(inputs.radius), PredictionMethod::Fallback),
        };

        let probability = sanitize_probability(probability);
        let habitable = is_habitable(probability);

        let result = PredictionResult {
            input_planet: planet_name(raw.get("Name")),
            prediction: HabitabilityLabel::from_flag(habitable),
            confidence_score: round_confidence(probability),
            habitable_flag: habitable as u8,
            method,
        };

        tracing::info!(
            planet = %result.input_planet,
            probability = result.confidence_score,
            habitability_score = vector.get("Habitability_Score").unwrap_or_default(),
            method = ?method,
            "Prediction complete"
        );

        Ok(result)
    }
}

/// Caller name, or the placeholder when absent or empty
fn planet_name(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN_PLANET.to_string(),
        Some(Value::String(s)) if s.is_empty() => UNKNOWN_PLANET.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_COUNT;
    use serde_json::json;

    /// Returns a fixed probability regardless of input
    struct FixedClassifier(f64);

    impl Classifier for FixedClassifier {
        fn predict_proba(&self, _: &[f64; FEATURE_COUNT]) -> Result<f64, ModelError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct BrokenClassifier;

    impl Classifier for BrokenClassifier {
        fn predict_proba(&self, _: &[f64; FEATURE_COUNT]) -> Result<f64, ModelError> {
            Err(ModelError::FeatureOutOfRange { index: 40, count: FEATURE_COUNT })
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn with_probability(p: f64) -> Predictor {
        Predictor::new(Some(Arc::new(FixedClassifier(p))), ScalingAdapter::default())
    }

    fn raw(value: Value) -> RawInput {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_fallback_earth_like() {
        let result = Predictor::default()
            .predict(&raw(json!({"Name": "TestPlanet", "Radius": 1.0, "EqTemp": 288, "Insolation": 1.0, "Period": 365})))
            .unwrap();

        assert_eq!(result.input_planet, "TestPlanet");
        assert_eq!(result.prediction, HabitabilityLabel::PotentiallyHabitable);
        assert_eq!(result.confidence_score, 0.9);
        assert_eq!(result.habitable_flag, 1);
        assert_eq!(result.method, PredictionMethod::Fallback);
    }

    #[test]
    fn test_fallback_large_radius() {
        let result = Predictor::default().predict(&raw(json!({"Radius": 2.0}))).unwrap();
        assert_eq!(result.confidence_score, 0.1);
        assert_eq!(result.habitable_flag, 0);
        assert_eq!(result.prediction, HabitabilityLabel::NonHabitable);
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let result = Predictor::default().predict(&RawInput::new()).unwrap();
        assert_eq!(result.input_planet, UNKNOWN_PLANET);
        // Default radius 1.0 sits inside the fallback band
        assert_eq!(result.habitable_flag, 1);
    }

    #[test]
    fn test_malformed_radius_defaults() {
        let result = Predictor::default().predict(&raw(json!({"Radius": "big"}))).unwrap();
        assert_eq!(result.confidence_score, 0.9);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = with_probability(0.6).predict(&RawInput::new()).unwrap();
        assert_eq!(at.habitable_flag, 0);
        assert_eq!(at.prediction, HabitabilityLabel::NonHabitable);

        let above = with_probability(0.6000001).predict(&RawInput::new()).unwrap();
        assert_eq!(above.habitable_flag, 1);
        assert_eq!(above.confidence_score, 0.6);
        assert_eq!(above.method, PredictionMethod::Classifier);
    }

    #[test]
    fn test_degenerate_probabilities() {
        for p in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -3.0, 7.5] {
            let result = with_probability(p).predict(&RawInput::new()).unwrap();
            assert!(result.confidence_score.is_finite());
            assert!((0.0..=1.0).contains(&result.confidence_score), "p={p}");
        }
        let nan = with_probability(f64::NAN).predict(&RawInput::new()).unwrap();
        assert_eq!(nan.confidence_score, 0.0);
        assert_eq!(nan.habitable_flag, 0);
    }

    #[test]
    fn test_classifier_error_propagates() {
        let predictor = Predictor::new(Some(Arc::new(BrokenClassifier)), ScalingAdapter::default());
        assert!(matches!(predictor.predict(&RawInput::new()), Err(PredictError::Model(_))));
    }

    #[test]
    fn test_names() {
        assert_eq!(planet_name(None), UNKNOWN_PLANET);
        assert_eq!(planet_name(Some(&json!(""))), UNKNOWN_PLANET);
        assert_eq!(planet_name(Some(&Value::Null)), UNKNOWN_PLANET);
        assert_eq!(planet_name(Some(&json!("Kepler-22b"))), "Kepler-22b");
        assert_eq!(planet_name(Some(&json!(42))), "42");
    }

    #[test]
    fn test_out_of_range_number_is_defaulted() {
        let result = Predictor::default()
            .predict_body(br#"{"Name":"X","Radius":1e400}"#)
            .unwrap();
        assert_eq!(result.input_planet, "X");
        assert_eq!(result.confidence_score, 0.9);
    }

    #[test]
    fn test_predict_body() {
        let predictor = Predictor::default();
        assert!(predictor.predict_body(b"").is_ok());
        assert!(predictor.predict_body(b"{}").is_ok());
        assert!(matches!(predictor.predict_body(b"[1, 2]"), Err(PredictError::NotAnObject("array"))));
        assert!(matches!(predictor.predict_body(b"{not json"), Err(PredictError::InvalidJson(_))));
    }
}
