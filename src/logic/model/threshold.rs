//! Decision threshold and probability sanitization

/// Probability above which a planet is reported habitable (strict)
pub const HABITABLE_THRESHOLD: f64 = 0.6;

/// Fallback rule band on planet radius (exclusive, Earth radii)
pub const FALLBACK_RADIUS_MIN: f64 = 0.8;
pub const FALLBACK_RADIUS_MAX: f64 = 1.4;
pub const FALLBACK_HABITABLE_PROB: f64 = 0.9;
pub const FALLBACK_NON_HABITABLE_PROB: f64 = 0.1;

/// `probability > HABITABLE_THRESHOLD`
pub fn is_habitable(probability: f64) -> bool {
    probability > HABITABLE_THRESHOLD
}

/// NaN and infinities become 0.0, everything else is kept within [0, 1]
pub fn sanitize_probability(probability: f64) -> f64 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Rule used when no classifier is loaded
pub fn fallback_probability(radius: f64) -> f64 {
    if radius > FALLBACK_RADIUS_MIN && radius < FALLBACK_RADIUS_MAX {
        FALLBACK_HABITABLE_PROB
    } else {
        FALLBACK_NON_HABITABLE_PROB
    }
}

/// Round to 4 decimal places for reporting
pub fn round_confidence(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_habitable(0.6));
        assert!(is_habitable(0.6000001));
        assert!(!is_habitable(0.0));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_probability(f64::NAN), 0.0);
        assert_eq!(sanitize_probability(f64::INFINITY), 0.0);
        assert_eq!(sanitize_probability(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_probability(1.2), 1.0);
        assert_eq!(sanitize_probability(-0.1), 0.0);
        assert_eq!(sanitize_probability(0.42), 0.42);
    }

    #[test]
    fn test_fallback_band_is_exclusive() {
        assert_eq!(fallback_probability(1.0), 0.9);
        assert_eq!(fallback_probability(2.0), 0.1);
        assert_eq!(fallback_probability(0.8), 0.1);
        assert_eq!(fallback_probability(1.4), 0.1);
        assert_eq!(fallback_probability(1.39), 0.9);
    }

    #[test]
    fn test_round_confidence() {
        assert_eq!(round_confidence(0.123456), 0.1235);
        assert_eq!(round_confidence(0.9), 0.9);
        assert_eq!(round_confidence(0.6000001), 0.6);
    }
}
