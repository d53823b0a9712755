use super::config::ScoringConfig;
use super::factors::{Factor, Weights};

/// Allowed drift of the weight total from 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Validate a weight set. Returns all problems at once (not just the first).
pub fn validate_weights(weights: &Weights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for factor in Factor::ALL {
        let weight = weights.get(factor);
        if !weight.is_finite() {
            errors.push(format!(
                "scoring.weights.{}: must be a finite number",
                factor.key()
            ));
        } else if weight < 0.0 {
            errors.push(format!(
                "scoring.weights.{}: must be non-negative (got {})",
                factor.key(),
                weight
            ));
        }
    }

    // Only meaningful once every weight is a real number
    if errors.is_empty() {
        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            errors.push(format!("scoring.weights: must sum to 1.0 (got {})", total));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate scoring configuration at startup.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    match config.weights {
        Some(ref weights) => validate_weights(weights),
        None => Ok(()),
    }
}
