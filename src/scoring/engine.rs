use serde::Serialize;

use super::factors::{Factor, FactorSet, Weights, DEFAULT_WEIGHTS};
use super::grade::{grade_for, Grade};
use super::tier::{tier_for, ColorClass, Tier};

pub const MIN_SCORE: i32 = 300;
pub const MAX_SCORE: i32 = 850;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub value: f64,    // Raw factor value
    pub weight: f64,   // Weight applied
    pub weighted: f64, // value * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: i32,
    pub weighted_sum: f64, // Before rounding and clamping
    pub grade: Grade,
    pub tier: Tier,
    pub color: ColorClass,
    pub breakdown: Vec<FactorContribution>,
}

impl ScoreResult {
    /// True when the weighted sum fell outside [300, 850] and was clamped
    pub fn clamped(&self) -> bool {
        let rounded = self.weighted_sum.round();
        rounded < MIN_SCORE as f64 || rounded > MAX_SCORE as f64 || rounded.is_nan()
    }
}

/// Trust score for a factor set using the default weights.
///
/// Total over every input: the weighted sum is rounded half away from zero
/// and clamped to [300, 850]. NaN lands on 300.
pub fn compute_score(factors: &FactorSet) -> i32 {
    compute_score_with(factors, &DEFAULT_WEIGHTS)
}

/// Same as `compute_score` with caller-supplied weights. The weights are
/// expected to have passed `validate_weights`.
pub fn compute_score_with(factors: &FactorSet, weights: &Weights) -> i32 {
    clamp_score(weighted_sum(factors, weights))
}

/// Score plus grade, tier, color and per-factor breakdown.
pub fn calculate_score(factors: &FactorSet, weights: &Weights) -> ScoreResult {
    let breakdown: Vec<FactorContribution> = factors
        .iter()
        .map(|(factor, value)| {
            let weight = weights.get(factor);
            FactorContribution {
                factor,
                value,
                weight,
                weighted: value * weight,
            }
        })
        .collect();

    let sum: f64 = breakdown.iter().map(|c| c.weighted).sum();
    let score = clamp_score(sum);
    let tier = tier_for(score);

    tracing::trace!(weighted_sum = sum, score, "scored factor set");

    ScoreResult {
        score,
        weighted_sum: sum,
        grade: grade_for(score),
        tier,
        color: tier.color_class(),
        breakdown,
    }
}

fn weighted_sum(factors: &FactorSet, weights: &Weights) -> f64 {
    factors
        .iter()
        .map(|(factor, value)| value * weights.get(factor))
        .sum()
}

fn clamp_score(sum: f64) -> i32 {
    // `as` saturates at the i32 bounds and maps NaN to 0, both of which the
    // clamp then pulls into range.
    (sum.round() as i32).clamp(MIN_SCORE, MAX_SCORE)
}
