pub mod config;
pub mod eligibility;
pub mod engine;
pub mod factors;
pub mod grade;
pub mod tier;
pub mod validation;

pub use config::*;
pub use eligibility::{eligible_for_vault, RiskTier};
pub use engine::{
    calculate_score, compute_score, compute_score_with, FactorContribution, ScoreResult,
    MAX_SCORE, MIN_SCORE,
};
pub use factors::{Factor, FactorSet, Weights, DEFAULT_WEIGHTS};
pub use grade::{grade_for, Grade};
pub use tier::{color_class_for, tier_for, ColorClass, Tier};
pub use validation::{validate_scoring, validate_weights};
