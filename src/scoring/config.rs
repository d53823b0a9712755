use serde::{Deserialize, Serialize};

use super::eligibility::RiskTier;
use super::factors::Weights;

/// Scoring configuration.
///
/// Both fields are optional; missing ones fall back to the production
/// defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     transaction_history: 0.25
///     protocol_interaction: 0.20
///     liquidity_provision: 0.15
///     loan_repayment: 0.20
///     governance_participation: 0.10
///     time_in_ecosystem: 0.10
///   risk_tier: Medium
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Factor weights; must sum to 1.0
    #[serde(default)]
    pub weights: Option<Weights>,

    /// Risk tier used for the eligibility line when none is given on the
    /// command line
    #[serde(default)]
    pub risk_tier: Option<RiskTier>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Some(Weights::default()),
            risk_tier: Some(RiskTier::Medium),
        }
    }
}

impl ScoringConfig {
    pub fn effective_weights(&self) -> Weights {
        self.weights.unwrap_or_default()
    }

    pub fn effective_risk_tier(&self) -> RiskTier {
        self.risk_tier.clone().unwrap_or(RiskTier::Medium)
    }
}
