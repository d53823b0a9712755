use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vault risk tier. Anything unrecognized lands in `Other` and is never
/// gated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskTier {
    /// Minimum score for the tier, or `None` when the tier is not gated.
    pub fn min_score(&self) -> Option<i32> {
        match self {
            RiskTier::Low => Some(600),
            RiskTier::Medium => Some(650),
            RiskTier::High => Some(700),
            RiskTier::Other(_) => None,
        }
    }

    pub fn admits(&self, score: i32) -> bool {
        match self.min_score() {
            Some(min) => score >= min,
            None => true,
        }
    }
}

impl From<&str> for RiskTier {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("low") {
            RiskTier::Low
        } else if trimmed.eq_ignore_ascii_case("medium") {
            RiskTier::Medium
        } else if trimmed.eq_ignore_ascii_case("high") {
            RiskTier::High
        } else {
            RiskTier::Other(value.to_string())
        }
    }
}

impl From<String> for RiskTier {
    fn from(value: String) -> Self {
        RiskTier::from(value.as_str())
    }
}

impl From<RiskTier> for String {
    fn from(tier: RiskTier) -> Self {
        tier.to_string()
    }
}

impl FromStr for RiskTier {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(RiskTier::from(value))
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => f.write_str("Low"),
            RiskTier::Medium => f.write_str("Medium"),
            RiskTier::High => f.write_str("High"),
            RiskTier::Other(name) => f.write_str(name),
        }
    }
}

/// Whether a score may enter a vault of the given risk tier.
///
/// Unrecognized tiers are admitted regardless of score.
pub fn eligible_for_vault(score: i32, risk_tier: &str) -> bool {
    RiskTier::from(risk_tier).admits(score)
}
