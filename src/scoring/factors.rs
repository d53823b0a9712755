use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six behavioral factors feeding the trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    TransactionHistory,
    ProtocolInteraction,
    LiquidityProvision,
    LoanRepayment,
    GovernanceParticipation,
    TimeInEcosystem,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::TransactionHistory,
        Factor::ProtocolInteraction,
        Factor::LiquidityProvision,
        Factor::LoanRepayment,
        Factor::GovernanceParticipation,
        Factor::TimeInEcosystem,
    ];

    /// Human-readable label, e.g. "Loan Repayment"
    pub fn label(&self) -> &'static str {
        match self {
            Factor::TransactionHistory => "Transaction History",
            Factor::ProtocolInteraction => "Protocol Interaction",
            Factor::LiquidityProvision => "Liquidity Provision",
            Factor::LoanRepayment => "Loan Repayment",
            Factor::GovernanceParticipation => "Governance Participation",
            Factor::TimeInEcosystem => "Time in Ecosystem",
        }
    }

    /// Config/CLI key, e.g. "loan_repayment"
    pub fn key(&self) -> &'static str {
        match self {
            Factor::TransactionHistory => "transaction_history",
            Factor::ProtocolInteraction => "protocol_interaction",
            Factor::LiquidityProvision => "liquidity_provision",
            Factor::LoanRepayment => "loan_repayment",
            Factor::GovernanceParticipation => "governance_participation",
            Factor::TimeInEcosystem => "time_in_ecosystem",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Factor {
    type Err = String;

    /// Accepts snake_case keys, kebab-case and camelCase names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        Factor::ALL
            .iter()
            .copied()
            .find(|factor| factor.key().replace('_', "") == normalized)
            .ok_or_else(|| format!("unknown factor: {value}"))
    }
}

/// Raw factor values for one profile.
///
/// Values conventionally lie in [300, 850] but nothing enforces that; the
/// score is clamped on the way out instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorSet {
    pub transaction_history: f64,
    pub protocol_interaction: f64,
    pub liquidity_provision: f64,
    pub loan_repayment: f64,
    pub governance_participation: f64,
    pub time_in_ecosystem: f64,
}

impl FactorSet {
    /// Every factor set to the same value
    pub fn uniform(value: f64) -> Self {
        Self {
            transaction_history: value,
            protocol_interaction: value,
            liquidity_provision: value,
            loan_repayment: value,
            governance_participation: value,
            time_in_ecosystem: value,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TransactionHistory => self.transaction_history,
            Factor::ProtocolInteraction => self.protocol_interaction,
            Factor::LiquidityProvision => self.liquidity_provision,
            Factor::LoanRepayment => self.loan_repayment,
            Factor::GovernanceParticipation => self.governance_participation,
            Factor::TimeInEcosystem => self.time_in_ecosystem,
        }
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        match factor {
            Factor::TransactionHistory => self.transaction_history = value,
            Factor::ProtocolInteraction => self.protocol_interaction = value,
            Factor::LiquidityProvision => self.liquidity_provision = value,
            Factor::LoanRepayment => self.loan_repayment = value,
            Factor::GovernanceParticipation => self.governance_participation = value,
            Factor::TimeInEcosystem => self.time_in_ecosystem = value,
        }
    }

    /// Iterate (factor, value) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Per-factor weights. Must sum to 1.0; see `validate_weights`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub transaction_history: f64,
    pub protocol_interaction: f64,
    pub liquidity_provision: f64,
    pub loan_repayment: f64,
    pub governance_participation: f64,
    pub time_in_ecosystem: f64,
}

/// Fixed production weights. Sum is exactly 1.00.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    transaction_history: 0.25,
    protocol_interaction: 0.20,
    liquidity_provision: 0.15,
    loan_repayment: 0.20,
    governance_participation: 0.10,
    time_in_ecosystem: 0.10,
};

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::TransactionHistory => self.transaction_history,
            Factor::ProtocolInteraction => self.protocol_interaction,
            Factor::LiquidityProvision => self.liquidity_provision,
            Factor::LoanRepayment => self.loan_repayment,
            Factor::GovernanceParticipation => self.governance_participation,
            Factor::TimeInEcosystem => self.time_in_ecosystem,
        }
    }

    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_weight_values() {
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::TransactionHistory), 0.25);
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::ProtocolInteraction), 0.20);
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::LiquidityProvision), 0.15);
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::LoanRepayment), 0.20);
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::GovernanceParticipation), 0.10);
        assert_eq!(DEFAULT_WEIGHTS.get(Factor::TimeInEcosystem), 0.10);
    }

    #[test]
    fn test_factor_set_get_set() {
        let mut factors = FactorSet::uniform(500.0);
        factors.set(Factor::LoanRepayment, 780.0);
        assert_eq!(factors.get(Factor::LoanRepayment), 780.0);
        assert_eq!(factors.get(Factor::TimeInEcosystem), 500.0);
    }

    #[test]
    fn test_factor_set_iter_order() {
        let factors = FactorSet::uniform(1.0);
        let order: Vec<Factor> = factors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, Factor::ALL.to_vec());
    }

    #[test]
    fn test_factor_parse_variants() {
        assert_eq!("loan_repayment".parse::<Factor>(), Ok(Factor::LoanRepayment));
        assert_eq!("loan-repayment".parse::<Factor>(), Ok(Factor::LoanRepayment));
        assert_eq!("loanRepayment".parse::<Factor>(), Ok(Factor::LoanRepayment));
        assert_eq!(
            "Time in Ecosystem".parse::<Factor>(),
            Ok(Factor::TimeInEcosystem)
        );
        assert!("credit".parse::<Factor>().is_err());
    }

    #[test]
    fn test_factor_set_camel_case_json() {
        let json = r#"{
            "transactionHistory": 720,
            "protocolInteraction": 680,
            "liquidityProvision": 600,
            "loanRepayment": 780,
            "governanceParticipation": 520,
            "timeInEcosystem": 650
        }"#;
        let factors: FactorSet = serde_json::from_str(json).unwrap();
        assert_eq!(factors.transaction_history, 720.0);
        assert_eq!(factors.time_in_ecosystem, 650.0);
    }
}
