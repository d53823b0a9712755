use std::collections::BTreeSet;

use crate::scoring::Factor;

/// Learn Mode toggle plus which factor lessons have been read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearnMode {
    active: bool,
    seen: BTreeSet<Factor>,
}

impl LearnMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self) {
        self.active = true;
    }

    /// Leave Learn Mode, keeping progress
    pub fn exit(&mut self) {
        self.active = false;
    }

    /// Leave Learn Mode and forget progress
    pub fn reset(&mut self) {
        self.active = false;
        self.seen.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record a lesson as read and return its text. Outside Learn Mode
    /// nothing is recorded and `None` is returned.
    pub fn mark_seen(&mut self, factor: Factor) -> Option<&'static str> {
        if !self.active {
            return None;
        }
        self.seen.insert(factor);
        Some(lesson(factor))
    }

    pub fn has_seen(&self, factor: Factor) -> bool {
        self.seen.contains(&factor)
    }

    /// (lessons read, total lessons)
    pub fn progress(&self) -> (usize, usize) {
        (self.seen.len(), Factor::ALL.len())
    }
}

/// Plain-language explanation of a factor
pub fn lesson(factor: Factor) -> &'static str {
    match factor {
        Factor::TransactionHistory => {
            "How long and how consistently the wallet has transacted. Steady activity over time counts for more than a burst of trades. Carries 25% of the score."
        }
        Factor::ProtocolInteraction => {
            "Breadth of use across DeFi protocols: lending, swaps, staking. Wallets that touch many reputable protocols score higher. Carries 20%."
        }
        Factor::LiquidityProvision => {
            "Liquidity supplied to pools and how long it stayed. Long-lived positions signal commitment. Carries 15%."
        }
        Factor::LoanRepayment => {
            "Record of repaying loans on time and avoiding liquidations. Carries 20%, tied with protocol interaction."
        }
        Factor::GovernanceParticipation => {
            "Votes cast and proposals made in protocol governance. Carries 10%."
        }
        Factor::TimeInEcosystem => {
            "Age of the wallet's first on-chain activity. Older wallets are harder to fake. Carries 10%."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_exit() {
        let mut learn = LearnMode::new();
        assert!(!learn.is_active());
        learn.enter();
        assert!(learn.is_active());
        learn.exit();
        assert!(!learn.is_active());
    }

    #[test]
    fn test_mark_seen_only_when_active() {
        let mut learn = LearnMode::new();
        assert!(learn.mark_seen(Factor::LoanRepayment).is_none());
        assert!(!learn.has_seen(Factor::LoanRepayment));

        learn.enter();
        assert!(learn.mark_seen(Factor::LoanRepayment).is_some());
        assert!(learn.has_seen(Factor::LoanRepayment));
    }

    #[test]
    fn test_exit_keeps_progress_reset_clears_it() {
        let mut learn = LearnMode::new();
        learn.enter();
        learn.mark_seen(Factor::TimeInEcosystem);
        learn.mark_seen(Factor::TimeInEcosystem);
        learn.mark_seen(Factor::LiquidityProvision);
        learn.exit();
        assert_eq!(learn.progress(), (2, 6));

        learn.reset();
        assert_eq!(learn.progress(), (0, 6));
        assert!(!learn.is_active());
    }

    #[test]
    fn test_every_factor_has_lesson() {
        for factor in Factor::ALL {
            assert!(!lesson(factor).is_empty());
        }
    }
}
