/// One stop on the product tour.
#[derive(Debug, Clone, PartialEq)]
pub struct TourStep {
    pub target: String, // Dashboard section the step points at
    pub title: String,
    pub body: String,
}

impl TourStep {
    fn new(target: &str, title: &str, body: &str) -> Self {
        Self {
            target: target.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Result of advancing the tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourProgress {
    Moved,
    Completed,
    Inactive,
}

/// Product tour position. Only one step is current while active.
#[derive(Debug, Clone, PartialEq)]
pub struct TourState {
    steps: Vec<TourStep>,
    current: usize,
    active: bool,
}

impl Default for TourState {
    fn default() -> Self {
        Self::new(default_steps())
    }
}

impl TourState {
    pub fn new(steps: Vec<TourStep>) -> Self {
        Self {
            steps,
            current: 0,
            active: false,
        }
    }

    /// Activate at the first step. An empty tour never activates.
    pub fn start(&mut self) {
        self.current = 0;
        self.active = !self.steps.is_empty();
    }

    /// Advance one step. Advancing past the last step ends the tour and
    /// reports `Completed`.
    pub fn next(&mut self) -> TourProgress {
        if !self.active {
            return TourProgress::Inactive;
        }
        if self.current + 1 >= self.steps.len() {
            self.active = false;
            self.current = 0;
            TourProgress::Completed
        } else {
            self.current += 1;
            TourProgress::Moved
        }
    }

    /// Step back, staying on the first step
    pub fn prev(&mut self) {
        if self.active {
            self.current = self.current.saturating_sub(1);
        }
    }

    /// Leave the tour without completing it
    pub fn end(&mut self) {
        self.active = false;
        self.current = 0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_index(&self) -> Option<usize> {
        self.active.then_some(self.current)
    }

    pub fn current_step(&self) -> Option<&TourStep> {
        if self.active {
            self.steps.get(self.current)
        } else {
            None
        }
    }

    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// The dashboard's onboarding tour
pub fn default_steps() -> Vec<TourStep> {
    vec![
        TourStep::new(
            "wallet",
            "Connect your wallet",
            "Start by connecting a wallet. Everything else on the dashboard keys off the connected address.",
        ),
        TourStep::new(
            "portfolio",
            "Portfolio overview",
            "Supplied, borrowed and net worth at a glance, along with your current health factor.",
        ),
        TourStep::new(
            "markets",
            "Markets",
            "Browse lending markets with their supply and borrow rates.",
        ),
        TourStep::new(
            "nft-loans",
            "NFT-collateral loans",
            "Borrow against NFTs you hold. Loan-to-value depends on the collection floor price.",
        ),
        TourStep::new(
            "rewards",
            "Rewards card",
            "Track cashback and points earned from protocol activity.",
        ),
        TourStep::new(
            "trustgraph",
            "TrustGraph score",
            "Your on-chain trust score, from 300 to 850. Higher scores unlock riskier vaults and better terms.",
        ),
        TourStep::new(
            "learn-mode",
            "Learn Mode",
            "Turn on Learn Mode for plain-language explanations of every metric.",
        ),
    ]
}
