use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// Scoring config with defaults filled in
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
