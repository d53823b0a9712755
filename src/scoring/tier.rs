use serde::Serialize;
use std::fmt;

/// Coarse qualitative band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Display color for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Green,
    Blue,
    Yellow,
    Red,
}

/// Inclusive lower bounds, highest first. Below the last entry is `Poor`.
///
/// Both `tier_for` and `color_class_for` read this table; the grade table in
/// `grade.rs` is deliberately separate.
const TIER_BANDS: [(i32, Tier); 3] = [
    (750, Tier::Excellent),
    (650, Tier::Good),
    (550, Tier::Fair),
];

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Poor => "Poor",
            Tier::Fair => "Fair",
            Tier::Good => "Good",
            Tier::Excellent => "Excellent",
        }
    }

    /// Color for this band. The only path from a score to a color goes
    /// through here.
    pub fn color_class(&self) -> ColorClass {
        match self {
            Tier::Excellent => ColorClass::Green,
            Tier::Good => ColorClass::Blue,
            Tier::Fair => ColorClass::Yellow,
            Tier::Poor => ColorClass::Red,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ColorClass {
    /// Style token used by the web dashboard
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorClass::Green => "text-green-500",
            ColorClass::Blue => "text-blue-500",
            ColorClass::Yellow => "text-yellow-500",
            ColorClass::Red => "text-red-500",
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

pub fn tier_for(score: i32) -> Tier {
    TIER_BANDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Poor)
}

/// Display color for a score, derived from the tier band.
pub fn color_class_for(score: i32) -> ColorClass {
    tier_for(score).color_class()
}
