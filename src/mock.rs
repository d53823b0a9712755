//! Mock data for demos: random factor sets, wallet addresses and score history.

use chrono::{Datelike, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scoring::{FactorSet, MAX_SCORE, MIN_SCORE};

/// Largest month-over-month move in a generated history
const HISTORY_STEP: i32 = 25;

/// Longest history `score_history` will produce (100 years)
pub const MAX_HISTORY_MONTHS: u32 = 1200;

/// Deterministic RNG when a seed is given, OS-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Random whole-number factors, each in [300, 850]
pub fn random_factors<R: Rng + ?Sized>(rng: &mut R) -> FactorSet {
    let mut draw = || rng.random_range(MIN_SCORE..=MAX_SCORE) as f64;
    FactorSet {
        transaction_history: draw(),
        protocol_interaction: draw(),
        liquidity_provision: draw(),
        loan_repayment: draw(),
        governance_participation: draw(),
        time_in_ecosystem: draw(),
    }
}

/// `0x` followed by 40 lowercase hex digits
pub fn mock_wallet_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 20] = rng.random();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub month: NaiveDate, // First day of the month
    pub score: i32,
}

/// Monthly score history ending at `current` in the month of `end`.
///
/// Returns `months` points, oldest first, capped at `MAX_HISTORY_MONTHS`.
/// Earlier points are a bounded random walk back from the current score and
/// stay inside [300, 850].
pub fn score_history<R: Rng + ?Sized>(
    rng: &mut R,
    current: i32,
    end: NaiveDate,
    months: u32,
) -> Vec<HistoryPoint> {
    if months == 0 {
        return Vec::new();
    }

    let end_month = end.with_day0(0).unwrap_or(end);
    let mut score = current.clamp(MIN_SCORE, MAX_SCORE);
    let months = months.min(MAX_HISTORY_MONTHS);
    let mut points = Vec::with_capacity(months as usize);

    for back in 0..months {
        let Some(month) = end_month.checked_sub_months(Months::new(back)) else {
            break;
        };
        points.push(HistoryPoint { month, score });
        let step = rng.random_range(-HISTORY_STEP..=HISTORY_STEP);
        score = (score + step).clamp(MIN_SCORE, MAX_SCORE);
    }

    points.reverse();
    points
}
