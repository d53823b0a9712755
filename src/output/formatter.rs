use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::mock::HistoryPoint;
use crate::scoring::{ColorClass, RiskTier, ScoreResult, MAX_SCORE, MIN_SCORE};
use crate::session::{TourStep, WalletState};

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Apply the terminal color for a color class
fn paint(text: &str, color: ColorClass, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match color {
        ColorClass::Green => text.green().to_string(),
        ColorClass::Blue => text.blue().to_string(),
        ColorClass::Yellow => text.yellow().to_string(),
        ColorClass::Red => text.red().to_string(),
    }
}

/// Fixed-width bar showing where a score sits between 300 and 850.
/// Scores outside the range pin to an empty or full bar.
pub fn score_bar(score: i32, width: usize) -> String {
    let span = (MAX_SCORE - MIN_SCORE) as f64;
    let position = (score.clamp(MIN_SCORE, MAX_SCORE) - MIN_SCORE) as f64 / span;
    let filled = (position * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// One line: "eligible for Medium vaults (min 650)" or the ungated variant
pub fn format_eligibility(score: i32, risk_tier: &RiskTier, use_colors: bool) -> String {
    let eligible = risk_tier.admits(score);
    let verdict = if eligible { "eligible" } else { "not eligible" };
    let verdict = if use_colors {
        if eligible {
            verdict.green().bold().to_string()
        } else {
            verdict.red().bold().to_string()
        }
    } else {
        verdict.to_string()
    };

    match risk_tier.min_score() {
        Some(min) => format!("{} for {} vaults (min {})", verdict, risk_tier, min),
        None => format!(
            "{} for {} vaults (unrecognized tier, not gated)",
            verdict, risk_tier
        ),
    }
}

/// Multi-line score report with per-factor breakdown
pub fn format_score_report(result: &ScoreResult, risk_tier: &RiskTier, use_colors: bool) -> String {
    let score_str = result.score.to_string();
    let headline = if use_colors {
        paint(&score_str, result.color, true).bold().to_string()
    } else {
        score_str
    };

    let mut lines = vec![
        format!(
            "TrustGraph score: {} {}",
            headline,
            score_bar(result.score, BAR_WIDTH)
        ),
        format!(
            "  Grade: {}  Tier: {}",
            result.grade,
            paint(result.tier.as_str(), result.color, use_colors)
        ),
        format!(
            "  Vault: {}",
            format_eligibility(result.score, risk_tier, use_colors)
        ),
    ];

    if result.clamped() {
        lines.push(format!(
            "  (weighted sum {:.1} clamped to {}-{})",
            result.weighted_sum, MIN_SCORE, MAX_SCORE
        ));
    }

    lines.push(String::new());
    lines.push(format_breakdown(result, use_colors));
    lines.join("\n")
}

/// Factor table: label, raw value, weight, weighted contribution
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let label_width = result
        .breakdown
        .iter()
        .map(|c| c.factor.label().len())
        .max()
        .unwrap_or(0);

    let mut rows: Vec<String> = result
        .breakdown
        .iter()
        .map(|c| {
            let label = format!("{:<width$}", c.factor.label(), width = label_width);
            let label = if use_colors {
                label.dimmed().to_string()
            } else {
                label
            };
            format!(
                "  {}  {:>7.1} x {:>4.0}%  = {:>6.1}",
                label,
                c.value,
                c.weight * 100.0,
                c.weighted
            )
        })
        .collect();

    rows.push(format!(
        "  {:<width$}  {:>26.1}",
        "Weighted sum",
        result.weighted_sum,
        width = label_width
    ));
    rows.join("\n")
}

/// Tab-separated score line for scripting
/// Columns: score, grade, tier, eligible (no headers, no colors)
pub fn format_tsv(result: &ScoreResult, risk_tier: &RiskTier) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        result.score,
        result.grade,
        result.tier,
        risk_tier.admits(result.score)
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    risk_tier: &'a RiskTier,
    eligible: bool,
}

/// Pretty JSON report including the eligibility decision
pub fn format_json(result: &ScoreResult, risk_tier: &RiskTier) -> Result<String> {
    let report = JsonReport {
        result,
        risk_tier,
        eligible: risk_tier.admits(result.score),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize score report")
}

/// One line per month: "Oct 2026  679 [#######.....]"
pub fn format_history(points: &[HistoryPoint]) -> String {
    if points.is_empty() {
        return "No score history.".to_string();
    }

    points
        .iter()
        .map(|p| {
            format!(
                "  {}  {:>3} {}",
                p.month.format("%b %Y"),
                p.score,
                score_bar(p.score, BAR_WIDTH)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_wallet(wallet: &WalletState, use_colors: bool) -> String {
    match wallet.short_address() {
        Some(short) => {
            let short = if use_colors {
                short.cyan().to_string()
            } else {
                short
            };
            match wallet.connected_at() {
                Some(at) => format!(
                    "Wallet {} connected at {}",
                    short,
                    at.format("%Y-%m-%d %H:%M UTC")
                ),
                None => format!("Wallet {} connected", short),
            }
        }
        None => "No wallet connected".to_string(),
    }
}

/// "Step 2/7: Portfolio overview" plus the body on the next line
pub fn format_tour_step(step: &TourStep, index: usize, total: usize, use_colors: bool) -> String {
    let heading = format!("Step {}/{}: {}", index + 1, total, step.title);
    let heading = if use_colors {
        heading.bold().to_string()
    } else {
        heading
    };
    format!("{}\n  {}", heading, step.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_score, FactorSet, DEFAULT_WEIGHTS};
    use chrono::NaiveDate;

    fn sample_result() -> ScoreResult {
        calculate_score(
            &FactorSet {
                transaction_history: 720.0,
                protocol_interaction: 680.0,
                liquidity_provision: 600.0,
                loan_repayment: 780.0,
                governance_participation: 520.0,
                time_in_ecosystem: 650.0,
            },
            &DEFAULT_WEIGHTS,
        )
    }

    #[test]
    fn test_score_bar_ends() {
        assert_eq!(score_bar(300, 10), "[..........]");
        assert_eq!(score_bar(850, 10), "[##########]");
        assert_eq!(score_bar(0, 4), "[....]");
        assert_eq!(score_bar(2000, 4), "[####]");
    }

    #[test]
    fn test_score_bar_midpoint() {
        // 575 is exactly halfway
        assert_eq!(score_bar(575, 10), "[#####.....]");
    }

    #[test]
    fn test_format_eligibility() {
        assert_eq!(
            format_eligibility(679, &RiskTier::Medium, false),
            "eligible for Medium vaults (min 650)"
        );
        assert_eq!(
            format_eligibility(679, &RiskTier::High, false),
            "not eligible for High vaults (min 700)"
        );
        assert!(format_eligibility(0, &RiskTier::from("Exotic"), false)
            .starts_with("eligible for Exotic vaults"));
    }

    #[test]
    fn test_format_score_report_plain() {
        let report = format_score_report(&sample_result(), &RiskTier::Medium, false);
        assert!(report.contains("TrustGraph score: 679"));
        assert!(report.contains("Grade: B+"));
        assert!(report.contains("Tier: Good"));
        assert!(report.contains("Loan Repayment"));
        assert!(!report.contains("clamped"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn test_format_score_report_clamped_note() {
        let result = calculate_score(&FactorSet::uniform(1000.0), &DEFAULT_WEIGHTS);
        let report = format_score_report(&result, &RiskTier::Low, false);
        assert!(report.contains("TrustGraph score: 850"));
        assert!(report.contains("clamped to 300-850"));
    }

    #[test]
    fn test_format_breakdown_rows() {
        let breakdown = format_breakdown(&sample_result(), false);
        let lines: Vec<&str> = breakdown.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("Transaction History"));
        assert!(lines[0].contains("25%"));
        assert!(lines[0].contains("180.0"));
        assert!(lines[6].contains("679.0"));
    }

    #[test]
    fn test_format_tsv() {
        assert_eq!(
            format_tsv(&sample_result(), &RiskTier::High),
            "679\tB+\tGood\tfalse"
        );
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_result(), &RiskTier::Medium).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 679);
        assert_eq!(value["grade"], "B+");
        assert_eq!(value["tier"], "Good");
        assert_eq!(value["color"], "blue");
        assert_eq!(value["risk_tier"], "Medium");
        assert_eq!(value["eligible"], true);
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_format_history() {
        let points = vec![
            HistoryPoint {
                month: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                score: 660,
            },
            HistoryPoint {
                month: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                score: 679,
            },
        ];
        let out = format_history(&points);
        assert!(out.contains("Sep 2026  660"));
        assert!(out.contains("Oct 2026  679"));
        assert_eq!(format_history(&[]), "No score history.");
    }

    #[test]
    fn test_format_wallet() {
        let mut wallet = WalletState::new();
        assert_eq!(format_wallet(&wallet, false), "No wallet connected");
        wallet.connect("0x1234567890abcdef1234567890abcdef12345678".to_string());
        assert!(format_wallet(&wallet, false).starts_with("Wallet 0x1234...5678 connected at"));
    }

    #[test]
    fn test_format_tour_step() {
        let step = TourStep {
            target: "markets".to_string(),
            title: "Markets".to_string(),
            body: "Browse lending markets.".to_string(),
        };
        assert_eq!(
            format_tour_step(&step, 2, 7, false),
            "Step 3/7: Markets\n  Browse lending markets."
        );
    }
}
