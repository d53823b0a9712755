//! TrustGraph: trust scoring for DeFi lending profiles.
//!
//! Six weighted behavioral factors go in; a score in [300, 850], a letter
//! grade, a tier and a vault eligibility decision come out. Around that
//! core sit mock data for demos, the dashboard's session state and a small
//! CLI front-end.

pub mod config;
pub mod mock;
pub mod output;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use scoring::{
    color_class_for, compute_score, eligible_for_vault, grade_for, tier_for, FactorSet, Grade,
    RiskTier, Tier,
};
