//! Session state: wallet connection, product tour and Learn Mode.
//!
//! Each container is an owned value handed to whatever renders it. Only the
//! tour completion flag is persisted.

pub mod learn;
pub mod storage;
pub mod tour;
pub mod wallet;

pub use learn::{lesson, LearnMode};
pub use storage::{get_tour_flag_path, load_tour_flag, save_tour_flag, TourFlag};
pub use tour::{default_steps, TourProgress, TourState, TourStep};
pub use wallet::WalletState;
