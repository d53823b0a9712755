pub mod formatter;

pub use formatter::{
    format_breakdown, format_eligibility, format_history, format_json, format_score_report,
    format_tour_step, format_tsv, format_wallet, score_bar, should_use_colors,
};
