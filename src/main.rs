use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use trustgraph::config::Config;
use trustgraph::mock;
use trustgraph::output;
use trustgraph::scoring::{self, Factor, FactorSet, RiskTier, ScoringConfig};
use trustgraph::session::{self, LearnMode, TourProgress, TourState, WalletState};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NOT_ELIGIBLE: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Args, Debug)]
struct FactorArgs {
    #[arg(long, allow_negative_numbers = true)]
    transaction_history: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    protocol_interaction: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    liquidity_provision: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    loan_repayment: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    governance_participation: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    time_in_ecosystem: Option<f64>,

    /// Fill factors not given on the command line with random values
    #[arg(long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

impl FactorArgs {
    fn given(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::TransactionHistory => self.transaction_history,
            Factor::ProtocolInteraction => self.protocol_interaction,
            Factor::LiquidityProvision => self.liquidity_provision,
            Factor::LoanRepayment => self.loan_repayment,
            Factor::GovernanceParticipation => self.governance_participation,
            Factor::TimeInEcosystem => self.time_in_ecosystem,
        }
    }

    /// Build the factor set, or return the flags that are missing
    fn resolve(&self) -> Result<FactorSet, Vec<String>> {
        let mut factors = if self.random {
            mock::random_factors(&mut mock::seeded_rng(self.seed))
        } else {
            FactorSet::uniform(0.0)
        };

        let mut missing = Vec::new();
        for factor in Factor::ALL {
            match self.given(factor) {
                Some(value) => factors.set(factor, value),
                None if !self.random => {
                    missing.push(format!("--{}", factor.key().replace('_', "-")))
                }
                None => {}
            }
        }

        if missing.is_empty() {
            Ok(factors)
        } else {
            Err(missing)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a factor set
    Score {
        #[command(flatten)]
        factors: FactorArgs,

        /// Risk tier for the eligibility line (Low, Medium, High)
        #[arg(long)]
        risk: Option<String>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Show grade, tier and color for a raw score
    Grade {
        #[arg(allow_negative_numbers = true)]
        score: i32,
    },
    /// Check vault eligibility (exit code 1 when not eligible)
    Eligible {
        #[arg(allow_negative_numbers = true)]
        score: i32,
        risk_tier: String,
    },
    /// Connect a mock wallet and score a random profile
    Demo {
        #[arg(long)]
        seed: Option<u64>,

        /// Months of score history to show
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=mock::MAX_HISTORY_MONTHS as i64))]
        months: u32,

        #[arg(long)]
        risk: Option<String>,
    },
    /// Walk the product tour
    Tour {
        /// Only report whether the tour was completed
        #[arg(long, conflicts_with = "reset")]
        status: bool,

        /// Clear the completion flag
        #[arg(long)]
        reset: bool,
    },
    /// Learn Mode: explain one factor, or all of them
    Learn {
        factor: Option<String>,
    },
    /// Write the default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "trustgraph")]
#[command(about = "Trust scoring for DeFi lending profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/trustgraph/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = trustgraph::telemetry::init(cli.verbose) {
        eprintln!("Logging setup failed: {:#}", e);
    }

    let use_colors = !cli.no_color && output::should_use_colors();

    // init writes the config, so it must not require a loadable one
    if let Commands::Init { force } = cli.command {
        std::process::exit(run_init(cli.config, force));
    }

    let config = match trustgraph::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring_config = config.effective_scoring();
    if let Err(errors) = scoring::validate_scoring(&scoring_config) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let code = match run(cli.command, &config, &scoring_config, use_colors) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_IO
        }
    };
    std::process::exit(code);
}

fn run(
    command: Commands,
    config: &Config,
    scoring_config: &ScoringConfig,
    use_colors: bool,
) -> Result<i32> {
    tracing::debug!(?config, "running command");

    match command {
        Commands::Score {
            factors,
            risk,
            format,
        } => {
            let factors = match factors.resolve() {
                Ok(f) => f,
                Err(missing) => {
                    eprintln!("Missing factors: {}", missing.join(", "));
                    eprintln!("Pass every factor or use --random to fill the rest.");
                    return Ok(EXIT_CONFIG);
                }
            };
            let risk_tier = resolve_risk(risk, scoring_config);
            let result = scoring::calculate_score(&factors, &scoring_config.effective_weights());

            match format {
                OutputFormat::Table => println!(
                    "{}",
                    output::format_score_report(&result, &risk_tier, use_colors)
                ),
                OutputFormat::Tsv => println!("{}", output::format_tsv(&result, &risk_tier)),
                OutputFormat::Json => println!("{}", output::format_json(&result, &risk_tier)?),
            }
            Ok(EXIT_SUCCESS)
        }
        Commands::Grade { score } => {
            let tier = scoring::tier_for(score);
            println!(
                "{}\t{}\t{}\t{}",
                score,
                scoring::grade_for(score),
                tier,
                scoring::color_class_for(score)
            );
            Ok(EXIT_SUCCESS)
        }
        Commands::Eligible { score, risk_tier } => {
            let risk_tier = RiskTier::from(risk_tier);
            if let RiskTier::Other(ref name) = risk_tier {
                tracing::warn!(tier = %name, "unrecognized risk tier, not gating");
            }
            println!(
                "{}",
                output::format_eligibility(score, &risk_tier, use_colors)
            );
            if risk_tier.admits(score) {
                Ok(EXIT_SUCCESS)
            } else {
                Ok(EXIT_NOT_ELIGIBLE)
            }
        }
        Commands::Demo { seed, months, risk } => {
            run_demo(seed, months, resolve_risk(risk, scoring_config), scoring_config, use_colors);
            Ok(EXIT_SUCCESS)
        }
        Commands::Tour { status, reset } => run_tour(status, reset, use_colors),
        Commands::Learn { factor } => run_learn(factor),
        Commands::Init { .. } => unreachable!("handled before config load"),
    }
}

fn resolve_risk(flag: Option<String>, scoring_config: &ScoringConfig) -> RiskTier {
    flag.map(RiskTier::from)
        .unwrap_or_else(|| scoring_config.effective_risk_tier())
}

fn run_demo(
    seed: Option<u64>,
    months: u32,
    risk_tier: RiskTier,
    scoring_config: &ScoringConfig,
    use_colors: bool,
) {
    let mut rng = mock::seeded_rng(seed);

    let mut wallet = WalletState::new();
    wallet.connect(mock::mock_wallet_address(&mut rng));
    println!("{}", output::format_wallet(&wallet, use_colors));
    println!();

    let factors = mock::random_factors(&mut rng);
    let result = scoring::calculate_score(&factors, &scoring_config.effective_weights());
    println!(
        "{}",
        output::format_score_report(&result, &risk_tier, use_colors)
    );

    if months > 0 {
        let today = chrono::Utc::now().date_naive();
        let history = mock::score_history(&mut rng, result.score, today, months);
        println!();
        println!("History:");
        println!("{}", output::format_history(&history));
    }

    wallet.disconnect();
}

fn run_tour(status: bool, reset: bool, use_colors: bool) -> Result<i32> {
    let path = session::get_tour_flag_path()?;
    let mut flag = session::load_tour_flag(&path)?;

    if status {
        match flag.completed_at {
            Some(at) if flag.completed => {
                println!("Tour completed on {}", at.format("%Y-%m-%d"))
            }
            _ => println!("Tour not completed"),
        }
        return Ok(EXIT_SUCCESS);
    }

    if reset {
        flag.clear();
        session::save_tour_flag(&path, &flag)?;
        println!("Tour flag cleared");
        return Ok(EXIT_SUCCESS);
    }

    let mut tour = TourState::default();
    let total = tour.len();
    tour.start();
    loop {
        if let (Some(index), Some(step)) = (tour.current_index(), tour.current_step()) {
            println!("{}", output::format_tour_step(step, index, total, use_colors));
            println!();
        }
        match tour.next() {
            TourProgress::Moved => continue,
            TourProgress::Completed => break,
            TourProgress::Inactive => break,
        }
    }

    flag.mark_completed();
    session::save_tour_flag(&path, &flag)?;
    println!("Tour completed.");
    Ok(EXIT_SUCCESS)
}

fn run_learn(factor: Option<String>) -> Result<i32> {
    let selected: Vec<Factor> = match factor {
        Some(name) => match name.parse::<Factor>() {
            Ok(f) => vec![f],
            Err(e) => {
                eprintln!("{}", e);
                return Ok(EXIT_CONFIG);
            }
        },
        None => Factor::ALL.to_vec(),
    };

    let mut learn = LearnMode::new();
    learn.enter();
    for factor in selected {
        if let Some(text) = learn.mark_seen(factor) {
            println!("{}", factor.label());
            println!("  {}", text);
            println!();
        }
    }
    let (seen, total) = learn.progress();
    println!("{}/{} lessons read", seen, total);
    learn.exit();
    Ok(EXIT_SUCCESS)
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path.map(Ok).unwrap_or_else(trustgraph::config::get_config_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    match trustgraph::config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Wrote default config to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write config: {:#}", e);
            EXIT_IO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_requires_all_factors() {
        let cli = Cli::parse_from(["trustgraph", "score", "--loan-repayment", "700"]);
        let Commands::Score { factors, .. } = cli.command else {
            panic!("expected score command");
        };
        let missing = factors.resolve().unwrap_err();
        assert_eq!(missing.len(), 5);
        assert!(missing.contains(&"--transaction-history".to_string()));
    }

    #[test]
    fn test_resolve_random_keeps_given_values() {
        let cli = Cli::parse_from([
            "trustgraph",
            "score",
            "--random",
            "--seed",
            "5",
            "--loan-repayment",
            "123",
        ]);
        let Commands::Score { factors, .. } = cli.command else {
            panic!("expected score command");
        };
        let resolved = factors.resolve().unwrap();
        assert_eq!(resolved.loan_repayment, 123.0);
        assert!((300.0..=850.0).contains(&resolved.transaction_history));
    }

    #[test]
    fn test_resolve_all_given() {
        let cli = Cli::parse_from([
            "trustgraph",
            "score",
            "--transaction-history",
            "720",
            "--protocol-interaction",
            "680",
            "--liquidity-provision",
            "600",
            "--loan-repayment",
            "780",
            "--governance-participation",
            "520",
            "--time-in-ecosystem",
            "650",
        ]);
        let Commands::Score { factors, .. } = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(scoring::compute_score(&factors.resolve().unwrap()), 679);
    }

    #[test]
    fn test_negative_factor_values_parse_and_clamp() {
        let cli = Cli::try_parse_from([
            "trustgraph",
            "score",
            "--transaction-history",
            "-400",
            "--protocol-interaction",
            "-400",
            "--liquidity-provision",
            "-400",
            "--loan-repayment",
            "-400",
            "--governance-participation",
            "-400",
            "--time-in-ecosystem",
            "-400",
        ])
        .unwrap();
        let Commands::Score { factors, .. } = cli.command else {
            panic!("expected score command");
        };
        let resolved = factors.resolve().unwrap();
        assert_eq!(resolved.loan_repayment, -400.0);
        assert_eq!(scoring::compute_score(&resolved), scoring::MIN_SCORE);
    }

    #[test]
    fn test_demo_months_bounded() {
        assert!(Cli::try_parse_from(["trustgraph", "demo", "--months", "1200"]).is_ok());
        assert!(Cli::try_parse_from(["trustgraph", "demo", "--months", "4000000000"]).is_err());
    }

    #[test]
    fn test_resolve_risk_prefers_flag() {
        let config = ScoringConfig::default();
        assert_eq!(resolve_risk(Some("high".to_string()), &config), RiskTier::High);
        assert_eq!(resolve_risk(None, &config), RiskTier::Medium);
    }
}
