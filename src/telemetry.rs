use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset or unusable
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "trustgraph=debug"
    } else {
        "warn"
    }
}

/// Pick the log filter. A set but malformed `RUST_LOG` falls back to the
/// default and hands back the rejected value so the caller can warn about it.
fn select_filter(rust_log: Option<&str>, verbose: bool) -> Result<(EnvFilter, Option<String>)> {
    if let Some(value) = rust_log.filter(|v| !v.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(value) {
            return Ok((filter, None));
        }
        let fallback = EnvFilter::try_new(default_filter(verbose))
            .with_context(|| format!("default log filter '{}'", default_filter(verbose)))?;
        return Ok((fallback, Some(value.to_string())));
    }

    let filter = EnvFilter::try_new(default_filter(verbose))
        .with_context(|| format!("default log filter '{}'", default_filter(verbose)))?;
    Ok((filter, None))
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(rust_log.as_deref(), verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    if let Some(value) = rejected {
        tracing::warn!(%value, "ignoring malformed RUST_LOG");
    }
    Ok(())
}
