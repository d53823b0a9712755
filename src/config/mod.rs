mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::ScoringConfig;

/// Get the config directory path (~/.config/trustgraph/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("trustgraph"))
}

/// Get the default config file path (~/.config/trustgraph/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path()?, false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    parse_config_file(&config_path)
}

fn parse_config_file(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Write the default config to `path`. Refuses to overwrite an existing
/// file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config).context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
