//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cgpa/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::rows::MAX_SUBJECTS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CgpaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_subject_count: Option<usize>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    pub title: Option<String>,
    pub footer: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SUBJECT_COUNT: usize = 1;
pub const DEFAULT_REPORT_TITLE: &str = "CGPA Calculator Report";
pub const DEFAULT_REPORT_FOOTER: &str = "Made with Love by Rohit | CGPA Calculator © 2025";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub subject_count: usize,
    pub output_dir: PathBuf,
    pub report_title: String,
    pub report_footer: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cgpa/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cgpa").join("config.toml"))
}

/// Load config from `~/.cgpa/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CgpaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CgpaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CgpaConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CgpaConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CgpaConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CgpaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# CGPA Calculator Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_subject_count = 1          # Or set CGPA_SUBJECTS env var
# output_dir = "~/Documents"         # Where exported reports go (CGPA_OUTPUT_DIR)

# [report]
# title = "CGPA Calculator Report"
# footer = "Made with Love by Rohit | CGPA Calculator © 2025"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub subjects: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CgpaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &CgpaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Subject count: CLI → env → config → default; zero falls back to the
    // default and anything past the table limit is capped
    let subject_count = cli
        .subjects
        .or_else(|| env("CGPA_SUBJECTS").and_then(|s| s.trim().parse().ok()))
        .or(config.general.default_subject_count)
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_SUBJECT_COUNT)
        .min(MAX_SUBJECTS);

    // Output dir: CLI → env → config → current directory
    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| env("CGPA_OUTPUT_DIR").map(PathBuf::from))
        .or_else(|| config.general.output_dir.as_deref().map(expand_home))
        .unwrap_or_else(|| PathBuf::from("."));

    ResolvedConfig {
        subject_count,
        output_dir,
        report_title: config
            .report
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORT_TITLE.to_string()),
        report_footer: config
            .report
            .footer
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORT_FOOTER.to_string()),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
