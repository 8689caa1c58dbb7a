//! Configuration discovery and effective settings resolution.
//!
//! Reads `setup-order.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `patterns`: `["**/*.vue"]`
//! - `output`: `human`
//! - `format.write|diff|check`: false
//! - `order`: built-in section and lifecycle order
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use crate::models::options::OrderOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TOML: &str = "setup-order.toml";
const CONFIG_YAML: [&str; 2] = ["setup-order.yaml", "setup-order.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Formatting-related configuration section under `[format]`.
pub struct FormatCfg {
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `setup-order.toml|yaml`.
pub struct SetupOrderConfig {
    pub patterns: Option<Vec<String>>,
    pub output: Option<String>,
    pub format: Option<FormatCfg>,
    /// Rule options; see [`OrderOptions`].
    pub order: Option<OrderOptions>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub patterns: Vec<String>,
    pub output: String,
    pub write: bool,
    pub diff: bool,
    pub check: bool,
    pub order: OrderOptions,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load the config file if present. A file that exists but does not parse is
/// an error, never silently replaced by defaults.
pub fn load_config(root: &Path) -> Result<Option<SetupOrderConfig>, ConfigError> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })
    };
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: toml_path.clone(),
            source,
        })?;
        return Ok(Some(cfg));
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: p.clone(),
                source,
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

pub fn default_patterns() -> Vec<String> {
    vec!["**/*.vue".to_string()]
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// The order options are validated here so a misconfigured run fails before
/// any file is read.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_patterns: &[String],
    cli_output: Option<&str>,
    cli_write: Option<bool>,
    cli_diff: Option<bool>,
    cli_check: Option<bool>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let patterns = if cli_patterns.is_empty() {
        cfg.patterns.unwrap_or_else(default_patterns)
    } else {
        cli_patterns.to_vec()
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let write = cli_write
        .or_else(|| cfg.format.as_ref().and_then(|f| f.write))
        .unwrap_or(false);
    let diff = cli_diff
        .or_else(|| cfg.format.as_ref().and_then(|f| f.diff))
        .unwrap_or(false);
    let check = cli_check
        .or_else(|| cfg.format.as_ref().and_then(|f| f.check))
        .unwrap_or(false);

    let order = cfg.order.unwrap_or_default();
    order.validate()?;

    Ok(Effective {
        repo_root,
        config_found,
        patterns,
        output,
        write,
        diff,
        check,
        order,
    })
}
