use serde::{Deserialize, Serialize};
use std::fs;

use crate::errors::ConfigError;

pub const MAX_OPPONENTS: u8 = 5;

/// Drill table settings: how many hands compete and whether a board is dealt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Hands dealt besides the first one (1..=5, so 2 to 6 hands in total)
    pub opponents: u8,
    /// Deal no board, leaving a pre-flop judgement
    pub hide_board: bool,
    /// Fixed deck seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            opponents: 1,
            hide_board: false,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn hands(&self) -> usize {
        usize::from(self.opponents) + 1
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    opponents: Option<u8>,
    #[serde(default)]
    hide_board: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
}

/// Defaults, then the TOML file named by `POKERDRILL_CONFIG`, then
/// `POKERDRILL_*` environment overrides.
pub fn load() -> Result<TableConfig, ConfigError> {
    let mut cfg = TableConfig::default();

    if let Ok(path) = std::env::var("POKERDRILL_CONFIG") {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, toml::from_str(&s)?);
    }

    if let Some(seed) = env_value("POKERDRILL_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
    }
    if let Some(opponents) = env_value("POKERDRILL_OPPONENTS") {
        cfg.opponents = opponents
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid opponents: {opponents}")))?;
    }
    if let Some(hide) = env_value("POKERDRILL_HIDE_BOARD") {
        cfg.hide_board = parse_bool(&hide)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid hide_board: {hide}")))?;
    }

    validate(&cfg)?;
    Ok(cfg)
}

/// Parses a TOML document over the defaults.
pub fn from_toml_str(s: &str) -> Result<TableConfig, ConfigError> {
    let mut cfg = TableConfig::default();
    apply_file(&mut cfg, toml::from_str(s)?);
    validate(&cfg)?;
    Ok(cfg)
}

fn apply_file(cfg: &mut TableConfig, f: FileConfig) {
    if let Some(v) = f.opponents {
        cfg.opponents = v;
    }
    if let Some(v) = f.hide_board {
        cfg.hide_board = v;
    }
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub fn validate(cfg: &TableConfig) -> Result<(), ConfigError> {
    if !(1..=MAX_OPPONENTS).contains(&cfg.opponents) {
        return Err(ConfigError::Invalid(format!(
            "opponents must be between 1 and {MAX_OPPONENTS}, got {}",
            cfg.opponents
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
