// File: ./src/config.rs
// Handles parser configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::date::{default_deadline_time, default_schedule_time};
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

fn default_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_schedule_time_str() -> String {
    "09:00".to_string()
}

fn default_deadline_time_str() -> String {
    "23:59:59".to_string()
}

pub fn default_filler_prefixes() -> Vec<String> {
    [
        "please",
        "can you",
        "could you",
        "would you",
        "will you",
        "i need to",
        "i have to",
        "i want to",
        "i should",
        "i must",
        "need to",
        "have to",
        "remind me to",
        "don't forget to",
        "dont forget to",
        "remember to",
        "make sure to",
        "make sure you",
        "let's",
        "lets",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ParserConfig {
    /// Highest fuzzy distance (0.0 exact .. 1.0 unrelated) still accepted as a
    /// project match.
    #[serde(default = "default_threshold")]
    pub match_threshold: f64,
    /// Leading phrases dropped from titles, matched case-insensitively.
    #[serde(default = "default_filler_prefixes")]
    pub filler_prefixes: Vec<String>,
    /// Time of day for schedule phrases without a time. Format "HH:MM".
    #[serde(default = "default_schedule_time_str")]
    pub default_schedule_time: String,
    /// Time of day for deadline phrases without a time. Format "HH:MM[:SS]".
    #[serde(default = "default_deadline_time_str")]
    pub default_deadline_time: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            filler_prefixes: default_filler_prefixes(),
            default_schedule_time: default_schedule_time_str(),
            default_deadline_time: default_deadline_time_str(),
        }
    }
}

fn parse_clock(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M"))
        .ok()
}

impl ParserConfig {
    pub fn schedule_time(&self) -> NaiveTime {
        parse_clock(&self.default_schedule_time).unwrap_or_else(|| {
            log::warn!(
                "Invalid default_schedule_time '{}', using 09:00",
                self.default_schedule_time
            );
            default_schedule_time()
        })
    }

    pub fn deadline_time(&self) -> NaiveTime {
        parse_clock(&self.default_deadline_time).unwrap_or_else(|| {
            log::warn!(
                "Invalid default_deadline_time '{}', using 23:59:59",
                self.default_deadline_time
            );
            default_deadline_time()
        })
    }

    /// Threshold clamped into the valid 0.0..=1.0 range.
    pub fn threshold(&self) -> f64 {
        if self.match_threshold.is_nan() {
            return DEFAULT_MATCH_THRESHOLD;
        }
        self.match_threshold.clamp(0.0, 1.0)
    }

    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: ParserConfig = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`ParserConfig::load`], but a missing file yields the defaults.
    /// Unreadable or malformed files are still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Detects whether an error from [`ParserConfig::load`] means the file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })
    }
}
