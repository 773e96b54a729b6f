use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;
use crate::syllable::Symbol;

/// Application configuration module
/// This module handles the application configuration (conf.json) and the
/// feet table the pattern trie is built from.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to a feet table JSON file; the embedded table is used when unset
    #[serde(default)]
    pub feet_path: Option<String>,

    /// Whether input files start with a title line
    #[serde(default = "default_has_title")]
    pub has_title: bool,

    /// Report format written next to each input file
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Leave lines without any syllable out of the report
    #[serde(default = "default_skip_empty_lines")]
    pub skip_empty_lines: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Report output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Pretty-printed JSON
    #[default]
    Json,
    // @format: Human-readable text
    Text,
}

impl OutputFormat {
    // @returns: File extension for reports in this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_has_title() -> bool {
    true
}

fn default_skip_empty_lines() -> bool {
    true
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.feet_path {
            if path.trim().is_empty() {
                return Err(anyhow!("feet_path must not be empty when set"));
            }
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            feet_path: None,
            has_title: default_has_title(),
            output_format: OutputFormat::default(),
            skip_empty_lines: default_skip_empty_lines(),
            log_level: LogLevel::default(),
        }
    }
}

/// One foot definition: a pattern over {L, S} and its name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FootEntry {
    pub pattern: String,
    pub name: String,
}

/// The feet table file: `{"legs": [{"pattern": "LS", "name": "trochee"}, ...]}`
///
/// Entry order is preserved; a later entry with the same pattern replaces
/// the name of an earlier one when the trie is built.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FeetTable {
    pub legs: Vec<FootEntry>,
}

impl FeetTable {
    /// Parse a feet table from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every entry has a name and a non-empty L/S pattern
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.legs {
            if entry.pattern.is_empty() {
                return Err(ConfigError::EmptyPattern {
                    name: entry.name.clone(),
                });
            }
            if let Some(symbol) = entry.pattern.chars().find(|c| Symbol::from_char(*c).is_none()) {
                return Err(ConfigError::InvalidSymbol {
                    pattern: entry.pattern.clone(),
                    symbol,
                });
            }
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyName {
                    pattern: entry.pattern.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Load the feet table embedded at compile time.
///
/// Uses `include_str!` to embed `data/feet.json`. Panics if the embedded
/// JSON is malformed (should never happen in a released build).
pub fn default_feet() -> FeetTable {
    let json = include_str!("../data/feet.json");
    FeetTable::from_json(json).expect("embedded feet.json is malformed")
}
