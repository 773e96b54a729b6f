use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::foot_trie::Token;
use crate::syllable::Syllable;

// @module: Scansion reports and their output formats

/// Scansion outcome for one source line
#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    // @field: Zero-based line number in the source
    pub index: usize,

    // @field: Normalized line text
    pub text: String,

    // @field: L/S symbol string
    pub symbols: String,

    // @field: Classified syllables
    pub syllables: Vec<Syllable>,

    // @field: Recognized feet, absent when scansion failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feet: Option<Vec<Token>>,

    // @field: Failure message for this line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LineReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Scansion outcome for a whole text
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScansionReport {
    /// Where the text came from (file path or a caller-chosen label)
    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub lines: Vec<LineReport>,
}

impl ScansionReport {
    /// Number of lines that could not be scanned
    pub fn error_count(&self) -> usize {
        self.lines.iter().filter(|l| !l.is_ok()).count()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize scansion report")
    }

    /// Human-readable report, one block per line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            let _ = writeln!(out, "{}", title);
            let _ = writeln!(out);
        }
        for line in &self.lines {
            let rendered: String = line.syllables.iter().map(|s| s.human_repr()).collect();
            let _ = writeln!(out, "#{} {}", line.index, rendered.trim_end());
            match (&line.feet, &line.error) {
                (_, Some(error)) => {
                    let _ = writeln!(out, "    {} -> error: {}", line.symbols, error);
                }
                (Some(feet), None) => {
                    let names: Vec<&str> = feet.iter().map(|t| t.as_str()).collect();
                    let _ = writeln!(out, "    {} -> {}", line.symbols, names.join(" | "));
                }
                (None, None) => {
                    let _ = writeln!(out, "    {}", line.symbols);
                }
            }
        }
        out
    }
}
