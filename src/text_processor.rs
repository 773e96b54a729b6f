use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::file_utils::FileManager;

// @module: Verse file reading, sanitization and title handling

/// Removes all characters that are neither alphanumeric nor whitespace and lower-cases the rest
pub fn default_sanitizer(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Sanitize every line with the given function, or the default one
pub fn sanitize(lines: &[String], sanitizer: Option<&dyn Fn(&str) -> String>) -> Vec<String> {
    let sanitizer = sanitizer.unwrap_or(&default_sanitizer);
    lines.iter().map(|line| sanitizer(line)).collect()
}

/// Split off the title: the first non-empty line.
///
/// Returns the trimmed title and the position of the second non-empty line,
/// where the body starts. With fewer than two non-empty lines the body is
/// empty (`lines.len()` is returned).
pub fn drop_title(lines: &[String]) -> (Option<String>, usize) {
    let (title_index, body_start) = title_span(lines);
    let title = title_index.map(|index| lines[index].trim().to_string());
    (title, body_start)
}

/// Position of the title line and of the first body line
pub fn title_span(lines: &[String]) -> (Option<usize>, usize) {
    let mut title_index = None;
    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if title_index.is_some() {
            return (title_index, index);
        }
        title_index = Some(index);
    }
    (title_index, lines.len())
}

/// A sanitized line with its position in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    // @field: Zero-based line number in the source
    pub number: usize,

    // @field: Sanitized, trimmed text
    pub text: String,
}

/// Result of parsing a verse file
#[derive(Debug, Clone, Default)]
pub struct ParsedText {
    /// Title line if the text was parsed with a title
    pub title: Option<String>,

    /// Untouched source lines
    pub raw_lines: Vec<String>,

    /// Body lines after sanitization, title removed
    pub lines: Vec<SourceLine>,
}

/// Reads verse text and prepares it for segmentation
pub struct VerseParser;

impl VerseParser {
    /// Read and parse a verse file
    pub fn parse<P: AsRef<Path>>(path: P, has_title: bool) -> Result<ParsedText> {
        let content = FileManager::read_to_string(&path)
            .with_context(|| format!("Failed to read verse file: {:?}", path.as_ref()))?;
        Ok(Self::parse_str(&content, has_title))
    }

    /// Parse verse text already in memory
    pub fn parse_str(content: &str, has_title: bool) -> ParsedText {
        let raw_lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
        let sanitized = sanitize(&raw_lines, None);

        // The title line is picked on sanitized text but read from the raw text
        let (title, body_start) = if has_title {
            let (title_index, body_start) = title_span(&sanitized);
            let title = title_index.map(|index| raw_lines[index].trim().to_string());
            (title, body_start)
        } else {
            (None, 0)
        };

        let lines = sanitized
            .into_iter()
            .enumerate()
            .skip(body_start)
            .map(|(number, text)| SourceLine {
                number,
                text: text.trim().to_string(),
            })
            .collect::<Vec<_>>();

        debug!(
            "Parsed {} source lines, {} body lines, title: {:?}",
            raw_lines.len(),
            lines.len(),
            title
        );

        ParsedText {
            title,
            raw_lines,
            lines,
        }
    }
}
