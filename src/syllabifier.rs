use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ScansionError;
use crate::syllable::{Syllable, is_vowel};

// @module: Line segmentation into syllables

// @const: Whitespace run regex
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace into a single space
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").into_owned()
}

/// Split a sanitized line into syllables.
///
/// A new syllable starts at every vowel once the current one already holds
/// a vowel, so each syllable carries one nucleus and the consonants that
/// follow it. Consonants before the first vowel stay with the first
/// syllable and trailing consonants with the last. Concatenating the
/// syllable texts gives back the normalized line, except that a line of
/// only whitespace yields no syllables.
pub fn segment(line_text: &str) -> Result<Vec<Syllable>, ScansionError> {
    let normalized = normalize_whitespace(line_text);
    let mut syllables = Vec::new();
    let mut buffer = String::new();
    let mut has_vowel = false;

    for character in normalized.chars() {
        let vowel = is_vowel(character);
        if vowel && has_vowel {
            syllables.push(Syllable::new(std::mem::take(&mut buffer))?);
        }
        buffer.push(character);
        has_vowel |= vowel;
    }

    if !buffer.trim().is_empty() {
        syllables.push(Syllable::new(buffer)?);
    }

    Ok(syllables)
}
