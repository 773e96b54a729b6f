use serde::Serialize;
use std::fmt;

use crate::errors::ScansionError;

// @module: Syllable weight classification

/// Every vowel the syllabifier treats as a nucleus.
pub const VOWELS: &str = "aáeéiíoóöőuúüű";

/// Vowels that make their syllable long regardless of what follows.
pub const LONG_VOWELS: &str = "áéíóöőúüű";

/// Consonant clusters written with several letters but counted as one.
pub const CONSONANT_CLUSTERS: &[&str] = &["cs", "dz", "dzs", "gy", "ly", "ny", "sz", "ty", "zs"];

/// Letters after the nucleus (clusters counted once) above which a syllable is long.
const SHORT_SYLLABLE_MAX_LETTERS: usize = 2;

/// Determines if the given character is a vowel
pub fn is_vowel(character: char) -> bool {
    VOWELS.contains(character)
}

/// Phonological weight of a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    #[serde(rename = "L")]
    Long,
    #[serde(rename = "S")]
    Short,
}

impl Symbol {
    /// Character used for this symbol in pattern strings
    pub fn as_char(self) -> char {
        match self {
            Symbol::Long => 'L',
            Symbol::Short => 'S',
        }
    }

    /// Parse a pattern character, `None` for anything outside {L, S}
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Symbol::Long),
            'S' => Some(Symbol::Short),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Classify a non-empty syllable as long or short.
///
/// The first vowel is the nucleus. A long vowel makes the syllable long;
/// otherwise the letters from the nucleus onward are counted (whitespace
/// ignored, each occurrence of a multi-letter consonant cluster taking one
/// letter off) and more than two makes it long. Letters before the nucleus
/// never matter.
pub fn classify(text: &str) -> Result<Symbol, ScansionError> {
    let (index, vowel) = text
        .char_indices()
        .find(|(_, c)| is_vowel(*c))
        .ok_or_else(|| ScansionError::NoVowelInSyllable {
            syllable: text.to_string(),
        })?;

    if LONG_VOWELS.contains(vowel) {
        return Ok(Symbol::Long);
    }

    let tail = &text[index..];
    let letters = tail.chars().filter(|c| !c.is_whitespace()).count();
    let clusters: usize = CONSONANT_CLUSTERS
        .iter()
        .map(|cluster| tail.matches(*cluster).count())
        .sum();

    if letters.saturating_sub(clusters) > SHORT_SYLLABLE_MAX_LETTERS {
        Ok(Symbol::Long)
    } else {
        Ok(Symbol::Short)
    }
}

/// A syllable of a line with its precomputed weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    // @field: Source text, possibly with a single leading/trailing space
    text: String,

    // @field: Weight derived from text
    long: bool,
}

impl Syllable {
    /// Build and classify a syllable. Empty text is accepted and is never long.
    pub fn new(text: impl Into<String>) -> Result<Self, ScansionError> {
        let text = text.into();
        let long = if text.is_empty() {
            false
        } else {
            classify(&text)? == Symbol::Long
        };
        Ok(Self { text, long })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_long(&self) -> bool {
        self.long
    }

    /// The syllable's symbol; an empty syllable has none
    pub fn symbol(&self) -> Option<Symbol> {
        if self.text.is_empty() {
            None
        } else if self.long {
            Some(Symbol::Long)
        } else {
            Some(Symbol::Short)
        }
    }

    /// `{L}text| ` style rendering used in text reports
    pub fn human_repr(&self) -> String {
        match self.symbol() {
            Some(symbol) => format!("{{{}}}{}| ", symbol, self.text),
            None => String::new(),
        }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
