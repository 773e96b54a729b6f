use serde::Serialize;
use std::fmt;

use crate::errors::ScansionError;
use crate::syllabifier;
use crate::syllable::Syllable;

// @module: Lines and poems built from segmented text

/// A line of verse split into classified syllables
#[derive(Debug, Clone, Serialize)]
pub struct Line {
    // @field: Position of the line in its source
    pub index: usize,

    // @field: Syllables in order
    pub syllables: Vec<Syllable>,
}

impl Line {
    /// Segment and classify a sanitized line.
    ///
    /// The index is supplied by the caller (usually the source line number).
    pub fn new(index: usize, text: &str) -> Result<Self, ScansionError> {
        Ok(Line {
            index,
            syllables: syllabifier::segment(text)?,
        })
    }

    /// Concatenated L/S symbols of the line's syllables
    pub fn symbols(&self) -> String {
        self.syllables
            .iter()
            .filter_map(|s| s.symbol())
            .map(|s| s.as_char())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// `{L}sze| {S}ret| ...` rendering
    pub fn human_repr(&self) -> String {
        self.syllables.iter().map(|s| s.human_repr()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for syllable in &self.syllables {
            write!(f, "{}", syllable)?;
        }
        Ok(())
    }
}

/// An ordered collection of lines with an optional title
#[derive(Debug, Clone, Default, Serialize)]
pub struct Poem {
    pub title: Option<String>,
    pub lines: Vec<Line>,
}

impl Poem {
    pub fn new(title: Option<String>) -> Self {
        Poem {
            title,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Line at a position in the collection (not a source index)
    pub fn get(&self, position: usize) -> Option<&Line> {
        self.lines.get(position)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a Poem {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.lines.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", rendered.join("\n"))
    }
}
