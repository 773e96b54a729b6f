/*!
 * # Scansion - metrical analysis of verse
 *
 * A Rust library for splitting lines of verse into syllables, weighing each
 * syllable as long or short, and naming the metrical feet the resulting
 * L/S pattern is made of.
 *
 * ## Features
 *
 * - Syllable segmentation driven by vowel nuclei
 * - Long/short classification from vowel length and closing consonants
 *   (multi-letter consonant clusters count once)
 * - Configurable feet table (JSON) compiled into a prefix trie
 * - Foot recognition with shortest/longest matching and a residue-based
 *   tie break
 * - JSON and plain-text reports, single file or whole folders
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `syllable`: Syllable type and the long/short classifier
 * - `syllabifier`: Line segmentation into syllables
 * - `foot_trie`: Pattern trie and foot recognizer
 * - `verse`: Lines and poems
 * - `text_processor`: File reading, sanitization and title handling
 * - `report`: Report model and output formats
 * - `app_config`: Configuration and the feet table
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod foot_trie;
pub mod report;
pub mod syllabifier;
pub mod syllable;
pub mod text_processor;
pub mod verse;

// Re-export main types for easier usage
pub use app_config::{Config, FeetTable, FootEntry};
pub use errors::{AppError, ConfigError, ScansionError};
pub use foot_trie::{FootTrie, MatchStrategy, Token};
pub use report::{LineReport, ScansionReport};
pub use syllabifier::segment;
pub use syllable::{Symbol, Syllable, classify};
pub use verse::{Line, Poem};
