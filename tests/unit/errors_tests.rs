/*!
 * Tests for error types and conversions
 */

use scansion::errors::{AppError, ConfigError, ScansionError};

#[test]
fn test_scansionError_noVowel_shouldDisplaySyllable() {
    let error = ScansionError::NoVowelInSyllable { syllable: "brr".to_string() };
    let display = format!("{}", error);
    assert!(display.contains("No vowel"));
    assert!(display.contains("brr"));
}

#[test]
fn test_scansionError_patternNotFound_shouldDisplayPatternAndPosition() {
    let error = ScansionError::PatternNotFound { symbols: "SL".to_string(), position: 1 };
    let display = format!("{}", error);
    assert!(display.contains("Pattern SL not found"));
    assert!(display.contains("position 1"));
}

#[test]
fn test_appError_fromScansionError_shouldWrapCorrectly() {
    let error: AppError = ScansionError::NoVowelInSyllable { syllable: "x".to_string() }.into();
    assert!(matches!(error, AppError::Scansion(_)));
    assert!(format!("{}", error).starts_with("Scansion error"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let error: AppError = ConfigError::EmptyName { pattern: "LS".to_string() }.into();
    assert!(matches!(error, AppError::Config(_)));
    assert!(format!("{}", error).contains("LS"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing poem");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
    assert!(format!("{}", error).contains("missing poem"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, AppError::Unknown(_)));
}
