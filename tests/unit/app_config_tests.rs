/*!
 * Tests for application configuration and the feet table
 */

use scansion::app_config::{Config, FeetTable, FootEntry, LogLevel, OutputFormat, default_feet};
use scansion::ConfigError;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.feet_path.is_none());
    assert!(config.has_title);
    assert!(config.skip_empty_lines);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withEmptyFeetPath_shouldFail() {
    let mut config = Config::default();
    config.feet_path = Some("  ".to_string());
    assert!(config.validate().is_err());

    config.feet_path = Some("feet.json".to_string());
    assert!(config.validate().is_ok());
}

/// Test config round trip through JSON
#[test]
fn test_config_serialization_withTextFormat_shouldRoundTrip() {
    let mut config = Config::default();
    config.output_format = OutputFormat::Text;
    config.has_title = false;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"output_format\":\"text\""));

    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.output_format, OutputFormat::Text);
    assert!(!parsed.has_title);
}

/// Test output format parsing and extensions
#[test]
fn test_output_format_fromStr_shouldParseKnownFormats() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Text.extension(), "txt");
}

/// Test feet table validation
#[test]
fn test_feet_table_validate_withBadEntries_shouldReportThem() {
    let entry = |pattern: &str, name: &str| FeetTable {
        legs: vec![FootEntry { pattern: pattern.to_string(), name: name.to_string() }],
    };

    assert!(matches!(entry("", "void").validate(), Err(ConfigError::EmptyPattern { .. })));
    assert!(matches!(
        entry("LXS", "odd").validate(),
        Err(ConfigError::InvalidSymbol { symbol: 'X', .. })
    ));
    assert!(matches!(entry("LS", " ").validate(), Err(ConfigError::EmptyName { .. })));
    assert!(entry("LS", "trochee").validate().is_ok());
}

/// Test malformed feet table JSON
#[test]
fn test_feet_table_fromJson_withMalformedJson_shouldFail() {
    assert!(matches!(FeetTable::from_json("{\"legs\": 3}"), Err(ConfigError::Parse(_))));
}

/// Test the embedded feet table
#[test]
fn test_default_feet_withEmbeddedTable_shouldContainClassicFeet() {
    let table = default_feet();
    let names: Vec<&str> = table.legs.iter().map(|e| e.name.as_str()).collect();

    for expected in ["pyrrhic", "iamb", "trochee", "spondee", "dactyl", "anapest"] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
}
