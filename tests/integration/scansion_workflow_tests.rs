/*!
 * Integration tests for the scansion workflow: parse, segment, classify, recognize
 */

use anyhow::Result;

use scansion::app_config::{Config, FeetTable, OutputFormat};
use scansion::app_controller::Controller;
use scansion::text_processor::VerseParser;
use scansion::{Line, Poem, Token};
use crate::common;

fn test_controller(config: Config) -> Result<Controller> {
    common::init_logging();
    let json = std::fs::read_to_string(common::test_resource_path("feet.json"))?;
    let table = FeetTable::from_json(&json)?;
    Controller::with_feet(config, &table)
}

/// Test the pipeline by hand, stage by stage
#[test]
fn test_pipeline_withResourcePoem_shouldRecognizeFeet() -> Result<()> {
    let trie = common::test_trie();
    let parsed = VerseParser::parse(common::test_resource_path("poem.txt"), true)?;

    let mut poem = Poem::new(parsed.title.clone());
    for source_line in parsed.lines.iter().take(2) {
        poem.push(Line::new(source_line.number, &source_line.text)?);
    }

    let feet: Vec<Vec<String>> = poem
        .iter()
        .map(|line| trie.recognize(&line.symbols()).map(|t| common::names(&t)))
        .collect::<Result<_, _>>()?;

    assert_eq!(feet, vec![vec!["dactyl".to_string()], vec!["trochee".to_string()]]);
    assert_eq!(poem.get(1).map(|l| l.index), Some(3));

    Ok(())
}

/// Test that a bad line is reported without stopping the others
#[test]
fn test_scan_text_withUnscannableLine_shouldRecordErrorAndContinue() -> Result<()> {
    let controller = test_controller(Config::default())?;
    let content = std::fs::read_to_string(common::test_resource_path("poem.txt"))?;

    let report = controller.scan_text("poem.txt", &content);

    assert_eq!(report.title.as_deref(), Some("Próba"));
    let indexes: Vec<usize> = report.lines.iter().map(|l| l.index).collect();
    assert_eq!(indexes, vec![2, 3, 5]);
    assert_eq!(report.error_count(), 1);

    assert_eq!(report.lines[0].symbols, "LSS");
    assert_eq!(report.lines[0].feet, Some(vec![Token::Foot("dactyl".to_string())]));
    assert_eq!(report.lines[1].text, "rá ta");
    assert!(report.lines[2].error.as_deref().unwrap_or_default().contains("No vowel"));

    Ok(())
}

/// Test keeping empty lines in the report
#[test]
fn test_scan_text_withEmptyLinesKept_shouldListThem() -> Result<()> {
    let mut config = Config::default();
    config.skip_empty_lines = false;
    config.has_title = false;
    let controller = test_controller(config)?;

    let report = controller.scan_text("memory", "rá ta\n\nrá rá rá\n");

    assert_eq!(report.lines.len(), 3);
    assert_eq!(report.lines[1].symbols, "");
    assert_eq!(report.lines[1].feet, Some(Vec::new()));
    assert_eq!(
        report.lines[2].feet,
        Some(vec![Token::Foot("spondee".to_string()), Token::Residue("L".to_string())])
    );

    Ok(())
}

/// Test a recognition failure surfacing in the report
#[test]
fn test_scan_text_withUnknownPattern_shouldRecordPatternError() -> Result<()> {
    let mut config = Config::default();
    config.has_title = false;
    let controller = test_controller(config)?;

    // "ta rá" is SL, which the four-foot table cannot start
    let report = controller.scan_text("memory", "ta rá");

    assert_eq!(report.lines.len(), 1);
    assert_eq!(report.lines[0].symbols, "SL");
    assert!(report.lines[0].feet.is_none());
    assert!(report.lines[0].error.as_deref().unwrap_or_default().contains("Pattern SL not found"));

    Ok(())
}

/// Test both report renderings
#[test]
fn test_render_withEachFormat_shouldProduceOutput() -> Result<()> {
    let mut config = Config::default();
    config.has_title = false;
    let json_controller = test_controller(config.clone())?;
    config.output_format = OutputFormat::Text;
    let text_controller = test_controller(config)?;

    let report = json_controller.scan_text("memory", "rá ta ta");

    let json: serde_json::Value = serde_json::from_str(&json_controller.render(&report)?)?;
    assert_eq!(json["source"], "memory");
    assert_eq!(json["lines"][0]["symbols"], "LSS");
    assert_eq!(json["lines"][0]["feet"][0]["kind"], "foot");

    let text = text_controller.render(&report)?;
    assert!(text.contains("LSS -> dactyl"));

    Ok(())
}
