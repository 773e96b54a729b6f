/*!
 * Integration tests for the controller's file and folder runs
 */

use anyhow::Result;

use scansion::app_config::{Config, OutputFormat};
use scansion::app_controller::Controller;
use scansion::file_utils::FileManager;
use crate::common;

fn config_with_test_feet() -> Config {
    let mut config = Config::default();
    config.feet_path = Some(common::test_resource_path("feet.json").to_string_lossy().to_string());
    config
}

/// Test the controller loading a feet table from disk
#[test]
fn test_with_config_withFeetPath_shouldLoadTable() -> Result<()> {
    let controller = Controller::with_config(config_with_test_feet())?;

    assert_eq!(controller.trie().len(), 4);
    assert!(controller.trie().contains("LSS"));

    Ok(())
}

/// Test the controller falling back to the embedded table
#[test]
fn test_with_config_withoutFeetPath_shouldUseDefaultTable() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    assert!(controller.trie().contains("SL"));
    assert_eq!(controller.trie().get("SSL"), Some("anapest"));

    Ok(())
}

/// Test an invalid feet table being rejected
#[test]
fn test_with_config_withInvalidFeetTable_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let feet = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "feet.json",
        r#"{"legs": [{"pattern": "LA", "name": "broken"}]}"#,
    )?;
    let mut config = Config::default();
    config.feet_path = Some(feet.to_string_lossy().to_string());

    assert!(Controller::with_config(config).is_err());

    Ok(())
}

/// Test scanning a single file to a report
#[tokio::test]
async fn test_run_withVerseFile_shouldWriteReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let poem = common::create_test_file(&dir, "poem.txt", "Próba\n\nRá ta ta\n")?;
    let controller = Controller::with_config(config_with_test_feet())?;

    controller.run(poem.clone(), dir.clone(), false).await?;

    let report_path = dir.join("poem.scansion.json");
    assert!(FileManager::file_exists(&report_path));
    let json: serde_json::Value = serde_json::from_str(&FileManager::read_to_string(&report_path)?)?;
    assert_eq!(json["title"], "Próba");
    assert_eq!(json["lines"][0]["feet"][0]["value"], "dactyl");

    Ok(())
}

/// Test that existing reports are kept unless forced
#[tokio::test]
async fn test_run_withExistingReport_shouldSkipUnlessForced() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let poem = common::create_test_file(&dir, "poem.txt", "Próba\n\nRá ta\n")?;
    let report_path = common::create_test_file(&dir, "poem.scansion.json", "old")?;
    let controller = Controller::with_config(config_with_test_feet())?;

    controller.run(poem.clone(), dir.clone(), false).await?;
    assert_eq!(FileManager::read_to_string(&report_path)?, "old");

    controller.run(poem, dir, true).await?;
    assert!(FileManager::read_to_string(&report_path)?.contains("trochee"));

    Ok(())
}

/// Test folder mode writing one report per verse file
#[tokio::test]
async fn test_run_folder_withSeveralFiles_shouldWriteAllReports() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let nested = dir.join("more");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&dir, "one.txt", "Egy\n\nrá ta\n")?;
    common::create_test_file(&nested, "two.txt", "Kettő\n\nrá rá\n")?;

    let mut config = config_with_test_feet();
    config.output_format = OutputFormat::Text;
    let controller = Controller::with_config(config)?;

    controller.run_folder(dir.clone(), false).await?;

    let one = FileManager::read_to_string(dir.join("one.scansion.txt"))?;
    let two = FileManager::read_to_string(nested.join("two.scansion.txt"))?;
    assert!(one.contains("LS -> trochee"));
    assert!(two.contains("LL -> spondee"));

    // A second run must not pick up its own text reports as input
    controller.run_folder(dir.clone(), true).await?;
    assert!(!FileManager::file_exists(dir.join("one.scansion.scansion.txt")));

    Ok(())
}

/// Test folder mode on a directory without verse files
#[tokio::test]
async fn test_run_folder_withNoVerseFiles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(Controller::with_config(Config::default())?
        .run_folder(temp_dir.path().to_path_buf(), false)
        .await
        .is_err());

    Ok(())
}
