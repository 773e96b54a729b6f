use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, FeetTable, OutputFormat, default_feet};
use crate::file_utils::FileManager;
use crate::foot_trie::FootTrie;
use crate::report::{LineReport, ScansionReport};
use crate::syllabifier;
use crate::text_processor::{ParsedText, VerseParser};
use crate::verse::Line;

// @module: Application controller for verse scansion

// @const: Tag inserted between file stem and extension of reports
const REPORT_TAG: &str = "scansion";

// @const: Extension of verse files picked up in folder mode
const VERSE_EXTENSION: &str = "txt";

/// Main application controller for verse scansion
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Foot trie, built once and shared by every scan
    trie: FootTrie,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let table = match &config.feet_path {
            Some(path) => {
                let json = FileManager::read_to_string(path)?;
                FeetTable::from_json(&json)
                    .with_context(|| format!("Failed to parse feet table: {}", path))?
            }
            None => default_feet(),
        };
        Self::with_feet(config, &table)
    }

    /// Create a controller with an explicit feet table
    pub fn with_feet(config: Config, table: &FeetTable) -> Result<Self> {
        let trie = FootTrie::from_table(table).context("Invalid feet table")?;
        info!("Loaded {} feet", trie.len());
        Ok(Self { config, trie })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn trie(&self) -> &FootTrie {
        &self.trie
    }

    /// Scan verse text already in memory
    pub fn scan_text(&self, source: &str, content: &str) -> ScansionReport {
        let parsed = VerseParser::parse_str(content, self.config.has_title);
        self.scan_parsed(source, parsed)
    }

    fn scan_parsed(&self, source: &str, parsed: ParsedText) -> ScansionReport {
        let mut report = ScansionReport {
            source: source.to_string(),
            title: parsed.title,
            lines: Vec::with_capacity(parsed.lines.len()),
        };

        for source_line in parsed.lines {
            let text = syllabifier::normalize_whitespace(&source_line.text);
            let line = match Line::new(source_line.number, &text) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Skipping line {}: {}", source_line.number, e);
                    report.lines.push(LineReport {
                        index: source_line.number,
                        text,
                        symbols: String::new(),
                        syllables: Vec::new(),
                        feet: None,
                        error: Some(e.to_string()),
                    });
                    continue;
                }
            };

            let symbols = line.symbols();
            if symbols.is_empty() && self.config.skip_empty_lines {
                continue;
            }

            let (feet, error) = match self.trie.recognize(&symbols) {
                Ok(feet) => (Some(feet), None),
                Err(e) => {
                    warn!("Line {}: {}", line.index, e);
                    (None, Some(e.to_string()))
                }
            };
            debug!("Line {}: {} -> {:?}", line.index, symbols, feet);

            report.lines.push(LineReport {
                index: line.index,
                text,
                symbols,
                syllables: line.syllables,
                feet,
                error,
            });
        }

        report
    }

    /// Render a report in the configured format
    pub fn render(&self, report: &ScansionReport) -> Result<String> {
        match self.config.output_format {
            OutputFormat::Json => report.to_json(),
            OutputFormat::Text => Ok(report.to_text()),
        }
    }

    /// Output path of the report for a verse file
    pub fn report_path(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(
            input_file,
            output_dir,
            REPORT_TAG,
            self.config.output_format.extension(),
        )
    }

    /// Scan a verse file and write the report into the output directory
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        let output_path = self.report_path(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, report already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(());
        }

        let content = FileManager::read_to_string_async(&input_file).await?;
        let report = self.scan_text(&input_file.to_string_lossy(), &content);
        let rendered = self.render(&report)?;
        FileManager::write_to_file(&output_path, &rendered)?;

        let errors = report.error_count();
        if errors > 0 {
            warn!("{} of {} lines could not be scanned", errors, report.lines.len());
        }
        info!(
            "Scanned {} lines in {}: {:?}",
            report.lines.len(),
            Self::format_duration(start_time.elapsed()),
            output_path
        );

        Ok(())
    }

    /// Run the workflow in folder mode, processing all verse files in a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        // Reports written by earlier runs share the extension in text mode
        let verse_files: Vec<PathBuf> = FileManager::find_files(&input_dir, VERSE_EXTENSION)?
            .into_iter()
            .filter(|path| !Self::is_report_file(path))
            .collect();

        if verse_files.is_empty() {
            return Err(anyhow::anyhow!("No verse files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(verse_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("#>-"));
        folder_pb.set_message("Scanning files");

        let mut success_count = 0;
        let mut error_count = 0;

        for verse_file in verse_files.iter() {
            let file_name = verse_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Scanning: {}", file_name));

            let output_dir = match verse_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };

            match self.run(verse_file.clone(), output_dir, force_overwrite).await {
                Ok(_) => success_count += 1,
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed in {}: {} processed, {} errors",
            Self::format_duration(start_time.elapsed()),
            success_count,
            error_count
        );

        Ok(())
    }

    fn is_report_file(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(&format!(".{}", REPORT_TAG)))
            .unwrap_or(false)
    }

    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
