//! Command-line interface for the figpress utility
//!
//! Builds the exam-solutions and survey-analysis PDFs, lists their records
//! and renders single diagrams for inspection.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::status::{progress_line, use_color};
use figpress::core::logging::init_logging;
use figpress::prelude::*;

/// Figpress - Render exam diagrams and survey charts into PDF reports
#[derive(Parser)]
#[command(name = "figpress")]
#[command(about = "Render exam-answer diagrams and survey charts into PDF reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Built-in reports
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportChoice {
    /// Exam solutions with one diagram per question
    Exam,
    /// Survey analysis with one chart and table per question
    Survey,
    /// Text-only exam solutions
    Solutions,
}

impl From<ReportChoice> for ReportKind {
    fn from(value: ReportChoice) -> Self {
        match value {
            ReportChoice::Exam => ReportKind::Exam,
            ReportChoice::Survey => ReportKind::Survey,
            ReportChoice::Solutions => ReportKind::Solutions,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a report PDF
    Build {
        #[arg(value_enum)]
        report: ReportChoice,

        /// Directory the PDF is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// PDF file name (defaults per report)
        #[arg(long)]
        file_name: Option<String>,

        /// Temporary image directory, relative to the output directory
        #[arg(long)]
        image_dir: Option<PathBuf>,

        /// JSON content file replacing the built-in records
        #[arg(long)]
        content: Option<PathBuf>,

        /// Directory holding `{name}-Regular.ttf` and friends
        #[arg(long)]
        font_dir: Option<PathBuf>,

        /// Font family file prefix inside --font-dir
        #[arg(long, default_value = "LiberationSans", requires = "font_dir")]
        font_name: String,

        /// Raster resolution of images (defaults per report)
        #[arg(long)]
        dpi: Option<f64>,
    },

    /// List a report's records and what each one draws
    List {
        #[arg(value_enum)]
        report: ReportChoice,

        /// JSON content file replacing the built-in records
        #[arg(long)]
        content: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Render one record's image (.svg for the vector stage, PNG otherwise)
    Render {
        #[arg(value_enum)]
        report: ReportChoice,

        /// Record group, e.g. "June 2023"
        #[arg(short, long)]
        group: String,

        /// Record sequence number within the group
        #[arg(short, long)]
        sequence: u32,

        /// Output image file
        #[arg(short, long)]
        output: PathBuf,

        /// JSON content file replacing the built-in records
        #[arg(long)]
        content: Option<PathBuf>,

        /// Raster resolution (defaults per report)
        #[arg(long)]
        dpi: Option<f64>,
    },
}

/// Main CLI application
#[derive(Default)]
pub struct FigpressApp;

impl FigpressApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        let level = cli
            .log_level
            .map(|level| level.as_str())
            .or(cli.verbose.then_some("debug"));
        if let Err(e) = init_logging(level, cli.log_format.map(|format| format.as_str())) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Figpress v{}", env!("CARGO_PKG_VERSION"));
        }
        debug!(verbose = cli.verbose, "CLI started");

        match cli.command {
            Commands::Build {
                report,
                output_dir,
                file_name,
                image_dir,
                content,
                font_dir,
                font_name,
                dpi,
            } => {
                let kind = ReportKind::from(report);
                let mut config = RunConfig::for_report(kind, output_dir);
                if let Some(file_name) = file_name {
                    config = config.with_file_name(file_name);
                }
                if let Some(image_dir) = image_dir {
                    config = config.with_image_dir(image_dir);
                }
                if let Some(dpi) = dpi {
                    config = config.with_dpi(dpi);
                }
                let fonts = match font_dir {
                    Some(dir) => FontSource::Directory {
                        dir,
                        name: font_name,
                    },
                    None => FontSource::System,
                };
                self.build_command(kind, config, fonts, content.as_deref(), cli.verbose)
            }
            Commands::List {
                report,
                content,
                json,
            } => self.list_command(report.into(), content.as_deref(), json),
            Commands::Render {
                report,
                group,
                sequence,
                output,
                content,
                dpi,
            } => {
                let kind = ReportKind::from(report);
                let key = RecordKey::new(group, sequence);
                let dpi = dpi.unwrap_or_else(|| kind.dpi());
                self.render_command(kind, &key, &output, content.as_deref(), dpi)
            }
        }
    }

    /// Handle the build command
    fn build_command(
        &self,
        kind: ReportKind,
        config: RunConfig,
        fonts: FontSource,
        content: Option<&Path>,
        verbose: bool,
    ) -> Result<()> {
        let store = self.load_store(kind, content)?;
        debug!(report = %kind, records = store.len(), "Content loaded");
        if verbose {
            eprintln!("Building {} report from {} records", kind, store.len());
        }

        let color = use_color();
        let writer = PdfWriter::new(kind.styles(), fonts);
        let mut runner = ReportRunner::new(config, kind.layout(), writer)
            .on_record(|record, outcome| println!("{}", progress_line(record, outcome, color)));
        let summary = runner
            .run(&store)
            .with_context(|| format!("Failed to build the {} report", kind))?;

        println!(
            "Wrote {} ({} images, {} placeholders, {} text only)",
            summary.output.display(),
            summary.rendered,
            summary.failed,
            summary.skipped
        );
        Ok(())
    }

    /// Handle the list command
    fn list_command(&self, kind: ReportKind, content: Option<&Path>, json: bool) -> Result<()> {
        let store = self.load_store(kind, content)?;

        if json {
            let records: Vec<serde_json::Value> = store
                .records()
                .iter()
                .map(|record| {
                    serde_json::json!({
                        "group": record.key.group,
                        "sequence": record.key.sequence,
                        "recipe": record.recipe.as_ref().map(RenderRecipe::kind),
                        "prompt": record.prompt,
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "report": kind,
                "records": records,
                "total": store.len(),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            for group in store.groups() {
                println!("{}", group);
                for record in store.records().iter().filter(|r| r.key.group == group) {
                    let drawn = record
                        .recipe
                        .as_ref()
                        .map(RenderRecipe::kind)
                        .unwrap_or_else(|| "text only".to_string());
                    println!("  Q{:<3} {}", record.key.sequence, drawn);
                }
            }
            println!();
            println!("Total: {} records", store.len());
        }
        Ok(())
    }

    /// Handle the render command
    fn render_command(
        &self,
        kind: ReportKind,
        key: &RecordKey,
        output: &Path,
        content: Option<&Path>,
        dpi: f64,
    ) -> Result<()> {
        let store = self.load_store(kind, content)?;
        let record = store
            .get(key)
            .ok_or_else(|| anyhow!("No record {} in the {} report", key, kind))?;

        let dispatcher = Dispatcher::new(Rasterizer::new(dpi));
        render_single(&dispatcher, record, output)
            .with_context(|| format!("Failed to render {}", key))?;
        println!("Wrote {}", output.display());
        Ok(())
    }

    /// Built-in records, or the records of a JSON content file
    pub fn load_store(&self, kind: ReportKind, content: Option<&Path>) -> Result<ContentStore> {
        match content {
            Some(path) => ContentStore::from_path(path)
                .with_context(|| format!("Failed to load content file '{}'", path.display())),
            None => kind
                .store()
                .with_context(|| format!("Built-in {} content is invalid", kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_build_defaults() {
        let cli = Cli::try_parse_from(["figpress", "build", "survey"]).unwrap();

        match cli.command {
            Commands::Build {
                report,
                output_dir,
                file_name,
                image_dir,
                content,
                font_dir,
                font_name,
                dpi,
            } => {
                assert_eq!(report, ReportChoice::Survey);
                assert_eq!(output_dir, PathBuf::from("."));
                assert!(file_name.is_none());
                assert!(image_dir.is_none());
                assert!(content.is_none());
                assert!(font_dir.is_none());
                assert_eq!(font_name, "LiberationSans");
                assert!(dpi.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_parsing_build_options() {
        let args = [
            "figpress",
            "build",
            "exam",
            "--output-dir",
            "out",
            "--file-name",
            "exam.pdf",
            "--font-dir",
            "/usr/share/fonts/liberation",
            "--font-name",
            "LiberationSerif",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Build {
                report,
                output_dir,
                file_name,
                font_dir,
                font_name,
                ..
            } => {
                assert_eq!(report, ReportChoice::Exam);
                assert_eq!(output_dir, PathBuf::from("out"));
                assert_eq!(file_name.as_deref(), Some("exam.pdf"));
                assert!(font_dir.is_some());
                assert_eq!(font_name, "LiberationSerif");
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_font_name_requires_font_dir() {
        let args = ["figpress", "build", "exam", "--font-name", "Arial"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_solutions_report_choice() {
        let cli = Cli::try_parse_from(["figpress", "list", "solutions"]).unwrap();
        match cli.command {
            Commands::List { report, .. } => {
                assert_eq!(ReportKind::from(report), ReportKind::Solutions);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_unknown_report_rejected() {
        assert!(Cli::try_parse_from(["figpress", "build", "poster"]).is_err());
    }

    #[test]
    fn test_cli_parsing_list_command() {
        let cli = Cli::try_parse_from(["figpress", "list", "exam", "--json"]).unwrap();

        match cli.command {
            Commands::List { report, json, .. } => {
                assert_eq!(report, ReportChoice::Exam);
                assert!(json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_render_command() {
        let args = [
            "figpress", "render", "exam", "-g", "June 2024", "-s", "4", "-o", "q4.svg",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Render {
                group,
                sequence,
                output,
                ..
            } => {
                assert_eq!(group, "June 2024");
                assert_eq!(sequence, 4);
                assert_eq!(output, PathBuf::from("q4.svg"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = [
            "figpress",
            "list",
            "survey",
            "--verbose",
            "--log-level",
            "warn",
            "--log-format",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn test_load_builtin_store() {
        let app = FigpressApp::new();
        let store = app.load_store(ReportKind::Exam, None).unwrap();
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn test_load_content_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        fs::write(
            &path,
            r#"{"title": "Mini", "records": [{"key": {"group": "A", "sequence": 1}, "prompt": "p"}]}"#,
        )
        .unwrap();

        let app = FigpressApp::new();
        let store = app.load_store(ReportKind::Survey, Some(&path)).unwrap();
        assert_eq!(store.title(), Some("Mini"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_missing_content_file() {
        let app = FigpressApp::new();
        let err = app
            .load_store(ReportKind::Survey, Some(Path::new("/nonexistent/content.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load content file"));
    }

    #[test]
    fn test_render_command_writes_svg() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("q3.svg");
        let app = FigpressApp::new();
        app.render_command(
            ReportKind::Exam,
            &RecordKey::new("June 2023", 3),
            &output,
            None,
            72.0,
        )
        .unwrap();
        assert!(fs::read_to_string(&output)
            .unwrap()
            .contains("Diagram for Q3 (June 2023)"));
    }

    #[test]
    fn test_render_command_unknown_record() {
        let dir = tempdir().unwrap();
        let app = FigpressApp::new();
        let err = app
            .render_command(
                ReportKind::Exam,
                &RecordKey::new("June 2025", 1),
                &dir.path().join("x.png"),
                None,
                72.0,
            )
            .unwrap_err();
        assert!(err.to_string().contains("No record Q1 (June 2025)"));
    }
}
