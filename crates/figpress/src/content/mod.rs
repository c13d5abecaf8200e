//! Built-in datasets and the per-report defaults that go with them

pub mod exam;
pub mod solutions;
pub mod survey;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::{ContentStore, Record, ReportError, Result};
use crate::document::{DocumentStyles, LayoutOptions};

/// The built-in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Exam,
    Survey,
    Solutions,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Exam, ReportKind::Survey, ReportKind::Solutions];

    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Exam => "exam",
            ReportKind::Survey => "survey",
            ReportKind::Solutions => "solutions",
        }
    }

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportKind::Exam => "MMPH-009_Diagram_Solutions_Complete.pdf",
            ReportKind::Survey => "Survey_Analysis_Report_Final_1_to_20.pdf",
            ReportKind::Solutions => "MMPC_018_Solutions.pdf",
        }
    }

    pub fn default_image_dir(&self) -> &'static str {
        match self {
            ReportKind::Exam => "temp_diagram_images",
            ReportKind::Survey => "charts_temp_final",
            ReportKind::Solutions => "temp_solution_images",
        }
    }

    /// Raster resolution of rendered images
    pub fn dpi(&self) -> f64 {
        match self {
            ReportKind::Exam | ReportKind::Solutions => 150.0,
            ReportKind::Survey => 300.0,
        }
    }

    /// Title written into the PDF metadata
    pub fn document_title(&self) -> &'static str {
        match self {
            ReportKind::Exam => "MMPH-009 Diagram Solutions",
            ReportKind::Survey => "Survey Analysis Report",
            ReportKind::Solutions => "MMPC-018 Entrepreneurship Solutions",
        }
    }

    /// Title paragraph opening the document, if the report has one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            ReportKind::Solutions => Some(solutions::TITLE),
            ReportKind::Exam | ReportKind::Survey => None,
        }
    }

    pub fn styles(&self) -> DocumentStyles {
        match self {
            ReportKind::Exam => DocumentStyles::exam(),
            ReportKind::Survey => DocumentStyles::survey(),
            ReportKind::Solutions => DocumentStyles::solutions(),
        }
    }

    /// Layout with its image box narrowed to the page frame
    pub fn layout(&self) -> LayoutOptions {
        let layout = match self {
            ReportKind::Exam => LayoutOptions::exam(),
            ReportKind::Survey => LayoutOptions::survey(),
            ReportKind::Solutions => LayoutOptions::solutions(),
        };
        layout.within_frame(self.styles().frame_width())
    }

    /// Built-in records, in declaration order
    pub fn records(&self) -> Vec<Record> {
        match self {
            ReportKind::Exam => exam::records(),
            ReportKind::Survey => survey::records(),
            ReportKind::Solutions => solutions::records(),
        }
    }

    /// Validated store of the built-in records
    pub fn store(&self) -> Result<ContentStore> {
        ContentStore::new(self.title().map(str::to_string), self.records())
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exam" => Ok(ReportKind::Exam),
            "survey" => Ok(ReportKind::Survey),
            "solutions" => Ok(ReportKind::Solutions),
            other => Err(ReportError::unsupported(format!("report:{}", other))),
        }
    }
}
