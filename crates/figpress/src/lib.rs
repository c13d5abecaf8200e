//! Figpress - Render exam-answer diagrams and survey charts into PDF reports
//!
//! Records come from a [`ContentStore`]. Each record's recipe is drawn by a
//! diagram template or a chart routine, rasterised to PNG, and placed into a
//! flowable story that a [`document::DocumentWriter`] turns into a file.
//!
//! # Quick Start
//!
//! ```rust
//! use figpress::prelude::*;
//!
//! let store = ReportKind::Survey.store().unwrap();
//! assert_eq!(store.len(), 20);
//!
//! // Vector stage only: no fonts or files needed
//! let dispatcher = Dispatcher::new(Rasterizer::without_fonts(72.0));
//! let record = &store.records()[0];
//! let canvas = dispatcher
//!     .render_svg(&record.key, record.recipe.as_ref().unwrap())
//!     .unwrap();
//! assert!(canvas.to_svg().contains("Categories"));
//! ```
//!
//! # Full Runs
//!
//! ```rust,no_run
//! use figpress::prelude::*;
//!
//! let kind = ReportKind::Exam;
//! let writer = PdfWriter::new(kind.styles(), FontSource::System);
//! let mut runner = ReportRunner::new(RunConfig::for_report(kind, "."), kind.layout(), writer);
//! let summary = runner.run(&kind.store().unwrap()).unwrap();
//! println!("{} records, {} placeholders", summary.records, summary.failed);
//! ```

pub mod charts;
pub mod content;
pub mod core;
pub mod document;
pub mod pipeline;
pub mod templates;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::charts::{ChartKind, ChartSummary};
    pub use crate::content::ReportKind;
    pub use crate::core::{
        BodyBlock, ChartRecipe, ContentStore, DiagramLayout, DiagramRecipe, Rasterizer, Record,
        RecordKey, RenderRecipe, RenderedImage, ReportError, Result, ScratchDir, SvgCanvas,
    };
    pub use crate::document::{
        Assembler, DocumentStyles, DocumentWriter, FontSource, LayoutOptions, PdfWriter,
        RenderOutcome, Story,
    };
    pub use crate::pipeline::{render_single, ReportRunner, RunConfig, RunSummary};
    pub use crate::templates::Dispatcher;
}
