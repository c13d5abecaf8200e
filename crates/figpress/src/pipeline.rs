//! Run a content store end to end
//!
//! ```text
//! ScratchDir::prepare → (per record) Dispatcher::render → Assembler → DocumentWriter
//! ```
//!
//! Record-scoped failures become placeholders and the run continues. Setup
//! and assembly failures abort the run; the scratch directory is removed on
//! every path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, span, warn, Level};

use crate::content::ReportKind;
use crate::core::{ContentStore, Rasterizer, Record, ReportError, Result, ScratchDir};
use crate::document::{Assembler, DocumentWriter, LayoutOptions, RenderOutcome};
use crate::templates::Dispatcher;

/// Where a run writes and how finely it rasterises
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
    /// Scratch directory for images, relative to `output_dir` unless absolute
    pub image_dir: PathBuf,
    pub dpi: f64,
    /// Used for the PDF metadata when the store has no title
    pub document_title: String,
}

impl RunConfig {
    /// Defaults of a built-in report, writing into `output_dir`
    pub fn for_report(kind: ReportKind, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: kind.default_file_name().to_string(),
            image_dir: PathBuf::from(kind.default_image_dir()),
            dpi: kind.dpi(),
            document_title: kind.document_title().to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_image_dir(mut self, image_dir: impl Into<PathBuf>) -> Self {
        self.image_dir = image_dir.into();
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// What a finished run produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub output: PathBuf,
    pub records: usize,
    pub rendered: usize,
    pub failed: usize,
    pub skipped: usize,
    pub pages: usize,
}

type Progress<'a> = Box<dyn FnMut(&Record, &RenderOutcome) + 'a>;

/// Drives one report from store to file
pub struct ReportRunner<'a> {
    config: RunConfig,
    layout: LayoutOptions,
    dispatcher: Dispatcher,
    writer: Box<dyn DocumentWriter + 'a>,
    progress: Option<Progress<'a>>,
}

impl<'a> ReportRunner<'a> {
    /// Runner with a rasterizer that uses the system fonts
    pub fn new(
        config: RunConfig,
        layout: LayoutOptions,
        writer: impl DocumentWriter + 'a,
    ) -> Self {
        let dispatcher = Dispatcher::new(Rasterizer::new(config.dpi));
        Self::with_dispatcher(config, layout, dispatcher, writer)
    }

    pub fn with_dispatcher(
        config: RunConfig,
        layout: LayoutOptions,
        dispatcher: Dispatcher,
        writer: impl DocumentWriter + 'a,
    ) -> Self {
        Self {
            config,
            layout,
            dispatcher,
            writer: Box::new(writer),
            progress: None,
        }
    }

    /// Call `progress` after each record has been rendered
    pub fn on_record(mut self, progress: impl FnMut(&Record, &RenderOutcome) + 'a) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run(&mut self, store: &ContentStore) -> Result<RunSummary> {
        let output = self.config.output_path();
        let run_span = span!(
            Level::INFO,
            "run_report",
            output = %output.display(),
            records = store.len()
        );
        let _enter = run_span.enter();

        let scratch = ScratchDir::prepare(&self.config.output_dir, &self.config.image_dir)
            .map_err(|e| {
                error!(error = %e, "Directory setup failed");
                e
            })?;
        info!(image_dir = %scratch.image_dir().display(), "Run started");

        let mut summary = RunSummary {
            output: output.clone(),
            records: store.len(),
            ..RunSummary::default()
        };
        let mut assembler = Assembler::new(&self.layout, store.title());

        for (position, record) in store.records().iter().enumerate() {
            let outcome = render_record(&self.dispatcher, record, position, &scratch)?;
            match &outcome {
                RenderOutcome::Skipped => summary.skipped += 1,
                RenderOutcome::Rendered(_) => summary.rendered += 1,
                RenderOutcome::Failed(_) => summary.failed += 1,
            }
            assembler.add_record(record, &outcome);
            if let Some(progress) = self.progress.as_mut() {
                progress(record, &outcome);
            }
        }

        let story = assembler.finish();
        summary.pages = story.page_break_count() + 1;
        let title = store.title().unwrap_or(&self.config.document_title);
        self.writer.write(&story, title, &output).map_err(|e| {
            error!(error = %e, "Document assembly failed");
            e
        })?;

        drop(scratch);
        info!(
            rendered = summary.rendered,
            failed = summary.failed,
            skipped = summary.skipped,
            "Run complete"
        );
        Ok(summary)
    }
}

fn render_record(
    dispatcher: &Dispatcher,
    record: &Record,
    position: usize,
    scratch: &ScratchDir,
) -> Result<RenderOutcome> {
    let Some(recipe) = &record.recipe else {
        debug!(record = %record.key, "No recipe, text only");
        return Ok(RenderOutcome::Skipped);
    };
    let path = scratch.image_path(&record.key.image_file_name(position));
    match dispatcher.render(&record.key, recipe, &path) {
        Ok(image) => Ok(RenderOutcome::Rendered(image)),
        Err(e) if e.is_record_scoped() => {
            warn!(record = %record.key, error = %e, "Record failed, using placeholder");
            Ok(RenderOutcome::Failed(e))
        }
        Err(e) => {
            error!(record = %record.key, error = %e, "Fatal error while rendering");
            Err(e)
        }
    }
}

/// Render one record's image to `path`, bypassing the document.
///
/// A `.svg` extension writes the vector stage; anything else writes a PNG.
pub fn render_single(dispatcher: &Dispatcher, record: &Record, path: &Path) -> Result<()> {
    let Some(recipe) = &record.recipe else {
        return Err(ReportError::invalid_content(format!(
            "{} has nothing to render",
            record.key
        )));
    };
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let canvas = dispatcher.render_svg(&record.key, recipe)?;
        std::fs::write(path, canvas.to_svg())?;
    } else {
        dispatcher.render(&record.key, recipe, path)?;
    }
    Ok(())
}
