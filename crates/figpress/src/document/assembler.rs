//! Turns records and their render outcomes into a story
//!
//! The assembler never touches the filesystem. It decides order, headings,
//! placeholders and page breaks; a [`crate::document::DocumentWriter`] turns
//! the result into a file.

use tracing::trace;

use crate::charts::{ChartSummary, TABLE_HEADER};
use crate::core::{BodyBlock, Record, RenderRecipe, RenderedImage, ReportError};
use crate::document::story::{DataTable, Flowable, ImageBlock, Story};
use crate::document::styles::LayoutOptions;

/// Heading placed above body blocks when the layout asks for it
pub const INTERPRETATION_HEADING: &str = "Interpretation";

/// What rendering produced for one record
#[derive(Debug)]
pub enum RenderOutcome {
    /// The record has no recipe
    Skipped,
    Rendered(RenderedImage),
    Failed(ReportError),
}

/// Inline text substituted for a failed image
pub fn placeholder_text(record: &Record, error: &ReportError) -> String {
    match record.recipe {
        Some(RenderRecipe::Chart(_)) => format!(
            "[Chart for Q{} could not be generated: {}]",
            record.key.sequence, error
        ),
        _ => format!("[Error creating diagram: {}]", error),
    }
}

/// Scale `(width, height)` to fit inside `bounds`, keeping its aspect ratio
pub fn fit_within(size: (f64, f64), bounds: (f64, f64)) -> (f64, f64) {
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return bounds;
    }
    let scale = (bounds.0 / width).min(bounds.1 / height);
    (width * scale, height * scale)
}

/// Incremental story builder
pub struct Assembler<'a> {
    layout: &'a LayoutOptions,
    story: Story,
    current_group: Option<String>,
    records: usize,
}

impl<'a> Assembler<'a> {
    pub fn new(layout: &'a LayoutOptions, title: Option<&str>) -> Self {
        let mut story = Story::new();
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            story.push(Flowable::Title {
                text: title.to_string(),
            });
        }
        Self {
            layout,
            story,
            current_group: None,
            records: 0,
        }
    }

    /// Number of records added so far
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Append one record.
    ///
    /// A page break (or the layout's record spacer) separates it from the
    /// previous record, so the story never ends with one.
    pub fn add_record(&mut self, record: &Record, outcome: &RenderOutcome) {
        if self.records > 0 {
            if self.layout.page_breaks {
                self.story.push(Flowable::PageBreak);
            } else {
                self.spacer(self.layout.record_spacer);
            }
        }
        self.records += 1;
        trace!(record = %record.key, "Assembling record");

        if let Some(prefix) = &self.layout.group_headings {
            if self.current_group.as_deref() != Some(record.key.group.as_str()) {
                self.story.push(Flowable::GroupHeading {
                    text: format!("{}{}", prefix, record.key.group),
                });
                self.spacer(self.layout.group_spacer);
            }
        }
        self.current_group = Some(record.key.group.clone());

        let prompt = if self.layout.numbered_prompts {
            format!("{}. {}", record.key.sequence, record.prompt)
        } else {
            record.prompt.clone()
        };
        self.story.push(Flowable::QuestionHeading { text: prompt });
        self.spacer(self.layout.prompt_spacer);

        if let Some(RenderRecipe::Chart(chart)) = &record.recipe {
            self.story.push(Flowable::Table(data_table(&ChartSummary::new(chart))));
            self.spacer(self.layout.block_spacer);
        }

        match outcome {
            RenderOutcome::Skipped => {}
            RenderOutcome::Rendered(image) => {
                let (width, height) = fit_within(image.size_inches(), self.layout.image_box);
                self.story.push(Flowable::Image(ImageBlock {
                    path: image.path.clone(),
                    width_px: image.width_px,
                    height_px: image.height_px,
                    width,
                    height,
                }));
                self.spacer(self.layout.block_spacer);
            }
            RenderOutcome::Failed(error) => {
                self.story.push(Flowable::Placeholder {
                    text: placeholder_text(record, error),
                });
                self.spacer(self.layout.block_spacer);
            }
        }

        if let Some(notes) = record.notes.as_deref().filter(|n| !n.is_empty()) {
            self.story.push(Flowable::Note {
                text: notes.to_string(),
            });
        }

        if self.layout.interpretation_heading && !record.body.is_empty() {
            self.story.push(Flowable::Subheading {
                text: INTERPRETATION_HEADING.to_string(),
            });
        }
        for block in &record.body {
            self.story.push(match block {
                BodyBlock::Text(text) => Flowable::Paragraph { text: text.clone() },
                BodyBlock::Heading(text) => Flowable::Subheading { text: text.clone() },
                BodyBlock::Bullet(text) => Flowable::Bullet { text: text.clone() },
                BodyBlock::Note(text) => Flowable::Note { text: text.clone() },
                BodyBlock::Point(text) => Flowable::Point { text: text.clone() },
                BodyBlock::SubPoint(text) => Flowable::SubPoint { text: text.clone() },
                BodyBlock::Trick(text) => Flowable::Trick { text: text.clone() },
                BodyBlock::Suggestion(text) => Flowable::Suggestion { text: text.clone() },
                BodyBlock::Expand(text) => Flowable::Expand { text: text.clone() },
            });
        }
    }

    pub fn finish(self) -> Story {
        self.story
    }

    fn spacer(&mut self, height: f64) {
        if height > 0.0 {
            self.story.push(Flowable::Spacer { height });
        }
    }
}

fn data_table(summary: &ChartSummary) -> DataTable {
    DataTable {
        header: TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
        rows: summary.table_rows().into_iter().map(Vec::from).collect(),
        has_total: summary.is_pie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChartRecipe, DiagramLayout, DiagramRecipe};
    use std::path::PathBuf;

    fn image(width_px: u32, height_px: u32, dpi: f64) -> RenderOutcome {
        RenderOutcome::Rendered(RenderedImage {
            path: PathBuf::from("q1.png"),
            width_px,
            height_px,
            dpi,
        })
    }

    fn diagram_record(group: &str, sequence: u32) -> Record {
        Record::new(group, sequence, format!("Question {}", sequence)).with_diagram(
            DiagramRecipe::new(
                "Timeline",
                DiagramLayout::Flowchart {
                    steps: vec!["a".into()],
                },
            ),
        )
    }

    #[test]
    fn test_fit_within_keeps_aspect() {
        assert_eq!(fit_within((14.0, 5.0), (7.0, 5.0)), (7.0, 2.5));
        assert_eq!(fit_within((4.0, 8.0), (7.0, 5.0)), (2.5, 5.0));
        assert_eq!(fit_within((3.5, 2.5), (7.0, 5.0)), (7.0, 5.0));
    }

    #[test]
    fn test_exam_layout_groups_and_breaks() {
        let layout = LayoutOptions::exam().within_frame(6.0);
        let mut assembler = Assembler::new(&layout, None);
        assembler.add_record(&diagram_record("June 2023", 1), &image(1400, 500, 100.0));
        assembler.add_record(&diagram_record("June 2023", 2), &image(1400, 500, 100.0));
        assembler.add_record(&diagram_record("June 2024", 1), &image(1400, 500, 100.0));
        let story = assembler.finish();

        assert_eq!(story.page_break_count(), 2);
        assert_ne!(story.flowables().last(), Some(&Flowable::PageBreak));
        assert_eq!(
            story.headings(),
            vec![
                "Exam Solutions: June 2023",
                "Question 1",
                "Question 2",
                "Exam Solutions: June 2024",
                "Question 1",
            ]
        );
        match &story.flowables()[4] {
            Flowable::Image(block) => {
                assert!((block.width - 6.0).abs() < 1e-9);
                assert!((block.height - 6.0 * 5.0 / 14.0).abs() < 1e-9);
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_diagram_placeholder() {
        let layout = LayoutOptions::exam();
        let mut assembler = Assembler::new(&layout, None);
        let error = ReportError::unsupported("composite:org-chart");
        assembler.add_record(&diagram_record("June 2023", 9), &RenderOutcome::Failed(error));
        let story = assembler.finish();
        assert_eq!(story.placeholder_count(), 1);
        assert!(story.iter().any(|f| matches!(
            f,
            Flowable::Placeholder { text } if text == "[Error creating diagram: Unsupported recipe: composite:org-chart]"
        )));
    }

    #[test]
    fn test_survey_record_layout() {
        let layout = LayoutOptions::survey();
        let record = Record::new("Section A: Demographic Profile", 2, "Gender")
            .with_chart(ChartRecipe::pie(&[("Male", 58), ("Female", 42)]))
            .with_text("The majority of respondents are male.");
        let mut assembler = Assembler::new(&layout, None);
        let error = ReportError::render_failure("boom");
        assembler.add_record(&record, &RenderOutcome::Failed(error));
        let story = assembler.finish();

        let kinds: Vec<&Flowable> = story.iter().collect();
        assert_eq!(
            kinds[0],
            &Flowable::QuestionHeading {
                text: "2. Gender".into()
            }
        );
        match kinds[1] {
            Flowable::Table(table) => {
                assert_eq!(table.header[1], "NUMBER OF PERSONS");
                assert_eq!(table.rows.len(), 3);
                assert!(table.has_total);
            }
            other => panic!("expected table, got {:?}", other),
        }
        assert!(story.iter().any(|f| matches!(
            f,
            Flowable::Placeholder { text } if text == "[Chart for Q2 could not be generated: Render error: boom]"
        )));
        assert_eq!(story.headings().last(), Some(&INTERPRETATION_HEADING));
        assert_eq!(story.page_break_count(), 0);
    }

    #[test]
    fn test_record_without_recipe_is_text_only() {
        let layout = LayoutOptions::survey();
        let record = Record::new("Open-ended Question", 20, "Suggestions")
            .with_text("Respondents asked for faster claims.");
        let mut assembler = Assembler::new(&layout, Some("Survey"));
        assembler.add_record(&record, &RenderOutcome::Skipped);
        let story = assembler.finish();
        assert_eq!(story.image_count() + story.placeholder_count(), 0);
        assert!(!story.iter().any(|f| matches!(f, Flowable::Table(_))));
        assert_eq!(story.headings()[0], "Survey");
    }

    #[test]
    fn test_solutions_layout_shares_pages() {
        let layout = LayoutOptions::solutions();
        let first = Record::new("June 2023", 1, "Trace the evolution.")
            .with_block(BodyBlock::Heading("Introduction:".into()))
            .with_block(BodyBlock::Point("\u{2022} Cantillon: risk-bearer.".into()))
            .with_block(BodyBlock::SubPoint("Leasing: paying rentals.".into()))
            .with_block(BodyBlock::Trick("Memory Trick: EPSM.".into()))
            .with_block(BodyBlock::Suggestion("Diagram Suggestion: a timeline.".into()))
            .with_block(BodyBlock::Expand("Key Points to Expand Further:".into()))
            .with_block(BodyBlock::Bullet("Discuss limitations.".into()));
        let second = Record::new("June 2023", 2, "What is competence?");

        let mut assembler = Assembler::new(&layout, Some("MMPC-018"));
        assembler.add_record(&first, &RenderOutcome::Skipped);
        assembler.add_record(&second, &RenderOutcome::Skipped);
        let story = assembler.finish();

        assert_eq!(story.page_break_count(), 0);
        assert_eq!(
            story.headings(),
            vec![
                "MMPC-018",
                "1. Trace the evolution.",
                "Introduction:",
                "2. What is competence?"
            ]
        );
        let body: Vec<&Flowable> = story.flowables()[3..10].iter().collect();
        assert!(matches!(body[0], Flowable::Point { .. }));
        assert!(matches!(body[1], Flowable::SubPoint { .. }));
        assert!(matches!(body[2], Flowable::Trick { .. }));
        assert!(matches!(body[3], Flowable::Suggestion { .. }));
        assert!(matches!(body[4], Flowable::Expand { .. }));
        assert!(matches!(body[5], Flowable::Bullet { .. }));
        assert_eq!(
            body[6],
            &Flowable::Spacer {
                height: layout.record_spacer
            }
        );
    }

    #[test]
    fn test_empty_story_has_only_title() {
        let layout = LayoutOptions::exam();
        assert!(Assembler::new(&layout, None).finish().is_empty());
        assert_eq!(Assembler::new(&layout, Some("Report")).finish().len(), 1);
    }
}
