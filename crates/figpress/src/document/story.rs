//! The flowable story a report is assembled into

use std::path::PathBuf;

use serde::Serialize;

/// Rows of a chart data table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Whether the last row is a `TOTAL` row to be set apart
    pub has_total: bool,
}

/// An image placed at a fixed display size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageBlock {
    pub path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
    /// Display size in inches
    pub width: f64,
    pub height: f64,
}

impl ImageBlock {
    /// Horizontal pixels per displayed inch
    pub fn display_dpi(&self) -> f64 {
        f64::from(self.width_px) / self.width
    }
}

/// One element of the story, in reading order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flowable {
    Title { text: String },
    GroupHeading { text: String },
    QuestionHeading { text: String },
    Subheading { text: String },
    Paragraph { text: String },
    Bullet { text: String },
    Note { text: String },
    Point { text: String },
    SubPoint { text: String },
    Trick { text: String },
    Suggestion { text: String },
    Expand { text: String },
    /// Stands in for an image that could not be produced
    Placeholder { text: String },
    Table(DataTable),
    Image(ImageBlock),
    /// Vertical space in inches
    Spacer { height: f64 },
    PageBreak,
}

impl Flowable {
    /// Heading text, for title-like flowables
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Flowable::Title { text }
            | Flowable::GroupHeading { text }
            | Flowable::QuestionHeading { text }
            | Flowable::Subheading { text } => Some(text),
            _ => None,
        }
    }
}

/// Ordered list of flowables handed to a [`crate::document::DocumentWriter`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Story {
    flowables: Vec<Flowable>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, flowable: Flowable) {
        self.flowables.push(flowable);
    }

    pub fn flowables(&self) -> &[Flowable] {
        &self.flowables
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flowable> {
        self.flowables.iter()
    }

    pub fn len(&self) -> usize {
        self.flowables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowables.is_empty()
    }

    pub fn page_break_count(&self) -> usize {
        self.iter()
            .filter(|flowable| matches!(flowable, Flowable::PageBreak))
            .count()
    }

    pub fn image_count(&self) -> usize {
        self.iter()
            .filter(|flowable| matches!(flowable, Flowable::Image(_)))
            .count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.iter()
            .filter(|flowable| matches!(flowable, Flowable::Placeholder { .. }))
            .count()
    }

    /// Heading texts in reading order
    pub fn headings(&self) -> Vec<&str> {
        self.iter().filter_map(Flowable::heading_text).collect()
    }

    /// The story split at page breaks
    pub fn pages(&self) -> Vec<&[Flowable]> {
        self.flowables
            .split(|flowable| matches!(flowable, Flowable::PageBreak))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Story {
    type Item = &'a Flowable;
    type IntoIter = std::slice::Iter<'a, Flowable>;

    fn into_iter(self) -> Self::IntoIter {
        self.flowables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Flowable {
        Flowable::QuestionHeading {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_counts_and_pages() {
        let mut story = Story::new();
        story.push(heading("1. Gender"));
        story.push(Flowable::Placeholder {
            text: "[Chart for Q1 could not be generated: x]".into(),
        });
        story.push(Flowable::PageBreak);
        story.push(heading("2. Age"));

        assert_eq!(story.len(), 4);
        assert_eq!(story.page_break_count(), 1);
        assert_eq!(story.placeholder_count(), 1);
        assert_eq!(story.image_count(), 0);
        assert_eq!(story.headings(), vec!["1. Gender", "2. Age"]);
        assert_eq!(story.pages().len(), 2);
    }

    #[test]
    fn test_display_dpi() {
        let block = ImageBlock {
            path: PathBuf::from("q1.png"),
            width_px: 1050,
            height_px: 750,
            width: 7.0,
            height: 5.0,
        };
        assert_eq!(block.display_dpi(), 150.0);
    }

    #[test]
    fn test_flowables_serialize_with_kind() {
        let json = serde_json::to_string(&Flowable::Spacer { height: 0.5 }).unwrap();
        assert_eq!(json, r#"{"kind":"spacer","height":0.5}"#);
    }
}
