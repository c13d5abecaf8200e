//! Records and the content store
//!
//! The store is populated once, validated, put into processing order and never
//! mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{ReportError, Result};
use crate::core::recipe::{ChartRecipe, DiagramRecipe, RenderRecipe};
use crate::core::text::slugify;

/// Identifies a record: a batch name plus a position inside that batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub group: String,
    pub sequence: u32,
}

impl RecordKey {
    pub fn new(group: impl Into<String>, sequence: u32) -> Self {
        Self {
            group: group.into(),
            sequence,
        }
    }

    /// File name of the record's rendered image, e.g. `007_q3_june_2023.png`.
    ///
    /// `position` is the record's index in the store and keeps names unique
    /// when two groups slugify alike; the slug only aids reading.
    pub fn image_file_name(&self, position: usize) -> String {
        let slug = slugify(&self.group);
        if slug.is_empty() {
            format!("{:03}_q{}.png", position, self.sequence)
        } else {
            format!("{:03}_q{}_{}.png", position, self.sequence, slug)
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} ({})", self.sequence, self.group)
    }
}

/// Commentary rendered after a record's image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum BodyBlock {
    Text(String),
    Heading(String),
    Bullet(String),
    Note(String),
    /// Bold, indented point; carries its own `•` or number
    Point(String),
    /// Point nested one level below a [`BodyBlock::Point`]
    SubPoint(String),
    /// Mnemonic line
    Trick(String),
    /// Suggested diagram for an answer
    Suggestion(String),
    /// Heading of a list of points worth expanding on
    Expand(String),
}

/// A single exam question or survey question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: RecordKey,
    pub prompt: String,
    #[serde(default)]
    pub recipe: Option<RenderRecipe>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub body: Vec<BodyBlock>,
}

impl Record {
    pub fn new(group: impl Into<String>, sequence: u32, prompt: impl Into<String>) -> Self {
        Self {
            key: RecordKey::new(group, sequence),
            prompt: prompt.into(),
            recipe: None,
            notes: None,
            body: Vec::new(),
        }
    }

    pub fn with_diagram(mut self, diagram: DiagramRecipe) -> Self {
        self.recipe = Some(RenderRecipe::Diagram(diagram));
        self
    }

    pub fn with_chart(mut self, chart: ChartRecipe) -> Self {
        self.recipe = Some(RenderRecipe::Chart(chart));
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_block(mut self, block: BodyBlock) -> Self {
        self.body.push(block);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_block(BodyBlock::Text(text.into()))
    }
}

/// Serialized form of a store, as read from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub title: Option<String>,
    pub records: Vec<Record>,
}

/// Validated, ordered collection of records
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    title: Option<String>,
    records: Vec<Record>,
}

impl ContentStore {
    /// Validate `records` and put them into processing order.
    ///
    /// Groups keep the order in which they first appear; records inside a
    /// group are sorted by sequence.
    pub fn new(title: Option<String>, records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.key.clone()) {
                return Err(ReportError::invalid_content(format!(
                    "duplicate record {}",
                    record.key
                )));
            }
            if let Some(RenderRecipe::Chart(chart)) = &record.recipe {
                validate_chart(&record.key, chart)?;
            }
        }

        let mut group_order: Vec<&str> = Vec::new();
        for record in &records {
            if !group_order.contains(&record.key.group.as_str()) {
                group_order.push(&record.key.group);
            }
        }
        let rank = |group: &str| group_order.iter().position(|g| *g == group).unwrap_or(0);
        let mut keyed: Vec<(usize, Record)> = records
            .iter()
            .map(|record| (rank(&record.key.group), record.clone()))
            .collect();
        keyed.sort_by_key(|(group_rank, record)| (*group_rank, record.key.sequence));

        debug!(records = keyed.len(), groups = group_order.len(), "Content store built");
        Ok(Self {
            title,
            records: keyed.into_iter().map(|(_, record)| record).collect(),
        })
    }

    /// Parse and validate a JSON content file
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ContentFile = serde_json::from_str(json)
            .map_err(|e| ReportError::invalid_content(format!("malformed content file: {}", e)))?;
        Self::new(file.title, file.records)
    }

    /// Read a JSON content file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the store back into content-file form
    pub fn to_json(&self) -> Result<String> {
        let file = ContentFile {
            title: self.title.clone(),
            records: self.records.clone(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| ReportError::invalid_content(format!("cannot serialize content: {}", e)))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Group names in processing order
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for record in &self.records {
            if groups.last() != Some(&record.key.group.as_str()) {
                groups.push(&record.key.group);
            }
        }
        groups
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.records.iter().find(|record| &record.key == key)
    }
}

fn validate_chart(key: &RecordKey, chart: &ChartRecipe) -> Result<()> {
    if chart.categories.is_empty() {
        return Err(ReportError::invalid_content(format!(
            "chart for {} has no categories",
            key
        )));
    }
    let mut labels = HashSet::new();
    for (label, _) in &chart.categories {
        if !labels.insert(label.as_str()) {
            return Err(ReportError::invalid_content(format!(
                "chart for {} repeats category '{}'",
                key, label
            )));
        }
    }
    Ok(())
}
