//! Render recipes: the literal data a record hands to a template or chart
//!
//! Recipes are plain data. Drawing lives in [`crate::templates`] and
//! [`crate::charts`].

use serde::{Deserialize, Serialize};

/// What to draw for a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderRecipe {
    Diagram(DiagramRecipe),
    Chart(ChartRecipe),
}

impl RenderRecipe {
    /// Short name of the recipe kind, used in listings and logs
    pub fn kind(&self) -> String {
        match self {
            RenderRecipe::Diagram(diagram) => diagram.layout.name().to_string(),
            RenderRecipe::Chart(chart) => format!("{} chart", chart.kind),
        }
    }
}

/// A diagram template selection plus its subtitle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramRecipe {
    /// Appended to `Diagram for Q{n} ({group}): `
    pub subtitle: String,
    pub layout: DiagramLayout,
}

impl DiagramRecipe {
    pub fn new(subtitle: impl Into<String>, layout: DiagramLayout) -> Self {
        Self {
            subtitle: subtitle.into(),
            layout,
        }
    }
}

/// One category branch of a fishbone diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishboneCategory {
    pub name: String,
    #[serde(default)]
    pub causes: Vec<String>,
}

impl FishboneCategory {
    pub fn new(name: impl Into<String>, causes: &[&str]) -> Self {
        Self {
            name: name.into(),
            causes: causes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Template selection with the literal strings that template needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum DiagramLayout {
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        /// Relative column widths, one per header cell
        col_widths: Vec<f64>,
    },
    Matrix {
        x_label: String,
        y_label: String,
        /// Top-left, top-right, bottom-left, bottom-right
        quadrants: [String; 4],
        #[serde(default)]
        midpoint: Option<String>,
    },
    Flowchart {
        steps: Vec<String>,
    },
    Fishbone {
        effect: String,
        categories: Vec<FishboneCategory>,
    },
    Venn {
        sets: [String; 2],
        left_only: String,
        overlap: String,
        right_only: String,
    },
    Triangle {
        /// Apex, bottom-left, bottom-right
        vertices: [String; 3],
        center: String,
    },
    Composite {
        id: String,
    },
}

impl DiagramLayout {
    pub fn name(&self) -> &'static str {
        match self {
            DiagramLayout::Table { .. } => "table",
            DiagramLayout::Matrix { .. } => "matrix",
            DiagramLayout::Flowchart { .. } => "flowchart",
            DiagramLayout::Fishbone { .. } => "fishbone",
            DiagramLayout::Venn { .. } => "venn",
            DiagramLayout::Triangle { .. } => "triangle",
            DiagramLayout::Composite { .. } => "composite",
        }
    }
}

/// Percentage basis used for bar charts when a recipe does not assert one
pub const DEFAULT_RESPONDENTS: u32 = 100;

fn default_respondents() -> u32 {
    DEFAULT_RESPONDENTS
}

/// Category counts plus the declared chart kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecipe {
    /// Declared kind tag, `pie` or `bar`; anything else fails at render time
    pub kind: String,
    /// Ordered (label, count) pairs
    pub categories: Vec<(String, u32)>,
    /// Percentage basis for multi-select (`bar`) questions
    #[serde(default = "default_respondents")]
    pub respondents: u32,
}

impl ChartRecipe {
    pub fn new(kind: impl Into<String>, categories: &[(&str, u32)]) -> Self {
        Self {
            kind: kind.into(),
            categories: categories
                .iter()
                .map(|(label, count)| (label.to_string(), *count))
                .collect(),
            respondents: DEFAULT_RESPONDENTS,
        }
    }

    pub fn pie(categories: &[(&str, u32)]) -> Self {
        Self::new("pie", categories)
    }

    pub fn bar(categories: &[(&str, u32)]) -> Self {
        Self::new("bar", categories)
    }

    pub fn with_respondents(mut self, respondents: u32) -> Self {
        self.respondents = respondents;
        self
    }

    /// Sum of all category counts
    pub fn total(&self) -> u64 {
        self.categories.iter().map(|(_, count)| u64::from(*count)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_total() {
        let recipe = ChartRecipe::pie(&[("Male", 58), ("Female", 42)]);
        assert_eq!(recipe.total(), 100);
        assert_eq!(recipe.respondents, DEFAULT_RESPONDENTS);
    }

    #[test]
    fn test_recipe_kind_names() {
        let chart = RenderRecipe::Chart(ChartRecipe::bar(&[("SMS", 10)]));
        assert_eq!(chart.kind(), "bar chart");

        let diagram = RenderRecipe::Diagram(DiagramRecipe::new(
            "Training Timeline",
            DiagramLayout::Flowchart {
                steps: vec!["Pre-Departure".into()],
            },
        ));
        assert_eq!(diagram.kind(), "flowchart");
    }

    #[test]
    fn test_layout_json_is_tagged_by_template() {
        let json = r#"{
            "diagram": {
                "subtitle": "Expatriate Goal Assessment Model",
                "layout": {
                    "template": "triangle",
                    "vertices": ["Hard", "Soft", "Contextual"],
                    "center": "Overall"
                }
            }
        }"#;
        let recipe: RenderRecipe = serde_json::from_str(json).unwrap();
        match recipe {
            RenderRecipe::Diagram(diagram) => {
                assert_eq!(diagram.layout.name(), "triangle");
            }
            other => panic!("unexpected recipe: {:?}", other),
        }
    }

    #[test]
    fn test_chart_json_defaults_respondents() {
        let json = r#"{"chart": {"kind": "bar", "categories": [["Email", 35]]}}"#;
        let recipe: RenderRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(
            recipe,
            RenderRecipe::Chart(ChartRecipe::bar(&[("Email", 35)]))
        );
    }
}
