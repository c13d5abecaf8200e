//! Survey charts and their data tables
//!
//! A chart recipe carries category counts plus a declared kind. The summary
//! computes percentages against the right basis; the renderers draw a pie or
//! bar chart from it.

pub mod bar;
pub mod pie;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::{ChartRecipe, ReportError, Result, SvgCanvas};

/// Header row of every chart data table
pub const TABLE_HEADER: [&str; 3] = ["CATEGORY", "NUMBER OF PERSONS", "PERCENTAGE"];

/// Supported chart kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Single-choice question; percentages of the record's own total
    Pie,
    /// Multi-select question; percentages of the asserted respondent total
    Bar,
}

impl FromStr for ChartKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(ChartKind::Pie),
            "bar" => Ok(ChartKind::Bar),
            other => Err(ReportError::unsupported(format!("chart:{}", other))),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

/// One category with its share of the percentage basis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

/// Percentages and table rows derived from a chart recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub rows: Vec<ChartRow>,
    /// Sum of all counts
    pub total: u64,
    /// Denominator used for every percentage, never zero
    pub basis: u64,
    /// Whether the declared kind is `pie`
    pub is_pie: bool,
}

impl ChartSummary {
    /// Summarise `recipe`.
    ///
    /// Pie charts divide by the sum of counts; every other declared kind
    /// divides by the asserted respondent total. A zero basis counts as 1.
    pub fn new(recipe: &ChartRecipe) -> Self {
        let is_pie = matches!(recipe.kind.parse::<ChartKind>(), Ok(ChartKind::Pie));
        let total = recipe.total();
        let basis = if is_pie {
            total
        } else {
            u64::from(recipe.respondents)
        }
        .max(1);

        let rows = recipe
            .categories
            .iter()
            .map(|(label, count)| ChartRow {
                label: label.clone(),
                count: *count,
                percentage: f64::from(*count) * 100.0 / basis as f64,
            })
            .collect();

        Self {
            rows,
            total,
            basis,
            is_pie,
        }
    }

    pub fn percentages(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.percentage).collect()
    }

    /// Body rows of the data table, with a `TOTAL` row for pie charts
    pub fn table_rows(&self) -> Vec<[String; 3]> {
        let mut rows: Vec<[String; 3]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.label.clone(),
                    row.count.to_string(),
                    format_percent(row.percentage),
                ]
            })
            .collect();
        if self.is_pie {
            rows.push([
                "TOTAL".to_string(),
                self.total.to_string(),
                format_percent(100.0),
            ]);
        }
        rows
    }
}

/// Format a percentage with one decimal, e.g. `37.5%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Draw the chart declared by `recipe`
pub fn render(recipe: &ChartRecipe) -> Result<SvgCanvas> {
    let kind: ChartKind = recipe.kind.parse()?;
    if recipe.categories.is_empty() {
        return Err(ReportError::render_failure("chart has no categories"));
    }
    let summary = ChartSummary::new(recipe);
    match kind {
        ChartKind::Pie => pie::draw(&summary),
        ChartKind::Bar => bar::draw(&summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!(" Bar ".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        let err = "pie3d".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedRecipe { .. }));
    }

    #[test]
    fn test_pie_uses_own_total() {
        let recipe = ChartRecipe::pie(&[("A", 30), ("B", 90)]);
        let summary = ChartSummary::new(&recipe);
        assert_eq!(summary.basis, 120);
        assert_eq!(summary.percentages(), vec![25.0, 75.0]);
    }

    #[test]
    fn test_bar_uses_respondents() {
        let recipe = ChartRecipe::bar(&[("Email", 35), ("Phone Calls", 45), ("SMS", 10)]);
        let summary = ChartSummary::new(&recipe);
        assert_eq!(summary.basis, 100);
        assert_eq!(summary.total, 90);
        assert_eq!(summary.percentages(), vec![35.0, 45.0, 10.0]);

        let summary = ChartSummary::new(&recipe.with_respondents(50));
        assert_eq!(summary.percentages(), vec![70.0, 90.0, 20.0]);
    }

    #[test]
    fn test_zero_basis_counts_as_one() {
        let summary = ChartSummary::new(&ChartRecipe::pie(&[("A", 0), ("B", 0)]));
        assert_eq!(summary.basis, 1);
        assert_eq!(summary.percentages(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_table_rows_total_only_for_pie() {
        let pie = ChartSummary::new(&ChartRecipe::pie(&[("Male", 58), ("Female", 42)]));
        let rows = pie.table_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Male".to_string(), "58".to_string(), "58.0%".to_string()]);
        assert_eq!(rows[2], ["TOTAL".to_string(), "100".to_string(), "100.0%".to_string()]);

        let bar = ChartSummary::new(&ChartRecipe::bar(&[("SMS", 10)]));
        assert_eq!(bar.table_rows().len(), 1);
    }

    #[test]
    fn test_unknown_kind_still_has_table() {
        let summary = ChartSummary::new(&ChartRecipe::new("donut", &[("A", 25)]));
        assert!(!summary.is_pie);
        assert_eq!(summary.table_rows()[0][2], "25.0%");
        assert!(render(&ChartRecipe::new("donut", &[("A", 25)])).is_err());
    }
}
