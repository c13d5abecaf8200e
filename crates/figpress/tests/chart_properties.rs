//! Property tests for chart percentages

use figpress::charts::ChartSummary;
use figpress::ChartRecipe;
use proptest::prelude::*;

fn recipe(kind: &str, counts: &[u32]) -> ChartRecipe {
    let labels: Vec<String> = (0..counts.len()).map(|i| format!("C{}", i)).collect();
    let categories: Vec<(&str, u32)> = labels
        .iter()
        .map(String::as_str)
        .zip(counts.iter().copied())
        .collect();
    ChartRecipe::new(kind, &categories)
}

proptest! {
    #[test]
    fn pie_percentages_sum_to_hundred(counts in prop::collection::vec(0u32..10_000, 1..12)) {
        prop_assume!(counts.iter().any(|c| *c > 0));
        let summary = ChartSummary::new(&recipe("pie", &counts));
        let sum: f64 = summary.percentages().iter().sum();
        prop_assert!((sum - 100.0).abs() < 0.1, "sum was {}", sum);
    }

    #[test]
    fn bar_percentages_use_respondents(
        counts in prop::collection::vec(0u32..500, 1..8),
        respondents in 1u32..1_000,
    ) {
        let summary = ChartSummary::new(&recipe("bar", &counts).with_respondents(respondents));
        prop_assert_eq!(summary.basis, u64::from(respondents));
        for (row, count) in summary.rows.iter().zip(&counts) {
            let expected = f64::from(*count) * 100.0 / f64::from(respondents);
            prop_assert!((row.percentage - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn pie_table_always_ends_with_total(counts in prop::collection::vec(0u32..100, 1..8)) {
        let summary = ChartSummary::new(&recipe("pie", &counts));
        let rows = summary.table_rows();
        prop_assert_eq!(rows.len(), counts.len() + 1);
        let last = rows.last().unwrap();
        prop_assert_eq!(last[0].as_str(), "TOTAL");
        prop_assert_eq!(last[2].as_str(), "100.0%");
    }
}
