//! Pie chart with a category legend

use crate::charts::{format_percent, ChartSummary};
use crate::core::{
    fill, measure_height, measure_width, pt, tab10, Anchor, Baseline, Bounds, ReportError,
    Result, Rgb, ShapeStyle, SvgCanvas, TextStyle,
};

pub const FIGURE_SIZE: (f64, f64) = (6.0, 4.0);

/// Wedges start at twelve o'clock
const START_ANGLE: f64 = 90.0;
/// Radial position of the percentage annotations
const LABEL_DISTANCE: f64 = 0.85;
/// Radial offset separating neighbouring wedges
const EXPLODE: f64 = 0.01;
const LEGEND_WRAP: usize = 28;
const MARGIN: f64 = 12.0;

pub fn draw(summary: &ChartSummary) -> Result<SvgCanvas> {
    if summary.rows.iter().all(|row| row.count == 0) {
        return Err(ReportError::render_failure(
            "pie chart needs at least one non-zero count",
        ));
    }

    let mut canvas = SvgCanvas::from_inches(FIGURE_SIZE.0, FIGURE_SIZE.1);
    let legend = Legend::new(summary);
    let legend_width = legend.width();

    let pie_area = Bounds {
        x: MARGIN,
        y: MARGIN,
        width: (canvas.width() - legend_width - 3.0 * MARGIN).max(1.0),
        height: canvas.height() - 2.0 * MARGIN,
    };
    let (cx, cy) = pie_area.center();
    let radius = pie_area.width.min(pie_area.height) / 2.0 / (1.0 + EXPLODE);

    let edge = ShapeStyle::outline(Rgb::BLACK).stroke(Some(Rgb::BLACK), 0.5);
    let annotation = TextStyle::new(pt(8.0))
        .bold()
        .color(Rgb::WHITE)
        .baseline(Baseline::Center);
    let total: u64 = summary.rows.iter().map(|row| u64::from(row.count)).sum();

    let mut angle = START_ANGLE;
    for (i, row) in summary.rows.iter().enumerate() {
        let sweep = 360.0 * f64::from(row.count) / total as f64;
        let mid = (angle + sweep / 2.0).to_radians();
        let offset = radius * EXPLODE;
        let center = (cx + offset * mid.cos(), cy - offset * mid.sin());

        // zero counts get no wedge but keep their annotation on the boundary
        if row.count > 0 {
            let style = ShapeStyle {
                fill: Some(tab10(i)),
                ..edge
            };
            canvas.wedge(center, radius, 0.0, angle, sweep, &style);
        }

        let distance = radius * LABEL_DISTANCE;
        canvas.text(
            center.0 + distance * mid.cos(),
            center.1 - distance * mid.sin(),
            &format_percent(row.percentage),
            &annotation,
        );
        angle += sweep;
    }

    legend.draw(&mut canvas, pie_area.right() + MARGIN, cy);
    Ok(canvas)
}

/// `Categories` legend listing `label (count)` entries
struct Legend {
    entries: Vec<String>,
    text: TextStyle,
    title: TextStyle,
}

impl Legend {
    fn new(summary: &ChartSummary) -> Self {
        let entries = summary
            .rows
            .iter()
            .map(|row| fill(&format!("{} ({})", row.label, row.count), LEGEND_WRAP))
            .collect();
        let text = TextStyle::new(pt(8.0))
            .anchor(Anchor::Start)
            .baseline(Baseline::Top);
        Self {
            entries,
            text,
            title: text.anchor(Anchor::Middle),
        }
    }

    fn swatch(&self) -> f64 {
        self.text.size
    }

    fn pad(&self) -> f64 {
        self.text.size * 0.6
    }

    fn width(&self) -> f64 {
        let widest = self
            .entries
            .iter()
            .map(|entry| measure_width(entry, self.text.size))
            .fold(measure_width("Categories", self.title.size), f64::max);
        widest + self.swatch() + 3.0 * self.pad()
    }

    fn height(&self) -> f64 {
        let rows: f64 = self
            .entries
            .iter()
            .map(|entry| measure_height(entry, self.text.size) + self.pad())
            .sum();
        measure_height("Categories", self.title.size) + rows + 2.0 * self.pad()
    }

    /// Draw the legend with its left edge at `x`, vertically centred on `cy`
    fn draw(&self, canvas: &mut SvgCanvas, x: f64, cy: f64) {
        let frame = Bounds {
            x,
            y: cy - self.height() / 2.0,
            width: self.width(),
            height: self.height(),
        };
        let style = ShapeStyle::filled(Rgb::WHITE)
            .stroke(Some(Rgb::LIGHT_GREY), 1.0)
            .rounded(3.0);
        canvas.rect(frame, &style);

        let pad = self.pad();
        canvas.text(frame.x + frame.width / 2.0, frame.y + pad, "Categories", &self.title);
        let mut y = frame.y + pad + measure_height("Categories", self.title.size) + pad;
        for (i, entry) in self.entries.iter().enumerate() {
            let swatch = Bounds {
                x: frame.x + pad,
                y,
                width: self.swatch(),
                height: self.swatch() * 0.7,
            };
            canvas.rect(swatch, &ShapeStyle::filled(tab10(i)).stroke(None, 0.0));
            canvas.text(swatch.right() + pad, y, entry, &self.text);
            y += measure_height(entry, self.text.size) + pad;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChartRecipe;

    #[test]
    fn test_legend_and_annotations() {
        let summary = ChartSummary::new(&ChartRecipe::pie(&[("A", 30), ("B", 70)]));
        let svg = draw(&summary).unwrap().to_svg();
        assert!(svg.contains(">A (30)</tspan>"));
        assert!(svg.contains(">B (70)</tspan>"));
        assert!(svg.contains(">30.0%</tspan>"));
        assert!(svg.contains(">70.0%</tspan>"));
        assert!(svg.contains(">Categories</tspan>"));
    }

    #[test]
    fn test_one_wedge_per_category() {
        let summary = ChartSummary::new(&ChartRecipe::pie(&[
            ("Below 25", 15),
            ("25-35", 35),
            ("36-45", 25),
            ("46-55", 15),
            ("Above 55", 10),
        ]));
        let svg = draw(&summary).unwrap().to_svg();
        assert_eq!(svg.matches("<path").count(), 5);
        assert!(svg.contains("fill=\"#1f77b4\""));
    }

    #[test]
    fn test_zero_counts_keep_annotation() {
        let summary = ChartSummary::new(&ChartRecipe::pie(&[("A", 0), ("B", 4)]));
        let svg = draw(&summary).unwrap().to_svg();
        // the single remaining wedge covers the full circle in two halves
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(">A (0)</tspan>"));
        assert!(svg.contains(">0.0%</tspan>"));
        assert!(svg.contains(">100.0%</tspan>"));
    }

    #[test]
    fn test_all_zero_fails() {
        let summary = ChartSummary::new(&ChartRecipe::pie(&[("A", 0)]));
        assert!(draw(&summary).is_err());
    }
}
