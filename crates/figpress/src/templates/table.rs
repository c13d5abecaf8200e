//! Table image template: a wrapped text grid under a navy header band

use crate::core::{
    fill, measure_height, pt, Anchor, Bounds, ReportError, Result, Rgb, ShapeStyle, SvgCanvas,
    TextStyle, UNITS_PER_INCH,
};
use crate::templates::{draw_title, Template, MARGIN};

/// Cell text is wrapped at this many columns
const WRAP_COLUMNS: usize = 35;
const FONT_PT: f64 = 10.0;
const TITLE_PT: f64 = 14.0;
const FIGURE_WIDTH_IN: f64 = 10.0;
/// Rows are stretched vertically by this factor
const ROW_SCALE: f64 = 1.8;
const CELL_PAD: f64 = 6.0;

pub struct TableTemplate<'a> {
    header: &'a [String],
    rows: &'a [Vec<String>],
    col_widths: &'a [f64],
}

impl<'a> TableTemplate<'a> {
    pub fn new(header: &'a [String], rows: &'a [Vec<String>], col_widths: &'a [f64]) -> Self {
        Self {
            header,
            rows,
            col_widths,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.header.is_empty() {
            return Err(ReportError::render_failure("table has no header row"));
        }
        if self.col_widths.len() != self.header.len() {
            return Err(ReportError::render_failure(format!(
                "table has {} columns but {} column widths",
                self.header.len(),
                self.col_widths.len()
            )));
        }
        if self.col_widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(ReportError::render_failure(
                "table column widths must be positive",
            ));
        }
        if let Some((i, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.header.len())
        {
            return Err(ReportError::render_failure(format!(
                "table row {} has {} cells, expected {}",
                i + 1,
                row.len(),
                self.header.len()
            )));
        }
        Ok(())
    }

    fn wrapped_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header)
            .chain(self.rows.iter().map(|row| row.as_slice()))
            .map(|row| row.iter().map(|cell| fill(cell, WRAP_COLUMNS)).collect())
            .collect()
    }

    fn row_heights(rows: &[Vec<String>]) -> Vec<f64> {
        let size = pt(FONT_PT);
        rows.iter()
            .map(|row| {
                let tallest = row
                    .iter()
                    .map(|cell| measure_height(cell, size))
                    .fold(size, f64::max);
                tallest + (ROW_SCALE - 1.0) * size * 1.25 + CELL_PAD
            })
            .collect()
    }

    fn title_allowance() -> f64 {
        2.0 * MARGIN + 2.0 * pt(TITLE_PT) * 1.25
    }
}

impl Template for TableTemplate<'_> {
    fn name(&self) -> &'static str {
        "table"
    }

    fn figure_size(&self) -> (f64, f64) {
        let rows = self.wrapped_rows();
        let grid: f64 = Self::row_heights(&rows).iter().sum();
        let height = Self::title_allowance() + grid + MARGIN;
        let minimum = self.rows.len() as f64 * 0.5 + 1.0;
        (FIGURE_WIDTH_IN, (height / UNITS_PER_INCH).max(minimum))
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        self.validate()?;

        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, TITLE_PT);

        let rows = self.wrapped_rows();
        let heights = Self::row_heights(&rows);
        let table_width = canvas.width() * 0.9;
        let left = (canvas.width() - table_width) / 2.0;
        let total_weight: f64 = self.col_widths.iter().sum();
        let widths: Vec<f64> = self
            .col_widths
            .iter()
            .map(|w| w / total_weight * table_width)
            .collect();

        let header_text = TextStyle::new(pt(FONT_PT))
            .bold()
            .color(Rgb::WHITE)
            .anchor(Anchor::Start);
        let body_text = TextStyle::new(pt(FONT_PT)).anchor(Anchor::Start);
        let header_cell = ShapeStyle::filled(Rgb::NAVY_HEADER).stroke(Some(Rgb::WHITE), 1.5);
        let body_cell = ShapeStyle::filled(Rgb::WHITE_SMOKE).stroke(Some(Rgb::WHITE), 1.5);

        let mut y = top;
        for (row_index, (row, height)) in rows.iter().zip(&heights).enumerate() {
            let (cell_style, text_style) = if row_index == 0 {
                (&header_cell, &header_text)
            } else {
                (&body_cell, &body_text)
            };
            let mut x = left;
            for (cell, width) in row.iter().zip(&widths) {
                let bounds = Bounds {
                    x,
                    y,
                    width: *width,
                    height: *height,
                };
                canvas.rect(bounds, cell_style);
                canvas.text(x + CELL_PAD, y + height / 2.0, cell, text_style);
                x += width;
            }
            y += height;
        }
        Ok(())
    }
}
