//! Horizontal flowchart template, up to three steps

use crate::core::{
    fill, pt, ArrowHeads, LineStyle, ReportError, Result, Rgb, ShapeStyle, SvgCanvas, TextStyle,
    Viewport,
};
use crate::templates::{area_below, draw_title, Template};

/// Horizontal step centres as fractions of the drawing width
const POSITIONS: [f64; 3] = [0.15, 0.5, 0.85];
const WRAP_COLUMNS: usize = 18;
/// Gap kept between an arrow end and a step centre
const ARROW_INSET: f64 = 0.1;

pub struct FlowchartTemplate<'a> {
    steps: &'a [String],
}

impl<'a> FlowchartTemplate<'a> {
    pub fn new(steps: &'a [String]) -> Self {
        Self { steps }
    }
}

impl Template for FlowchartTemplate<'_> {
    fn name(&self) -> &'static str {
        "flowchart"
    }

    fn figure_size(&self) -> (f64, f64) {
        (10.0, 3.0)
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        if self.steps.len() > POSITIONS.len() {
            return Err(ReportError::render_failure(format!(
                "flowchart supports at most {} steps, got {}",
                POSITIONS.len(),
                self.steps.len()
            )));
        }

        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, 14.0);
        let view = Viewport::unit(area_below(canvas, top));

        let text = TextStyle::new(pt(10.0));
        let node = ShapeStyle::filled(Rgb::SKY_BLUE).rounded(8.0);
        let arrow = LineStyle::solid(Rgb::BLACK, 2.0);

        for (i, step) in self.steps.iter().enumerate() {
            let (x, y) = view.point(POSITIONS[i], 0.5);
            canvas.label_box(x, y, &fill(step, WRAP_COLUMNS), &text, &node, text.size * 0.5);
            if i > 0 {
                let from = view.point(POSITIONS[i - 1] + ARROW_INSET, 0.5);
                let to = view.point(POSITIONS[i] - ARROW_INSET, 0.5);
                canvas.arrow(from, to, &arrow, 12.0, ArrowHeads::End);
            }
        }
        Ok(())
    }
}
