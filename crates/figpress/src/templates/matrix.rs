//! 2x2 matrix template

use crate::core::{
    pt, Anchor, Baseline, Bounds, LineStyle, Result, Rgb, ShapeStyle, SvgCanvas, TextStyle,
    Viewport,
};
use crate::templates::{draw_title, Template, MARGIN};

const QUADRANT_CENTERS: [(f64, f64); 4] = [(2.5, 7.5), (7.5, 7.5), (2.5, 2.5), (7.5, 2.5)];
const QUADRANT_FILLS: [Rgb; 4] = [
    Rgb::LIGHT_BLUE,
    Rgb::LIGHT_GREEN,
    Rgb::LIGHT_CORAL,
    Rgb::LIGHT_GOLDENROD_YELLOW,
];
const TICKS: [(f64, &str); 2] = [(2.5, "Low"), (7.5, "High")];

pub struct MatrixTemplate<'a> {
    x_label: &'a str,
    y_label: &'a str,
    quadrants: &'a [String; 4],
    midpoint: Option<&'a str>,
}

impl<'a> MatrixTemplate<'a> {
    pub fn new(
        x_label: &'a str,
        y_label: &'a str,
        quadrants: &'a [String; 4],
        midpoint: Option<&'a str>,
    ) -> Self {
        Self {
            x_label,
            y_label,
            quadrants,
            midpoint,
        }
    }
}

impl Template for MatrixTemplate<'_> {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn figure_size(&self) -> (f64, f64) {
        (8.0, 7.0)
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, 14.0);

        let label_size = pt(12.0);
        let tick_size = pt(10.0);
        let left = MARGIN + label_size * 1.5 + tick_size * 3.0;
        let bottom_reserve = MARGIN + label_size * 1.5 + tick_size * 2.0;
        let plot = Bounds {
            x: left,
            y: top,
            width: canvas.width() - left - MARGIN * 2.0,
            height: canvas.height() - top - bottom_reserve,
        };
        let view = Viewport::new(plot, (0.0, 10.0), (0.0, 10.0));

        let quadrant_text = TextStyle::new(pt(10.0)).bold();
        for ((label, (x, y)), fill) in self
            .quadrants
            .iter()
            .zip(QUADRANT_CENTERS)
            .zip(QUADRANT_FILLS)
        {
            let (cx, cy) = view.point(x, y);
            let style = ShapeStyle::filled(fill)
                .opacity(0.5)
                .stroke(None, 0.0)
                .rounded(8.0);
            canvas.label_box(cx, cy, label, &quadrant_text, &style, quadrant_text.size * 0.5);
        }

        if let Some(midpoint) = self.midpoint.filter(|m| !m.is_empty()) {
            let (cx, cy) = view.point(5.0, 5.0);
            let text = TextStyle::new(pt(10.0)).italic();
            let style = ShapeStyle::filled(Rgb::GREY)
                .opacity(0.3)
                .stroke(None, 0.0)
                .rounded(6.0);
            canvas.label_box(cx, cy, midpoint, &text, &style, text.size * 0.3);
        }

        let crosshair = LineStyle::solid(Rgb::BLACK, 1.5).dashed();
        let (x0, y0) = view.point(0.0, 5.0);
        let (x1, y1) = view.point(10.0, 5.0);
        canvas.line(x0, y0, x1, y1, &crosshair);
        let (x0, y0) = view.point(5.0, 0.0);
        let (x1, y1) = view.point(5.0, 10.0);
        canvas.line(x0, y0, x1, y1, &crosshair);

        canvas.rect(plot, &ShapeStyle::outline(Rgb::BLACK));

        let tick = LineStyle::solid(Rgb::BLACK, 1.0);
        let tick_len = 5.0;
        for (value, name) in TICKS {
            let x = view.x(value);
            canvas.line(x, plot.bottom(), x, plot.bottom() + tick_len, &tick);
            canvas.text(
                x,
                plot.bottom() + tick_len + 2.0,
                name,
                &TextStyle::new(tick_size).baseline(Baseline::Top),
            );

            let y = view.y(value);
            canvas.line(plot.x - tick_len, y, plot.x, y, &tick);
            canvas.text(
                plot.x - tick_len - 3.0,
                y,
                name,
                &TextStyle::new(tick_size).anchor(Anchor::End),
            );
        }

        canvas.text(
            plot.x + plot.width / 2.0,
            plot.bottom() + tick_len + tick_size * 1.5 + 12.0,
            self.x_label,
            &TextStyle::new(label_size).baseline(Baseline::Top),
        );
        canvas.text(
            MARGIN + label_size * 0.6,
            plot.y + plot.height / 2.0,
            self.y_label,
            &TextStyle::new(label_size).rotate(-90.0),
        );

        Ok(())
    }
}
