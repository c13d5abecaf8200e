//! Diagram templates
//!
//! Each template is a pure function of its literal inputs: it sizes a canvas,
//! places shapes and text at template-local coordinates and hands the canvas
//! back. Selection happens in [`dispatch`].

pub mod composite;
pub mod dispatch;
pub mod fishbone;
pub mod flowchart;
pub mod matrix;
pub mod table;
pub mod triangle;
pub mod venn;

pub use dispatch::{diagram_title, template_for, Dispatcher};

use crate::core::{fill, measure_height, pt, Baseline, Bounds, Result, SvgCanvas, TextStyle};

/// Common interface for every diagram template
pub trait Template {
    /// Template name as used in content files
    fn name(&self) -> &'static str;

    /// Figure size in inches
    fn figure_size(&self) -> (f64, f64);

    /// Draw the diagram, titled `title`, onto `canvas`
    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()>;

    /// Allocate a canvas of [`Template::figure_size`] and draw onto it
    fn render(&self, title: &str) -> Result<SvgCanvas> {
        let (width, height) = self.figure_size();
        let mut canvas = SvgCanvas::from_inches(width, height);
        self.draw(title, &mut canvas)?;
        Ok(canvas)
    }
}

/// Margin kept clear around every figure, in canvas units
pub(crate) const MARGIN: f64 = 20.0;

/// Draw a bold title centred across the top of `region`, wrapping it to the
/// region's width. Returns the y coordinate just below the title.
pub(crate) fn draw_title(canvas: &mut SvgCanvas, region: Bounds, title: &str, size_pt: f64) -> f64 {
    let style = TextStyle::new(pt(size_pt)).bold().baseline(Baseline::Top);
    let max_chars = (region.width * 0.94 / (style.size * 0.56)).floor().max(1.0) as usize;
    let wrapped = fill(title, max_chars);
    canvas.text(region.x + region.width / 2.0, region.y + MARGIN, &wrapped, &style);
    region.y + MARGIN + measure_height(&wrapped, style.size) + MARGIN
}

/// Canvas area below `top`, inset by [`MARGIN`] on the sides and bottom
pub(crate) fn area_below(canvas: &SvgCanvas, top: f64) -> Bounds {
    Bounds {
        x: MARGIN,
        y: top,
        width: canvas.width() - 2.0 * MARGIN,
        height: (canvas.height() - top - MARGIN).max(1.0),
    }
}

/// Largest square centred inside `area`
pub(crate) fn square_in(area: Bounds) -> Bounds {
    let side = area.width.min(area.height);
    Bounds {
        x: area.x + (area.width - side) / 2.0,
        y: area.y + (area.height - side) / 2.0,
        width: side,
        height: side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_wraps_to_region() {
        let mut canvas = SvgCanvas::from_inches(4.0, 3.0);
        let region = canvas.bounds();
        let below = draw_title(
            &mut canvas,
            region,
            "Diagram for Q5 (June 2023): Motivation Theories in an International Context",
            14.0,
        );
        let svg = canvas.to_svg();
        assert!(svg.matches("<tspan").count() > 1);
        assert!(below > 2.0 * MARGIN);
    }

    #[test]
    fn test_square_in_is_centred() {
        let area = Bounds {
            x: 0.0,
            y: 0.0,
            width: 600.0,
            height: 400.0,
        };
        let square = square_in(area);
        assert_eq!(square.width, 400.0);
        assert_eq!(square.x, 100.0);
        assert_eq!(square.center(), area.center());
    }
}
