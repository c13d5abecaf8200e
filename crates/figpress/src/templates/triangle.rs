//! Conceptual triangle template: three vertex labels around a centre badge

use crate::core::{
    measure_width, pt, Anchor, Bounds, LineStyle, Result, Rgb, ShapeStyle, SvgCanvas, TextStyle,
    Viewport,
};
use crate::templates::{draw_title, Template, MARGIN};

const APEX: (f64, f64) = (0.5, 0.9);
const BOTTOM_LEFT: (f64, f64) = (0.1, 0.1);
const BOTTOM_RIGHT: (f64, f64) = (0.9, 0.1);
const LABEL_GAP: f64 = 0.05;

pub struct TriangleTemplate<'a> {
    vertices: &'a [String; 3],
    center: &'a str,
}

impl<'a> TriangleTemplate<'a> {
    pub fn new(vertices: &'a [String; 3], center: &'a str) -> Self {
        Self { vertices, center }
    }
}

impl Template for TriangleTemplate<'_> {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn figure_size(&self) -> (f64, f64) {
        (8.0, 6.0)
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, 16.0);

        let vertex_text = TextStyle::new(pt(10.0));
        let pad = pt(5.0);
        // Side labels hang outside the unit square; reserve their width.
        let side_room = self.vertices[1..]
            .iter()
            .map(|label| measure_width(label, vertex_text.size))
            .fold(0.0, f64::max)
            + 2.0 * pad
            + MARGIN;
        let view = Viewport::unit(Bounds {
            x: side_room,
            y: top + vertex_text.size * 2.0,
            width: (canvas.width() - 2.0 * side_room).max(1.0),
            height: (canvas.height() - top - vertex_text.size * 2.0 - MARGIN).max(1.0),
        });

        let corners = [
            view.point(APEX.0, APEX.1),
            view.point(BOTTOM_LEFT.0, BOTTOM_LEFT.1),
            view.point(BOTTOM_RIGHT.0, BOTTOM_RIGHT.1),
            view.point(APEX.0, APEX.1),
        ];
        canvas.polyline(&corners, &LineStyle::solid(Rgb::BLACK, 1.5));

        let placements = [
            (APEX.0, APEX.1 + LABEL_GAP, Anchor::Middle, Rgb::LIGHT_BLUE),
            (BOTTOM_LEFT.0 - LABEL_GAP, BOTTOM_LEFT.1, Anchor::End, Rgb::LIGHT_GREEN),
            (BOTTOM_RIGHT.0 + LABEL_GAP, BOTTOM_RIGHT.1, Anchor::Start, Rgb::LIGHT_CORAL),
        ];
        for (label, (x, y, anchor, fill)) in self.vertices.iter().zip(placements) {
            let (px, py) = view.point(x, y);
            canvas.label_box(
                px,
                py,
                label,
                &vertex_text.anchor(anchor),
                &ShapeStyle::filled(fill),
                pad,
            );
        }

        let (cx, cy) = view.point(0.5, 0.5);
        canvas.label_circle(
            cx,
            cy,
            self.center,
            &TextStyle::new(pt(12.0)).bold(),
            &ShapeStyle::filled(Rgb::GOLD),
            pt(6.0),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_layout() {
        let vertices = [
            "Hard Goals\n(Quantitative)".to_string(),
            "Soft Goals\n(Behavioral)".to_string(),
            "Contextual Goals\n(Situational)".to_string(),
        ];
        let svg = TriangleTemplate::new(&vertices, "Overall\nManagerial\nPerformance")
            .render("Expatriate Goal Assessment Model")
            .unwrap()
            .to_svg();

        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("fill=\"#ffd700\""));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("text-anchor=\"start\""));
        assert!(svg.contains(">Performance</tspan>"));
    }
}
