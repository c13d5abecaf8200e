//! Two-set Venn template

use crate::core::{fill, pt, Baseline, Result, Rgb, ShapeStyle, SvgCanvas, TextStyle};
use crate::templates::{area_below, draw_title, Template};

const LEFT_WRAP: usize = 20;
const RIGHT_WRAP: usize = 20;
const OVERLAP_WRAP: usize = 15;
/// Distance between circle centres as a multiple of the radius
const CENTER_SPREAD: f64 = 1.2;

const LEFT_FILL: Rgb = Rgb(255, 0, 0);
const RIGHT_FILL: Rgb = Rgb(0, 128, 0);

pub struct VennTemplate<'a> {
    sets: &'a [String; 2],
    left_only: &'a str,
    overlap: &'a str,
    right_only: &'a str,
}

impl<'a> VennTemplate<'a> {
    pub fn new(
        sets: &'a [String; 2],
        left_only: &'a str,
        overlap: &'a str,
        right_only: &'a str,
    ) -> Self {
        Self {
            sets,
            left_only,
            overlap,
            right_only,
        }
    }
}

impl Template for VennTemplate<'_> {
    fn name(&self) -> &'static str {
        "venn"
    }

    fn figure_size(&self) -> (f64, f64) {
        (10.0, 6.0)
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, 16.0);
        let area = area_below(canvas, top);

        let set_label = TextStyle::new(pt(14.0)).baseline(Baseline::Top);
        let label_room = set_label.size * 1.25 * 2.0;
        let radius = ((area.height - label_room) / 2.0)
            .min(area.width / (2.0 + CENTER_SPREAD))
            .max(1.0);
        let (cx, cy) = (area.x + area.width / 2.0, area.y + radius);
        let offset = radius * CENTER_SPREAD / 2.0;
        let (left_cx, right_cx) = (cx - offset, cx + offset);

        let left = ShapeStyle::filled(LEFT_FILL).opacity(0.4).stroke(None, 0.0);
        let right = ShapeStyle::filled(RIGHT_FILL).opacity(0.4).stroke(None, 0.0);
        canvas.circle(left_cx, cy, radius, &left);
        canvas.circle(right_cx, cy, radius, &right);
        let outline = ShapeStyle::outline(Rgb::BLACK);
        canvas.circle(left_cx, cy, radius, &outline);
        canvas.circle(right_cx, cy, radius, &outline);

        let region_text = TextStyle::new(pt(10.0));
        // Each single-set region is centred one radius from the middle.
        canvas.text(cx - radius, cy, &fill(self.left_only, LEFT_WRAP), &region_text);
        canvas.text(cx, cy, &fill(self.overlap, OVERLAP_WRAP), &region_text);
        canvas.text(cx + radius, cy, &fill(self.right_only, RIGHT_WRAP), &region_text);

        let label_y = cy + radius + 6.0;
        canvas.text(left_cx - radius * 0.5, label_y, &self.sets[0], &set_label);
        canvas.text(right_cx + radius * 0.5, label_y, &self.sets[1], &set_label);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venn_places_all_texts() {
        let sets = ["Leadership in France".to_string(), "Leadership in Arab World".to_string()];
        let svg = VennTemplate::new(
            &sets,
            "• Emphasis on Intellect\n• Formal Communication",
            "• Hierarchical\n• Centralized",
            "• Paternalism\n• Personalism/Kinship",
        )
        .render("Leadership Comparison")
        .unwrap()
        .to_svg();

        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains("Leadership in France"));
        assert!(svg.contains("• Centralized"));
        assert!(svg.contains("Personalism/Kinship"));
    }

    #[test]
    fn test_overlap_text_wraps_narrower() {
        let sets = ["A".to_string(), "B".to_string()];
        let svg = VennTemplate::new(&sets, "", "Core HR Functions (Recruit, Train, etc.)", "")
            .render("t")
            .unwrap()
            .to_svg();
        assert!(svg.contains(">Core HR</tspan>"));
    }
}
