//! Fishbone (cause and effect) template

use crate::core::{
    measure_width, pt, Anchor, ArrowHeads, Baseline, Bounds, FishboneCategory, LineStyle,
    ReportError, Result, Rgb, SvgCanvas, TextStyle, Viewport,
};
use crate::templates::{draw_title, Template, MARGIN};

/// Branch roots: two above the spine, then two below
const BRANCHES: [(f64, f64); 4] = [(0.2, 0.7), (0.4, 0.7), (0.6, 0.3), (0.8, 0.3)];
const SPINE_Y: f64 = 0.5;
const SPINE_START: f64 = 0.05;
const SPINE_END: f64 = 0.9;
const EFFECT_X: f64 = 0.95;
/// Vertical step between successive causes on one branch
const CAUSE_STEP: f64 = 0.08;
const CAUSE_LEADER: f64 = 0.1;

pub struct FishboneTemplate<'a> {
    effect: &'a str,
    categories: &'a [FishboneCategory],
}

impl<'a> FishboneTemplate<'a> {
    pub fn new(effect: &'a str, categories: &'a [FishboneCategory]) -> Self {
        Self { effect, categories }
    }
}

impl Template for FishboneTemplate<'_> {
    fn name(&self) -> &'static str {
        "fishbone"
    }

    fn figure_size(&self) -> (f64, f64) {
        (12.0, 8.0)
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        if self.categories.len() > BRANCHES.len() {
            return Err(ReportError::render_failure(format!(
                "fishbone supports at most {} categories, got {}",
                BRANCHES.len(),
                self.categories.len()
            )));
        }

        let region = canvas.bounds();
        let top = draw_title(canvas, region, title, 16.0);

        let effect_style = TextStyle::new(pt(14.0)).bold().anchor(Anchor::Start);
        let effect_width = measure_width(self.effect, effect_style.size);
        // Unit x range must leave room for the effect label right of x = 0.95.
        let width = (canvas.width() - 2.0 * MARGIN - effect_width) / EFFECT_X;
        let view = Viewport::unit(Bounds {
            x: MARGIN,
            y: top,
            width: width.max(1.0),
            height: canvas.height() - top - MARGIN,
        });

        let bone = LineStyle::solid(Rgb::BLACK, 2.0);
        canvas.arrow(
            view.point(SPINE_START, SPINE_Y),
            view.point(SPINE_END, SPINE_Y),
            &bone,
            view.dx(0.03),
            ArrowHeads::End,
        );
        let (ex, ey) = view.point(EFFECT_X, SPINE_Y);
        canvas.text(ex, ey, self.effect, &effect_style);

        let branch = LineStyle::solid(Rgb::BLACK, 1.5);
        let leader = LineStyle::solid(Rgb::BLACK, 1.0);
        let cause_style = TextStyle::new(pt(10.0)).anchor(Anchor::End);

        for (category, (x, root_y)) in self.categories.iter().zip(BRANCHES) {
            let above = root_y > SPINE_Y;
            let (bx0, by0) = view.point(x, SPINE_Y);
            let (bx1, by1) = view.point(x, root_y);
            canvas.line(bx0, by0, bx1, by1, &branch);

            let (label_y, baseline) = if above {
                (root_y + 0.05, Baseline::Bottom)
            } else {
                (root_y - 0.05, Baseline::Top)
            };
            let (lx, ly) = view.point(x, label_y);
            canvas.text(
                lx,
                ly,
                &category.name,
                &TextStyle::new(pt(10.0)).bold().baseline(baseline),
            );

            // Causes step from the branch root toward the spine.
            let mut y = root_y;
            for cause in &category.causes {
                let (x0, cy) = view.point(x - CAUSE_LEADER, y);
                let (x1, _) = view.point(x, y);
                canvas.line(x0, cy, x1, cy, &leader);
                let (tx, ty) = view.point(x - CAUSE_LEADER - 0.02, y);
                canvas.text(tx, ty, cause, &cause_style);
                y += if y < SPINE_Y { CAUSE_STEP } else { -CAUSE_STEP };
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expat_failure() -> Vec<FishboneCategory> {
        vec![
            FishboneCategory::new("Individual Factors", &["Inability to Adapt", "Immaturity"]),
            FishboneCategory::new("Family Factors", &["Spouse cannot adjust", "Isolation"]),
            FishboneCategory::new("Organizational Factors", &["Poor Selection", "Inadequate Training"]),
            FishboneCategory::new("Host Country Factors", &["Lack of Support", "Cultural Toughness"]),
        ]
    }

    #[test]
    fn test_fishbone_draws_every_cause() {
        let categories = expat_failure();
        let svg = FishboneTemplate::new("Expat Failure", &categories)
            .render("Reasons for Expatriate Failure")
            .unwrap()
            .to_svg();
        for category in &categories {
            assert!(svg.contains(&category.name));
            for cause in &category.causes {
                assert!(svg.contains(cause.as_str()), "missing cause {}", cause);
            }
        }
        // spine, 4 branches, 8 cause leaders
        assert_eq!(svg.matches("<line").count(), 13);
    }

    #[test]
    fn test_categories_without_causes() {
        let categories: Vec<FishboneCategory> = ["Poor Selection", "Family Issues"]
            .iter()
            .map(|name| FishboneCategory::new(*name, &[]))
            .collect();
        let svg = FishboneTemplate::new("Expat Failure", &categories)
            .render("t")
            .unwrap()
            .to_svg();
        assert_eq!(svg.matches("<line").count(), 3);
    }

    #[test]
    fn test_too_many_categories_fail() {
        let categories: Vec<FishboneCategory> = (0..5)
            .map(|i| FishboneCategory::new(format!("c{}", i), &[]))
            .collect();
        let err = FishboneTemplate::new("x", &categories).render("t").unwrap_err();
        assert!(err.is_record_scoped());
    }
}
