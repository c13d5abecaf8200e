//! One-off composite diagrams, looked up by identifier
//!
//! Each routine draws a fixed picture that fits none of the generic
//! templates. Records select one with `{"template": "composite", "id": ...}`.

use crate::core::{
    fill, pt, Anchor, ArrowHeads, Baseline, Bounds, LineStyle, ReportError, Result, Rgb,
    ShapeStyle, SvgCanvas, TextStyle, Viewport,
};
use crate::templates::{area_below, draw_title, square_in, Template, MARGIN};

/// A named drawing routine with its figure size in inches
pub struct CompositeRoutine {
    pub id: &'static str,
    pub size: (f64, f64),
    draw: fn(&str, &mut SvgCanvas),
}

const ROUTINES: &[CompositeRoutine] = &[
    CompositeRoutine {
        id: "total-rewards-taxation",
        size: (12.0, 6.0),
        draw: total_rewards_taxation,
    },
    CompositeRoutine {
        id: "hpws-to-hpo",
        size: (10.0, 5.0),
        draw: hpws_to_hpo,
    },
    CompositeRoutine {
        id: "employer-associations",
        size: (10.0, 7.0),
        draw: employer_associations,
    },
    CompositeRoutine {
        id: "ihrm-mind-map",
        size: (10.0, 8.0),
        draw: ihrm_mind_map,
    },
    CompositeRoutine {
        id: "culture-models",
        size: (12.0, 6.0),
        draw: culture_models,
    },
];

/// Find the routine registered under `id`
pub fn lookup(id: &str) -> Result<&'static CompositeRoutine> {
    ROUTINES
        .iter()
        .find(|routine| routine.id == id)
        .ok_or_else(|| ReportError::unsupported(format!("composite:{}", id)))
}

/// Every registered composite identifier
pub fn composite_ids() -> impl Iterator<Item = &'static str> {
    ROUTINES.iter().map(|routine| routine.id)
}

pub struct CompositeTemplate {
    routine: &'static CompositeRoutine,
}

impl CompositeTemplate {
    pub fn new(id: &str) -> Result<Self> {
        Ok(Self {
            routine: lookup(id)?,
        })
    }

    pub fn id(&self) -> &'static str {
        self.routine.id
    }
}

impl Template for CompositeTemplate {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn figure_size(&self) -> (f64, f64) {
        self.routine.size
    }

    fn draw(&self, title: &str, canvas: &mut SvgCanvas) -> Result<()> {
        (self.routine.draw)(title, canvas);
        Ok(())
    }
}

/// Split the area below `top` into two side-by-side panels
fn panels(canvas: &SvgCanvas, top: f64) -> (Bounds, Bounds) {
    let area = area_below(canvas, top);
    let half = (area.width - MARGIN) / 2.0;
    let left = Bounds {
        width: half,
        ..area
    };
    let right = Bounds {
        x: area.x + half + MARGIN,
        width: half,
        ..area
    };
    (left, right)
}

/// Draw a panel title and return the drawing area below it
fn panel(canvas: &mut SvgCanvas, region: Bounds, title: &str) -> Bounds {
    let style = TextStyle::new(pt(12.0)).baseline(Baseline::Top);
    canvas.text(region.x + region.width / 2.0, region.y, title, &style);
    let offset = style.size * 1.25 + pt(15.0);
    Bounds {
        y: region.y + offset,
        height: (region.height - offset).max(1.0),
        ..region
    }
}

fn total_rewards_taxation(title: &str, canvas: &mut SvgCanvas) {
    let region = canvas.bounds();
    let top = draw_title(canvas, region, title, 16.0);
    let (left, right) = panels(canvas, top);

    // Donut: two equal halves starting at twelve o'clock.
    let area = square_in(panel(canvas, left, "Total Rewards System"));
    let (cx, cy) = area.center();
    let outer = area.width / 2.0 * 0.8;
    let inner = outer * 0.7;
    let edge = ShapeStyle::filled(Rgb::WHITE).stroke(Some(Rgb::WHITE), 1.0);
    let halves = [
        ("Financial", Rgb::SALMON_PINK),
        ("Non-Financial", Rgb::CORNFLOWER),
    ];
    let label = TextStyle::new(pt(10.0));
    for (i, (name, color)) in halves.iter().enumerate() {
        let start = 90.0 + 180.0 * i as f64;
        let style = ShapeStyle {
            fill: Some(*color),
            ..edge
        };
        canvas.wedge((cx, cy), outer, inner, start, 180.0, &style);
        let mid = (start + 90.0).to_radians();
        let (px, py) = (cx + outer * 0.6 * mid.cos(), cy - outer * 0.6 * mid.sin());
        canvas.text(px, py, "50.0%", &label.baseline(Baseline::Center));
        let (lx, ly) = (cx + outer * 1.1 * mid.cos(), cy - outer * 1.1 * mid.sin());
        let anchor = if mid.cos() < 0.0 { Anchor::End } else { Anchor::Start };
        canvas.text(lx, ly, name, &label.anchor(anchor).baseline(Baseline::Center));
    }

    let view = Viewport::unit(panel(canvas, right, "Intl. Taxation Challenges"));
    let box_text = TextStyle::new(pt(10.0)).baseline(Baseline::Center);
    let pad = pt(4.0);
    let (hx, hy) = view.point(0.1, 0.6);
    canvas.label_box(hx, hy, "Home Country", &box_text, &ShapeStyle::filled(Rgb::LIGHT_GREEN), pad);
    let (gx, gy) = view.point(0.9, 0.6);
    canvas.label_box(gx, gy, "Host Country", &box_text, &ShapeStyle::filled(Rgb::LIGHT_BLUE), pad);
    canvas.arrow(
        view.point(0.3, 0.6),
        view.point(0.7, 0.6),
        &LineStyle::solid(Rgb::RED, 1.5),
        10.0,
        ArrowHeads::Both,
    );
    let (tx, ty) = view.point(0.5, 0.63);
    canvas.text(tx, ty, "Double Tax Liability", &TextStyle::new(pt(10.0)).baseline(Baseline::Bottom));
}

fn hpws_to_hpo(title: &str, canvas: &mut SvgCanvas) {
    let region = canvas.bounds();
    let top = draw_title(canvas, region, title, 16.0);
    let view = Viewport::unit(area_below(canvas, top));

    let text = TextStyle::new(pt(11.0)).baseline(Baseline::Center);
    let pad = pt(10.0);
    let (ix, iy) = view.point(0.2, 0.5);
    canvas.label_box(
        ix,
        iy,
        "Inputs (HPWS):\n• Selective Hiring\n• Empowerment\n• Info Sharing",
        &text,
        &ShapeStyle::filled(Rgb::LIGHT_BLUE).rounded(10.0),
        pad,
    );
    canvas.arrow(
        view.point(0.4, 0.5),
        view.point(0.7, 0.5),
        &LineStyle::solid(Rgb::BLACK, 4.0),
        24.0,
        ArrowHeads::End,
    );
    let (ox, oy) = view.point(0.8, 0.5);
    canvas.label_box(
        ox,
        oy,
        "Outcomes (HPO):\n• Superior Results\n• Adaptability\n• Innovation",
        &text,
        &ShapeStyle::filled(Rgb::LIGHT_GREEN).rounded(10.0),
        pad,
    );
}

fn employer_associations(title: &str, canvas: &mut SvgCanvas) {
    let region = canvas.bounds();
    let top = draw_title(canvas, region, title, 16.0);
    let view = Viewport::unit(area_below(canvas, top));

    let boxes = [
        (0.5, 0.1, "MNC", Rgb::GOLD),
        (0.2, 0.4, "Host Country Environment", Rgb::LIGHT_GREY),
        (0.8, 0.4, "National Employer\nAssociation", Rgb::LIGHT_GREY),
        (0.5, 0.7, "International Employer Association", Rgb::LIGHT_BLUE),
        (0.5, 0.9, "Supranational Bodies\n(EU, ILO, OECD)", Rgb::LIGHT_GREEN),
    ];
    let text = TextStyle::new(pt(11.0)).baseline(Baseline::Center);
    for (x, y, label, color) in boxes {
        let (px, py) = view.point(x, y);
        canvas.label_box(px, py, label, &text, &ShapeStyle::filled(color), pt(5.0));
    }
}

fn ihrm_mind_map(title: &str, canvas: &mut SvgCanvas) {
    let region = canvas.bounds();
    let top = draw_title(canvas, region, title, 16.0);
    let area = area_below(canvas, top);
    let view = Viewport::unit(Bounds {
        x: area.x + area.width * 0.08,
        width: area.width * 0.84,
        ..area
    });

    let branches = [
        (0.1, 0.8, "Trends:\n- Globalization\n- Tech", Rgb::LIGHT_BLUE),
        (0.9, 0.8, "Challenges:\n- Culture\n- Talent Mgt.", Rgb::LIGHT_CORAL),
        (0.5, 0.1, "Strategies:\n- Global Mindset\n- Leverage Tech", Rgb::LIGHT_GREEN),
    ];
    let center = view.point(0.5, 0.5);
    let connector = LineStyle::solid(Rgb::GREY, 1.0);
    for (x, y, _, _) in branches {
        let (px, py) = view.point(x, y);
        canvas.line(center.0, center.1, px, py, &connector);
    }

    let text = TextStyle::new(pt(11.0)).baseline(Baseline::Center);
    for (x, y, label, color) in branches {
        let (px, py) = view.point(x, y);
        canvas.label_box(px, py, label, &text, &ShapeStyle::filled(color), pt(5.0));
    }
    canvas.label_circle(
        center.0,
        center.1,
        "IHRM",
        &TextStyle::new(pt(14.0)).bold(),
        &ShapeStyle::filled(Rgb::GOLD),
        pt(10.0),
    );
}

fn culture_models(title: &str, canvas: &mut SvgCanvas) {
    let region = canvas.bounds();
    let top = draw_title(canvas, region, title, 16.0);
    let (left, right) = panels(canvas, top);

    // Onion layers are concentric around (0.5, 0.5); widen the range to fit r = 0.8.
    let onion = Viewport::new(
        square_in(panel(canvas, left, "Hofstede's Onion Model")),
        (-0.35, 1.35),
        (-0.35, 1.35),
    );
    let layers = [("Symbols", 0.8), ("Heroes", 0.6), ("Rituals", 0.4), ("Values", 0.2)];
    let (cx, cy) = onion.point(0.5, 0.5);
    let label = TextStyle::new(pt(10.0)).baseline(Baseline::Bottom);
    for (name, radius) in layers {
        canvas.circle(cx, cy, onion.dx(radius), &ShapeStyle::outline(Rgb::BLACK));
        let (lx, ly) = onion.point(0.5, 0.5 + radius - 0.1);
        canvas.text(lx, ly, name, &label);
    }

    let view = Viewport::unit(square_in(panel(canvas, right, "Convergence vs. Divergence")));
    let cultures = [(0.3, "Culture A", Rgb::LIGHT_BLUE), (0.7, "Culture B", Rgb::LIGHT_GREEN)];
    let centred = TextStyle::new(pt(10.0)).baseline(Baseline::Center);
    for (x, name, color) in cultures {
        let (px, py) = view.point(x, 0.5);
        let style = ShapeStyle::filled(color).opacity(0.6).stroke(None, 0.0);
        canvas.circle(px, py, view.dx(0.2), &style);
        canvas.text(px, py, &fill(name, 12), &centred);
    }
    let red = LineStyle::solid(Rgb::RED, 1.5);
    let head = view.dx(0.05);
    canvas.arrow(view.point(0.4, 0.7), view.point(0.6, 0.7), &red, head, ArrowHeads::End);
    canvas.arrow(view.point(0.6, 0.3), view.point(0.4, 0.3), &red, head, ArrowHeads::End);
    let (tx, ty) = view.point(0.5, 0.8);
    canvas.text(tx, ty, "Convergence", &TextStyle::new(pt(10.0)).baseline(Baseline::Bottom));
    let (bx, by) = view.point(0.5, 0.2);
    canvas.text(
        bx,
        by,
        "(Globalization)",
        &TextStyle::new(pt(10.0)).italic().baseline(Baseline::Top),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_routine_renders() {
        for id in composite_ids() {
            let template = CompositeTemplate::new(id).unwrap();
            let canvas = template.render("Diagram for Q1 (June 2023): Composite").unwrap();
            assert!(canvas.element_count() > 3, "{} drew too little", id);
            let (w, h) = template.figure_size();
            assert_eq!(canvas.width(), w * 100.0);
            assert_eq!(canvas.height(), h * 100.0);
        }
    }

    #[test]
    fn test_unknown_id_is_unsupported() {
        let err = CompositeTemplate::new("org-chart").err().unwrap();
        assert!(matches!(err, ReportError::UnsupportedRecipe { .. }));
        assert!(err.to_string().contains("composite:org-chart"));
    }

    #[test]
    fn test_onion_has_four_layers() {
        let svg = CompositeTemplate::new("culture-models")
            .unwrap()
            .render("Cultural Models & Dynamics")
            .unwrap()
            .to_svg();
        // four onion layers plus two cultures
        assert_eq!(svg.matches("<circle").count(), 6);
        assert!(svg.contains("Hofstede&apos;s Onion Model"));
    }

    #[test]
    fn test_donut_labels_both_halves() {
        let svg = CompositeTemplate::new("total-rewards-taxation")
            .unwrap()
            .render("Total Rewards & Taxation Challenges")
            .unwrap()
            .to_svg();
        assert_eq!(svg.matches(">50.0%</tspan>").count(), 2);
        assert!(svg.contains("Double Tax Liability"));
        assert!(svg.contains("fill=\"#ff9999\""));
    }
}
