//! Vector canvas shared by every template and chart
//!
//! Shapes are appended to an SVG body in drawing order; later shapes paint
//! over earlier ones. Coordinates are canvas units with the origin at the top
//! left, [`UNITS_PER_INCH`] units to the inch.

use std::fmt::{self, Write as _};

use crate::core::text::{escape_xml, measure_height, measure_width, LINE_HEIGHT};
use crate::core::types::{Anchor, ArrowHeads, Baseline, LineStyle, Rgb, ShapeStyle, TextStyle};

/// Canvas units per inch of figure size
pub const UNITS_PER_INCH: f64 = 100.0;

/// Convert a typographic point size into canvas units
pub fn pt(points: f64) -> f64 {
    points * UNITS_PER_INCH / 72.0
}

const FONT_FAMILY: &str = "Helvetica, Arial, 'DejaVu Sans', 'Liberation Sans', sans-serif";

/// Ascent of a line's first glyph row as a fraction of the font size
const ASCENT: f64 = 0.78;

/// Axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Maps data coordinates (y growing upward) onto a rectangle of the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Bounds,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Viewport {
    /// Viewport over `area` with unit ranges on both axes
    pub fn unit(area: Bounds) -> Self {
        Self::new(area, (0.0, 1.0), (0.0, 1.0))
    }

    pub fn new(area: Bounds, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            area,
            x_range,
            y_range,
        }
    }

    pub fn x(&self, value: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.area.x + (value - lo) / (hi - lo) * self.area.width
    }

    pub fn y(&self, value: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.area.bottom() - (value - lo) / (hi - lo) * self.area.height
    }

    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x(x), self.y(y))
    }

    /// Horizontal data distance converted to canvas units
    pub fn dx(&self, distance: f64) -> f64 {
        distance / (self.x_range.1 - self.x_range.0) * self.area.width
    }

    /// Vertical data distance converted to canvas units
    pub fn dy(&self, distance: f64) -> f64 {
        distance / (self.y_range.1 - self.y_range.0) * self.area.height
    }
}

/// SVG canvas for diagram and chart rendering
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    background: Rgb,
    body: String,
    elements: usize,
}

impl SvgCanvas {
    /// Create a new canvas with the specified dimensions in canvas units
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            background: Rgb::WHITE,
            body: String::new(),
            elements: 0,
        }
    }

    /// Create a canvas sized like a figure of `width` x `height` inches
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self::new(width * UNITS_PER_INCH, height * UNITS_PER_INCH)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of shapes and text blocks drawn so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
        }
    }

    /// Draw a rectangle, rounded when the style has a corner radius
    pub fn rect(&mut self, bounds: Bounds, style: &ShapeStyle) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
            bounds.x,
            bounds.y,
            bounds.width.max(0.0),
            bounds.height.max(0.0)
        );
        if style.corner_radius > 0.0 {
            let _ = write!(self.body, r#" rx="{:.2}""#, style.corner_radius);
        }
        self.push_shape_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &ShapeStyle) {
        let _ = write!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}""#,
            cx,
            cy,
            radius.max(0.0)
        );
        self.push_shape_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    /// Closed polygon through `points`
    pub fn polygon(&mut self, points: &[(f64, f64)], style: &ShapeStyle) {
        if points.len() < 3 {
            return;
        }
        self.body.push_str(r#"<polygon points=""#);
        self.push_points(points);
        self.body.push('"');
        self.push_shape_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
            x1, y1, x2, y2
        );
        self.push_line_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    /// Open path through `points`
    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        self.body.push_str(r#"<polyline points=""#);
        self.push_points(points);
        self.body.push_str(r#"" fill="none""#);
        self.push_line_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    /// Straight arrow from `from` to `to`, heads of length `head` included
    pub fn arrow(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        style: &LineStyle,
        head: f64,
        heads: ArrowHeads,
    ) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f64::EPSILON {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        let head = head.min(length / 2.0);
        let start = match heads {
            ArrowHeads::Both => (from.0 + ux * head, from.1 + uy * head),
            ArrowHeads::End => from,
        };
        let end = (to.0 - ux * head, to.1 - uy * head);
        self.line(start.0, start.1, end.0, end.1, style);

        let head_style = ShapeStyle::filled(style.color).stroke(None, 0.0);
        self.polygon(&arrow_head(to, (ux, uy), head), &head_style);
        if heads == ArrowHeads::Both {
            self.polygon(&arrow_head(from, (-ux, -uy), head), &head_style);
        }
    }

    /// Annular sector centred on (`cx`, `cy`).
    ///
    /// Angles are in degrees, counter-clockwise from three o'clock. An
    /// `inner_radius` of zero draws a plain pie wedge.
    pub fn wedge(
        &mut self,
        center: (f64, f64),
        outer_radius: f64,
        inner_radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        style: &ShapeStyle,
    ) {
        if sweep_deg <= 0.0 {
            return;
        }
        if sweep_deg >= 359.99 {
            let half = sweep_deg / 2.0;
            self.wedge(center, outer_radius, inner_radius, start_deg, half, style);
            self.wedge(center, outer_radius, inner_radius, start_deg + half, half, style);
            return;
        }

        let end_deg = start_deg + sweep_deg;
        let large_arc = if sweep_deg > 180.0 { 1 } else { 0 };
        let polar = |radius: f64, deg: f64| {
            let rad = deg.to_radians();
            (center.0 + radius * rad.cos(), center.1 - radius * rad.sin())
        };

        let outer_start = polar(outer_radius, start_deg);
        let outer_end = polar(outer_radius, end_deg);
        let mut d = format!(
            "M {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2}",
            outer_start.0, outer_start.1, outer_radius, outer_radius, large_arc, outer_end.0, outer_end.1
        );
        if inner_radius > 0.0 {
            let inner_end = polar(inner_radius, end_deg);
            let inner_start = polar(inner_radius, start_deg);
            let _ = write!(
                d,
                " L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
                inner_end.0, inner_end.1, inner_radius, inner_radius, large_arc, inner_start.0, inner_start.1
            );
        } else {
            let _ = write!(d, " L {:.2} {:.2} Z", center.0, center.1);
        }

        let _ = write!(self.body, r#"<path d="{}""#, d);
        self.push_shape_style(style);
        self.body.push_str("/>\n");
        self.elements += 1;
    }

    /// Draw a (possibly multi-line) text block anchored at (`x`, `y`)
    pub fn text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let line_height = style.size * LINE_HEIGHT;
        let top = block_top(y, measure_height(text, style.size), style.baseline);

        let _ = write!(
            self.body,
            r#"<text font-family="{}" font-size="{:.2}" fill="{}" text-anchor="{}""#,
            FONT_FAMILY,
            style.size,
            style.color,
            style.anchor.as_svg()
        );
        if style.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        if style.italic {
            self.body.push_str(r#" font-style="italic""#);
        }
        if style.rotate != 0.0 {
            let _ = write!(
                self.body,
                r#" transform="rotate({:.2} {:.2} {:.2})""#,
                style.rotate, x, y
            );
        }
        self.body.push('>');
        for (i, line) in text.split('\n').enumerate() {
            let baseline = top + i as f64 * line_height + style.size * ASCENT;
            let _ = write!(
                self.body,
                r#"<tspan x="{:.2}" y="{:.2}">{}</tspan>"#,
                x,
                baseline,
                escape_xml(line)
            );
        }
        self.body.push_str("</text>\n");
        self.elements += 1;
    }

    /// Draw a box sized to `text` with `pad` units of padding, then the text.
    ///
    /// The text's anchor and baseline decide where the box sits relative to
    /// (`x`, `y`). Returns the box bounds.
    pub fn label_box(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        text_style: &TextStyle,
        box_style: &ShapeStyle,
        pad: f64,
    ) -> Bounds {
        let bounds = text_bounds(x, y, text, text_style, pad);
        self.rect(bounds, box_style);
        self.text(x, y, text, text_style);
        bounds
    }

    /// Draw a circle enclosing `text`, centred on (`x`, `y`), then the text.
    ///
    /// Returns the radius.
    pub fn label_circle(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        text_style: &TextStyle,
        circle_style: &ShapeStyle,
        pad: f64,
    ) -> f64 {
        let w = measure_width(text, text_style.size);
        let h = measure_height(text, text_style.size);
        let radius = (w * w + h * h).sqrt() / 2.0 + pad;
        self.circle(x, y, radius, circle_style);
        let centered = text_style.anchor(Anchor::Middle).baseline(Baseline::Center);
        self.text(x, y, text, &centered);
        radius
    }

    /// Render the complete SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');
        let _ = writeln!(
            svg,
            r#"<rect x="0" y="0" width="{:.0}" height="{:.0}" fill="{}"/>"#,
            self.width, self.height, self.background
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn push_points(&mut self, points: &[(f64, f64)]) {
        for (i, (px, py)) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            let _ = write!(self.body, "{:.2},{:.2}", px, py);
        }
    }

    fn push_shape_style(&mut self, style: &ShapeStyle) {
        match style.fill {
            Some(fill) => {
                let _ = write!(self.body, r#" fill="{}""#, fill);
                if style.fill_opacity < 1.0 {
                    let _ = write!(self.body, r#" fill-opacity="{:.2}""#, style.fill_opacity);
                }
            }
            None => self.body.push_str(r#" fill="none""#),
        }
        match style.stroke {
            Some(stroke) if style.stroke_width > 0.0 => {
                let _ = write!(
                    self.body,
                    r#" stroke="{}" stroke-width="{:.2}""#,
                    stroke, style.stroke_width
                );
            }
            _ => {}
        }
    }

    fn push_line_style(&mut self, style: &LineStyle) {
        let _ = write!(
            self.body,
            r#" stroke="{}" stroke-width="{:.2}""#,
            style.color, style.width
        );
        if style.dashed {
            let _ = write!(
                self.body,
                r#" stroke-dasharray="{:.2} {:.2}""#,
                style.width * 4.0,
                style.width * 2.0
            );
        }
        if style.opacity < 1.0 {
            let _ = write!(self.body, r#" stroke-opacity="{:.2}""#, style.opacity);
        }
    }
}

impl fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

/// Bounds a text block would occupy, grown by `pad` on every side
pub fn text_bounds(x: f64, y: f64, text: &str, style: &TextStyle, pad: f64) -> Bounds {
    let w = measure_width(text, style.size);
    let h = measure_height(text, style.size);
    let left = match style.anchor {
        Anchor::Start => x,
        Anchor::Middle => x - w / 2.0,
        Anchor::End => x - w,
    };
    Bounds {
        x: left - pad,
        y: block_top(y, h, style.baseline) - pad,
        width: w + 2.0 * pad,
        height: h + 2.0 * pad,
    }
}

fn block_top(y: f64, height: f64, baseline: Baseline) -> f64 {
    match baseline {
        Baseline::Top => y,
        Baseline::Center => y - height / 2.0,
        Baseline::Bottom => y - height,
    }
}

fn arrow_head(tip: (f64, f64), direction: (f64, f64), length: f64) -> [(f64, f64); 3] {
    let (ux, uy) = direction;
    let half_width = length * 0.5;
    let base = (tip.0 - ux * length, tip.1 - uy * length);
    [
        tip,
        (base.0 - uy * half_width, base.1 + ux * half_width),
        (base.0 + uy * half_width, base.1 - ux * half_width),
    ]
}
