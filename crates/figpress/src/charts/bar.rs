//! Bar chart of percentages for multi-select questions

use crate::charts::{format_percent, ChartSummary};
use crate::core::{
    fill, measure_height, measure_width, pt, tab10, Anchor, Baseline, Bounds, LineStyle, Result,
    Rgb, ShapeStyle, SvgCanvas, TextStyle, Viewport,
};

pub const FIGURE_SIZE: (f64, f64) = (6.0, 4.0);

pub const Y_LABEL: &str = "Percentage of Respondents (%)";
/// Headroom above the tallest bar
const HEADROOM: f64 = 1.15;
/// Category label rotation, counter-clockwise
const LABEL_ROTATION: f64 = 20.0;
const LABEL_WRAP: usize = 18;
/// Fraction of each slot covered by its bar
const BAR_WIDTH: f64 = 0.8;
const MARGIN: f64 = 12.0;
const TICK: f64 = 4.0;

pub fn draw(summary: &ChartSummary) -> Result<SvgCanvas> {
    let mut canvas = SvgCanvas::from_inches(FIGURE_SIZE.0, FIGURE_SIZE.1);

    let percentages = summary.percentages();
    let tallest = percentages.iter().copied().fold(0.0, f64::max);
    let y_max = if tallest > 0.0 { tallest * HEADROOM } else { 1.0 };
    let step = tick_step(y_max);
    let ticks: Vec<f64> = (0..)
        .map(|i| i as f64 * step)
        .take_while(|value| *value <= y_max + step * 1e-9)
        .collect();

    let axis_label = TextStyle::new(pt(9.0)).rotate(-90.0);
    let tick_text = TextStyle::new(pt(8.0)).anchor(Anchor::End);
    let category_text = TextStyle::new(pt(8.0))
        .anchor(Anchor::End)
        .baseline(Baseline::Top)
        .rotate(-LABEL_ROTATION);
    let value_text = TextStyle::new(pt(8.0)).baseline(Baseline::Bottom);

    let labels: Vec<String> = summary
        .rows
        .iter()
        .map(|row| fill(&row.label, LABEL_WRAP))
        .collect();
    let tick_width = ticks
        .iter()
        .map(|value| measure_width(&format_tick(*value, step), tick_text.size))
        .fold(0.0, f64::max);
    let (sin, cos) = LABEL_ROTATION.to_radians().sin_cos();
    let label_drop = labels
        .iter()
        .map(|label| {
            measure_width(label, category_text.size) * sin
                + measure_height(label, category_text.size) * cos
        })
        .fold(0.0, f64::max);

    let left = MARGIN + axis_label.size * 1.5 + tick_width + TICK + 4.0;
    let plot = Bounds {
        x: left,
        y: MARGIN + value_text.size,
        width: canvas.width() - left - MARGIN,
        height: (canvas.height() - 2.0 * MARGIN - value_text.size - label_drop - TICK).max(1.0),
    };
    let slots = summary.rows.len().max(1) as f64;
    let view = Viewport::new(plot, (0.0, slots), (0.0, y_max));

    let grid = LineStyle::solid(Rgb::GREY, 0.8).dashed().opacity(0.6);
    let tick_line = LineStyle::solid(Rgb::BLACK, 0.8);
    for value in &ticks {
        let y = view.y(*value);
        canvas.line(plot.x, y, plot.right(), y, &grid);
        canvas.line(plot.x - TICK, y, plot.x, y, &tick_line);
        canvas.text(
            plot.x - TICK - 2.0,
            y,
            &format_tick(*value, step),
            &tick_text.baseline(Baseline::Center),
        );
    }

    for (i, (row, label)) in summary.rows.iter().zip(&labels).enumerate() {
        let center = i as f64 + 0.5;
        let x0 = view.x(center - BAR_WIDTH / 2.0);
        let top = view.y(row.percentage);
        let bar = Bounds {
            x: x0,
            y: top,
            width: view.dx(BAR_WIDTH),
            height: plot.bottom() - top,
        };
        canvas.rect(bar, &ShapeStyle::filled(tab10(i)).stroke(None, 0.0));

        let x = view.x(center);
        canvas.text(x, top - 1.0, &format_percent(row.percentage), &value_text);
        canvas.line(x, plot.bottom(), x, plot.bottom() + TICK, &tick_line);
        canvas.text(x, plot.bottom() + TICK + 2.0, label, &category_text);
    }

    canvas.rect(plot, &ShapeStyle::outline(Rgb::BLACK).stroke(Some(Rgb::BLACK), 0.8));
    canvas.text(
        MARGIN + axis_label.size * 0.6,
        plot.y + plot.height / 2.0,
        Y_LABEL,
        &axis_label,
    );
    Ok(canvas)
}

/// Round step giving roughly five intervals up to `max`
fn tick_step(max: f64) -> f64 {
    let raw = max / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let nice = match raw / magnitude {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 2.5 => 2.5,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    };
    nice * magnitude
}

fn format_tick(value: f64, step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
