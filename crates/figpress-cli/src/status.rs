//! Per-record progress lines
//!
//! Colours come from crossterm and are only applied when stdout is a
//! terminal and `NO_COLOR` is unset.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

use figpress::document::RenderOutcome;
use figpress::Record;

/// Mark printed in front of a record's progress line
pub fn marker(outcome: &RenderOutcome) -> (&'static str, Color) {
    match outcome {
        RenderOutcome::Rendered(_) => ("✓", Color::Green),
        RenderOutcome::Failed(_) => ("✗", Color::Red),
        RenderOutcome::Skipped => ("·", Color::DarkGrey),
    }
}

/// One progress line, e.g. `✓ Q3 (June 2023) flowchart`
pub fn progress_line(record: &Record, outcome: &RenderOutcome, color: bool) -> String {
    let (mark, tint) = marker(outcome);
    let mark = if color {
        mark.with(tint).bold().to_string()
    } else {
        mark.to_string()
    };
    let kind = record
        .recipe
        .as_ref()
        .map(|recipe| recipe.kind())
        .unwrap_or_else(|| "text only".to_string());
    match outcome {
        RenderOutcome::Failed(error) => format!("{} {} {}: {}", mark, record.key, kind, error),
        _ => format!("{} {} {}", mark, record.key, kind),
    }
}

/// Whether progress output should be coloured
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
}
