//! Shared text utilities for templates and charts

use unicode_width::UnicodeWidthStr;

/// Average glyph advance of a sans-serif face, as a fraction of the font size.
const AVERAGE_ADVANCE: f64 = 0.56;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.25;

/// Wrap text to fit within a maximum width, breaking on word boundaries.
///
/// Explicit newlines in `label` are kept; each authored line is wrapped on its
/// own. If `max_width` is 0 the authored lines are returned untouched.
///
/// # Example
/// ```
/// use figpress::core::wrap_label;
///
/// let lines = wrap_label("This is a long label", 10);
/// assert_eq!(lines, vec!["This is a", "long label"]);
/// ```
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for authored in label.split('\n') {
        lines.extend(wrap_line(authored, max_width));
    }
    lines
}

/// Wrap `label` and join the lines back with `\n`
pub fn fill(label: &str, max_width: usize) -> String {
    wrap_label(label, max_width).join("\n")
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || UnicodeWidthStr::width(line) <= max_width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);

        if current_width == 0 {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Estimated rendered width of the widest line of `text`, in canvas units.
pub fn measure_width(text: &str, font_size: f64) -> f64 {
    text.split('\n')
        .map(|line| UnicodeWidthStr::width(line) as f64)
        .fold(0.0, f64::max)
        * font_size
        * AVERAGE_ADVANCE
}

/// Rendered height of `text` (one line per `\n`-separated segment).
pub fn measure_height(text: &str, font_size: f64) -> f64 {
    text.split('\n').count() as f64 * font_size * LINE_HEIGHT
}

/// Escape the characters XML treats specially
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Lowercase, underscore-separated form of a label, safe for file names
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_label() {
        assert_eq!(wrap_label("Hello", 20), vec!["Hello"]);
    }

    #[test]
    fn test_wrap_long_label() {
        let result = wrap_label("This is a long label", 10);
        assert_eq!(result, vec!["This is a", "long label"]);
    }

    #[test]
    fn test_wrap_keeps_authored_newlines() {
        let result = wrap_label("Global Strategy\n(High Integration,\nLow Responsiveness)", 35);
        assert_eq!(
            result,
            vec!["Global Strategy", "(High Integration,", "Low Responsiveness)"]
        );
    }

    #[test]
    fn test_wrap_each_authored_line() {
        let result = wrap_label("Pre-Departure\n(Cultural, Language, Practical Training)", 18);
        assert_eq!(
            result,
            vec!["Pre-Departure", "(Cultural,", "Language,", "Practical", "Training)"]
        );
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_label("Hello World", 0), vec!["Hello World"]);
    }

    #[test]
    fn test_wrap_empty_label() {
        assert_eq!(wrap_label("", 10), vec![""]);
    }

    #[test]
    fn test_fill_joins_lines() {
        assert_eq!(fill("one two three four five", 8), "one two\nthree\nfour\nfive");
    }

    #[test]
    fn test_measure_uses_widest_line() {
        let narrow = measure_width("ab", 10.0);
        let wide = measure_width("ab\nabcd", 10.0);
        assert!(wide > narrow);
        assert_eq!(measure_height("a\nb\nc", 10.0), 37.5);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("Maslow's <needs> & \"wants\""),
            "Maslow&apos;s &lt;needs&gt; &amp; &quot;wants&quot;"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("June 2023"), "june_2023");
        assert_eq!(slugify("Section A: Demographic Profile"), "section_a_demographic_profile");
    }
}
