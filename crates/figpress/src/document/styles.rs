//! Paragraph styles and layout options for the report layouts
//!
//! Both are plain values built once per run and handed to the assembler and
//! the writer; nothing mutates them afterwards.

use serde::Serialize;

use crate::core::Rgb;

/// Width of an A4 page in inches
pub const A4_WIDTH: f64 = 210.0 / 25.4;
const CM: f64 = 1.0 / 2.54;

/// Appearance of one kind of paragraph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParagraphStyle {
    /// Font size in points
    pub size: u8,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
    /// Vertical space after the paragraph, in points
    pub space_after: f64,
    /// Left indent in inches
    pub indent: f64,
    pub centered: bool,
}

impl ParagraphStyle {
    pub fn new(size: u8) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            color: Rgb::BLACK,
            space_after: 6.0,
            indent: 0.0,
            centered: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = points;
        self
    }

    pub fn indent(mut self, inches: f64) -> Self {
        self.indent = inches;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Every style the writer needs, plus page geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStyles {
    /// Base font size in points
    pub base_size: u8,
    /// Page margin on every side, in inches
    pub margin: f64,
    pub title: ParagraphStyle,
    pub group_heading: ParagraphStyle,
    pub question: ParagraphStyle,
    pub subheading: ParagraphStyle,
    pub body: ParagraphStyle,
    pub note: ParagraphStyle,
    pub point: ParagraphStyle,
    pub sub_point: ParagraphStyle,
    pub trick: ParagraphStyle,
    pub suggestion: ParagraphStyle,
    pub expand: ParagraphStyle,
    pub table_header: ParagraphStyle,
    pub table_body: ParagraphStyle,
    pub table_total: ParagraphStyle,
    /// Relative column widths of chart data tables
    pub table_columns: Vec<usize>,
}

impl DocumentStyles {
    /// Exam solutions: slate headings, one-inch margins
    pub fn exam() -> Self {
        let heading = ParagraphStyle::new(18)
            .bold()
            .color(Rgb::SLATE)
            .space_after(14.0);
        Self {
            margin: 1.0,
            title: heading,
            group_heading: heading,
            question: ParagraphStyle::new(12)
                .bold()
                .color(Rgb::SLATE_LIGHT)
                .space_after(10.0),
            ..Self::common()
        }
    }

    /// Survey analysis: plain black headings, narrower margins
    pub fn survey() -> Self {
        Self {
            margin: 0.8,
            ..Self::common()
        }
    }

    /// Text-only solutions: coloured study aids, two-centimetre margins
    pub fn solutions() -> Self {
        let body = ParagraphStyle::new(12);
        let point = body.bold().indent(0.5 * CM).space_after(3.0);
        let aside = body.indent(0.5 * CM).space_after(8.5);
        let title = ParagraphStyle::new(18)
            .bold()
            .centered()
            .color(Rgb::NAVY)
            .space_after(14.0);
        Self {
            base_size: 12,
            margin: 2.0 * CM,
            title,
            group_heading: title,
            question: ParagraphStyle::new(14)
                .bold()
                .color(Rgb::STEEL_BLUE)
                .space_after(8.5),
            subheading: ParagraphStyle::new(13).bold().color(Rgb::DARK_SLATE_GREY),
            body,
            point,
            sub_point: point.indent(1.0 * CM),
            trick: aside.italic().color(Rgb::PURPLE),
            suggestion: aside.color(Rgb::DARK_GREEN),
            expand: body
                .bold()
                .italic()
                .color(Rgb::SIENNA)
                .space_after(11.0),
            ..Self::common()
        }
    }

    /// Width between the left and right margins, in inches
    pub fn frame_width(&self) -> f64 {
        A4_WIDTH - 2.0 * self.margin
    }

    fn common() -> Self {
        let body = ParagraphStyle::new(10);
        Self {
            base_size: 10,
            margin: 0.8,
            title: ParagraphStyle::new(16).bold().space_after(12.0),
            group_heading: ParagraphStyle::new(14).bold().space_after(10.0),
            question: ParagraphStyle::new(12).bold(),
            subheading: body.bold(),
            body,
            note: ParagraphStyle::new(9).italic().color(Rgb::GREY),
            point: body.bold().indent(0.2),
            sub_point: body.bold().indent(0.4),
            trick: body.italic(),
            suggestion: body.italic(),
            expand: body.bold().italic(),
            table_header: ParagraphStyle::new(10).bold(),
            table_body: ParagraphStyle::new(9),
            table_total: ParagraphStyle::new(9).bold(),
            // 2.8in, 1.4in and 1.3in
            table_columns: vec![28, 14, 13],
        }
    }
}

/// Structural choices that differ between the report layouts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutOptions {
    /// Emit `{prefix}{group}` before the first record of each group
    pub group_headings: Option<String>,
    /// Prefix prompts with `{sequence}. `
    pub numbered_prompts: bool,
    /// Put body blocks under an `Interpretation` heading
    pub interpretation_heading: bool,
    /// Box images are fitted into, in inches
    pub image_box: (f64, f64),
    /// Space after a group heading, in inches
    pub group_spacer: f64,
    /// Space between the prompt and what follows it, in inches
    pub prompt_spacer: f64,
    /// Space after tables, images and placeholders, in inches
    pub block_spacer: f64,
    /// Start every record after the first on a new page
    pub page_breaks: bool,
    /// Space between records when they share a page, in inches
    pub record_spacer: f64,
}

impl LayoutOptions {
    pub fn exam() -> Self {
        Self {
            group_headings: Some("Exam Solutions: ".to_string()),
            numbered_prompts: false,
            interpretation_heading: false,
            image_box: (7.0, 5.0),
            group_spacer: 0.5,
            prompt_spacer: 0.2,
            block_spacer: 0.0,
            page_breaks: true,
            record_spacer: 0.0,
        }
    }

    pub fn survey() -> Self {
        Self {
            group_headings: None,
            numbered_prompts: true,
            interpretation_heading: true,
            image_box: (4.5, 3.15),
            group_spacer: 0.0,
            prompt_spacer: 0.0,
            block_spacer: 0.3,
            page_breaks: true,
            record_spacer: 0.0,
        }
    }

    pub fn solutions() -> Self {
        Self {
            group_headings: None,
            numbered_prompts: true,
            interpretation_heading: false,
            image_box: (6.0, 4.5),
            group_spacer: 0.0,
            prompt_spacer: 0.0,
            block_spacer: 0.2,
            page_breaks: false,
            record_spacer: 0.5 * CM,
        }
    }

    /// Narrow the image box so images never overhang a `width`-inch frame
    pub fn within_frame(mut self, width: f64) -> Self {
        self.image_box.0 = self.image_box.0.min(width);
        self
    }
}
