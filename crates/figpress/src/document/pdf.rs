//! PDF output through genpdf
//!
//! genpdf lays out text with a TrueType family and embeds it in the PDF. The
//! family comes either from a directory of `{name}-Regular.ttf`-style files or
//! from the system font database.

use std::path::{Path, PathBuf};

use genpdf::elements::{Break, FrameCellDecorator, Image, PageBreak, Paragraph, TableLayout};
use genpdf::fonts::{self, FontData, FontFamily};
use genpdf::{style, Alignment, Element as _, Margins, Mm, PaperSize, SimplePageDecorator};
use tracing::{debug, info, span, Level};
use usvg::fontdb;

use crate::core::{ReportError, Result, Rgb, SANS_CANDIDATES};
use crate::document::story::{DataTable, Flowable, ImageBlock, Story};
use crate::document::styles::{DocumentStyles, ParagraphStyle};

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;

/// Turns a story into a file
pub trait DocumentWriter {
    fn write(&mut self, story: &Story, title: &str, path: &Path) -> Result<()>;
}

impl<W: DocumentWriter + ?Sized> DocumentWriter for &mut W {
    fn write(&mut self, story: &Story, title: &str, path: &Path) -> Result<()> {
        (**self).write(story, title, path)
    }
}

/// Where the writer gets its font metrics from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// `{dir}/{name}-Regular.ttf`, `-Bold`, `-Italic` and `-BoldItalic`
    Directory { dir: PathBuf, name: String },
    /// Best sans-serif family in the system font database
    System,
}

/// genpdf-backed [`DocumentWriter`]
pub struct PdfWriter {
    styles: DocumentStyles,
    fonts: FontSource,
}

impl PdfWriter {
    pub fn new(styles: DocumentStyles, fonts: FontSource) -> Self {
        Self { styles, fonts }
    }

    pub fn styles(&self) -> &DocumentStyles {
        &self.styles
    }

    fn load_fonts(&self) -> Result<FontFamily<FontData>> {
        match &self.fonts {
            FontSource::Directory { dir, name } => {
                fonts::from_files(dir, name, None).map_err(|e| {
                    ReportError::assembly_failure(format!(
                        "cannot load font family {} from {}: {}",
                        name,
                        dir.display(),
                        e
                    ))
                })
            }
            FontSource::System => discover_system_family(),
        }
    }

    fn build(&self, story: &Story, title: &str) -> Result<genpdf::Document> {
        let mut doc = genpdf::Document::new(self.load_fonts()?);
        doc.set_title(title);
        doc.set_paper_size(PaperSize::A4);
        doc.set_font_size(self.styles.base_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::all(inches_to_mm(self.styles.margin)));
        doc.set_page_decorator(decorator);

        for flowable in story {
            match flowable {
                Flowable::Title { text } => self.paragraph(&mut doc, text, &self.styles.title),
                Flowable::GroupHeading { text } => {
                    self.paragraph(&mut doc, text, &self.styles.group_heading)
                }
                Flowable::QuestionHeading { text } => {
                    self.paragraph(&mut doc, text, &self.styles.question)
                }
                Flowable::Subheading { text } => {
                    self.paragraph(&mut doc, text, &self.styles.subheading)
                }
                Flowable::Paragraph { text } | Flowable::Placeholder { text } => {
                    self.paragraph(&mut doc, text, &self.styles.body)
                }
                Flowable::Bullet { text } => {
                    self.paragraph(&mut doc, &format!("• {}", text), &self.styles.body)
                }
                Flowable::Note { text } => self.paragraph(&mut doc, text, &self.styles.note),
                Flowable::Point { text } => self.paragraph(&mut doc, text, &self.styles.point),
                Flowable::SubPoint { text } => {
                    self.paragraph(&mut doc, &format!("• {}", text), &self.styles.sub_point)
                }
                Flowable::Trick { text } => self.paragraph(&mut doc, text, &self.styles.trick),
                Flowable::Suggestion { text } => {
                    self.paragraph(&mut doc, text, &self.styles.suggestion)
                }
                Flowable::Expand { text } => self.paragraph(&mut doc, text, &self.styles.expand),
                Flowable::Table(table) => doc.push(self.table(table)?),
                Flowable::Image(block) => doc.push(image(block)?),
                Flowable::Spacer { height } => {
                    doc.push(Break::new(self.lines(height * POINTS_PER_INCH)))
                }
                Flowable::PageBreak => doc.push(PageBreak::new()),
            }
        }
        Ok(doc)
    }

    fn paragraph(&self, doc: &mut genpdf::Document, text: &str, paragraph: &ParagraphStyle) {
        let mut element = Paragraph::default();
        if paragraph.centered {
            element.set_alignment(Alignment::Center);
        }
        element.push_styled(text.to_string(), pdf_style(paragraph));
        if paragraph.indent > 0.0 {
            let indent = inches_to_mm(paragraph.indent);
            doc.push(element.padded(Margins::trbl(0.0, 0.0, 0.0, indent)));
        } else {
            doc.push(element);
        }
        if paragraph.space_after > 0.0 {
            doc.push(Break::new(self.lines(paragraph.space_after)));
        }
    }

    fn table(&self, data: &DataTable) -> Result<TableLayout> {
        let mut table = TableLayout::new(self.styles.table_columns.clone());
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let header = pdf_style(&self.styles.table_header);
        let mut row = table.row();
        for cell in &data.header {
            row.push_element(cell_element(cell, header));
        }
        row.push().map_err(table_error)?;

        let last = data.rows.len().saturating_sub(1);
        for (i, cells) in data.rows.iter().enumerate() {
            let cell_style = if data.has_total && i == last {
                &self.styles.table_total
            } else {
                &self.styles.table_body
            };
            let mut row = table.row();
            for cell in cells {
                row.push_element(cell_element(cell, pdf_style(cell_style)));
            }
            row.push().map_err(table_error)?;
        }
        Ok(table)
    }

    /// Convert a height in points into genpdf break lines at the base size
    fn lines(&self, points: f64) -> f64 {
        points / (f64::from(self.styles.base_size) * 1.2)
    }
}

impl DocumentWriter for PdfWriter {
    fn write(&mut self, story: &Story, title: &str, path: &Path) -> Result<()> {
        let write_span = span!(Level::INFO, "write_pdf", path = %path.display());
        let _enter = write_span.enter();

        let doc = self.build(story, title)?;
        debug!(flowables = story.len(), "Document built");
        doc.render_to_file(path).map_err(|e| {
            ReportError::assembly_failure(format!("cannot write {}: {}", path.display(), e))
        })?;
        info!(pages = story.page_break_count() + 1, "PDF written");
        Ok(())
    }
}

fn pdf_style(paragraph: &ParagraphStyle) -> style::Style {
    let Rgb(r, g, b) = paragraph.color;
    let mut style = style::Style::new()
        .with_font_size(paragraph.size)
        .with_color(style::Color::Rgb(r, g, b));
    if paragraph.bold {
        style = style.bold();
    }
    if paragraph.italic {
        style = style.italic();
    }
    style
}

fn cell_element(text: &str, style: style::Style) -> impl genpdf::Element {
    let mut paragraph = Paragraph::default();
    paragraph.set_alignment(Alignment::Center);
    paragraph.push_styled(text.to_string(), style);
    paragraph.padded(1)
}

fn table_error(e: genpdf::error::Error) -> ReportError {
    ReportError::assembly_failure(format!("cannot lay out table: {}", e))
}

fn image(block: &ImageBlock) -> Result<Image> {
    let image = Image::from_path(&block.path).map_err(|e| {
        ReportError::assembly_failure(format!("cannot embed {}: {}", block.path.display(), e))
    })?;
    Ok(image
        .with_alignment(Alignment::Center)
        .with_dpi(block.display_dpi()))
}

fn inches_to_mm(inches: f64) -> Mm {
    Mm::from(inches * MM_PER_INCH)
}

/// Resolve a regular/bold/italic/bold-italic family from the system fonts
fn discover_system_family() -> Result<FontFamily<FontData>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let family = SANS_CANDIDATES
        .iter()
        .copied()
        .find(|name| face(&db, name, fontdb::Weight::NORMAL, fontdb::Style::Normal).is_some())
        .ok_or_else(|| {
            ReportError::assembly_failure(format!(
                "no sans-serif font found among {} system faces; pass a font directory",
                db.len()
            ))
        })?;
    debug!(family, "Using system font family for PDF metrics");

    let load = |weight, slant| -> Result<FontData> {
        let data = face(&db, family, weight, slant)
            .or_else(|| face(&db, family, fontdb::Weight::NORMAL, fontdb::Style::Normal))
            .ok_or_else(|| ReportError::assembly_failure(format!("font {} vanished", family)))?;
        FontData::new(data, None).map_err(|e| {
            ReportError::assembly_failure(format!("cannot parse font {}: {}", family, e))
        })
    };

    Ok(FontFamily {
        regular: load(fontdb::Weight::NORMAL, fontdb::Style::Normal)?,
        bold: load(fontdb::Weight::BOLD, fontdb::Style::Normal)?,
        italic: load(fontdb::Weight::NORMAL, fontdb::Style::Italic)?,
        bold_italic: load(fontdb::Weight::BOLD, fontdb::Style::Italic)?,
    })
}

fn face(
    db: &fontdb::Database,
    family: &str,
    weight: fontdb::Weight,
    slant: fontdb::Style,
) -> Option<Vec<u8>> {
    let families = [fontdb::Family::Name(family)];
    let query = fontdb::Query {
        families: &families,
        weight,
        style: slant,
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, _| data.to_vec())
}
