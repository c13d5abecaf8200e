//! Document assembly: story building and file output

pub mod assembler;
pub mod pdf;
pub mod story;
pub mod styles;

pub use assembler::{
    fit_within, placeholder_text, Assembler, RenderOutcome, INTERPRETATION_HEADING,
};
pub use pdf::{DocumentWriter, FontSource, PdfWriter};
pub use story::{DataTable, Flowable, ImageBlock, Story};
pub use styles::{DocumentStyles, LayoutOptions, ParagraphStyle};
