//! Core building blocks shared by templates, charts and the document assembler

pub mod canvas;
mod error;
pub mod logging;
pub mod raster;
mod recipe;
mod record;
pub mod text;
mod types;
pub mod workspace;

pub use canvas::*;
pub use error::*;
pub use logging::*;
pub use raster::*;
pub use recipe::*;
pub use record::*;
pub use text::*;
pub use types::*;
pub use workspace::*;
