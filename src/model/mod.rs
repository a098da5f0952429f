//! Document model produced by the Markdown translator.
//!
//! A document is an ordered list of [`DocxElement`] blocks. Inline content is
//! flattened into [`TextRun`]s, each carrying its own formatting flags and an
//! optional link destination. The generator renders this model to WordprocessingML.

mod element;
mod json;
mod run;
mod table;

pub use element::*;
pub use json::*;
pub use run::*;
pub use table::*;
