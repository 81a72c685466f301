// crates/remaplut-core/src/stream/mod.rs

pub mod lines;
pub mod parser;

pub use lines::BoundedLines;
pub use parser::{DirectiveParser, ParseState, RunSummary, REMAP_MARKER};
