pub mod error;

pub mod alphabet;
pub mod config;
pub mod literal;
pub mod remap;
pub mod stream;

pub use crate::config::GenConfig;
pub use crate::error::{RemapError, Result};
pub use crate::literal::OutputWidth;
pub use crate::remap::RemapTable;
pub use crate::stream::DirectiveParser;
