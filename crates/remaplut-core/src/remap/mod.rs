// crates/remaplut-core/src/remap/mod.rs

pub mod apply;
pub mod table;

pub use apply::apply;
pub use table::{RemapTable, SLOTS};
