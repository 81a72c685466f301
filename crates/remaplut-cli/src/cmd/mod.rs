// crates/remaplut-cli/src/cmd/mod.rs

pub mod apply;
pub mod gen;
