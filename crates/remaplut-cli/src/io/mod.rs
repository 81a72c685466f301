// crates/remaplut-cli/src/io/mod.rs

pub mod lut_file;
