// crates/remaplut-core/src/config.rs

use crate::error::{RemapError, Result};
use crate::literal::OutputWidth;

pub const DEFAULT_TABLE_NAME: &str = "remapped_lut";

/// Longest line content (excluding terminator) kept by the line reader.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Upper bound accepted for `max_line_len`.
pub const MAX_LINE_LEN_LIMIT: usize = 64 * 1024;

/// Settings for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    pub width: OutputWidth,
    pub table_name: String,
    /// Applied with the terminator-free grammar before any input is read.
    pub initial_remap: Option<String>,
    pub max_line_len: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: OutputWidth::default(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            initial_remap: None,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl GenConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_c_identifier(&self.table_name) {
            return Err(RemapError::InvalidTableName(self.table_name.clone()));
        }
        if self.max_line_len == 0 || self.max_line_len > MAX_LINE_LEN_LIMIT {
            return Err(RemapError::InvalidConfig(format!(
                "max_line_len must be in 1..={MAX_LINE_LEN_LIMIT}, got {}",
                self.max_line_len
            )));
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b == b'_' || b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
}
