// crates/remaplut-core/src/literal.rs

use std::fmt;
use std::str::FromStr;

use crate::error::RemapError;

/// Prefix of a binary literal, both in input lines and emitted entries.
pub const BINARY_PREFIX: &str = "0b";

/// Number of low-order bits emitted per table entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputWidth {
    #[default]
    W8,
    W16,
    W32,
    W64,
}

impl OutputWidth {
    pub const fn bits(self) -> u32 {
        match self {
            OutputWidth::W8 => 8,
            OutputWidth::W16 => 16,
            OutputWidth::W32 => 32,
            OutputWidth::W64 => 64,
        }
    }

    pub const fn mask(self) -> u64 {
        match self {
            OutputWidth::W64 => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(OutputWidth::W8),
            16 => Some(OutputWidth::W16),
            32 => Some(OutputWidth::W32),
            64 => Some(OutputWidth::W64),
            _ => None,
        }
    }
}

impl fmt::Display for OutputWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl FromStr for OutputWidth {
    type Err = RemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(OutputWidth::from_bits)
            .ok_or_else(|| RemapError::InvalidWidth(s.to_string()))
    }
}

/// `width` binary digits of `v`, most significant first, no prefix.
pub fn format_binary(v: u64, width: OutputWidth) -> String {
    (0..width.bits())
        .rev()
        .map(|i| if (v >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// `0b` followed by `format_binary`.
pub fn format_literal(v: u64, width: OutputWidth) -> String {
    let mut s = String::with_capacity(BINARY_PREFIX.len() + width.bits() as usize);
    s.push_str(BINARY_PREFIX);
    s.push_str(&format_binary(v, width));
    s
}

/// Accumulate the leading run of `'0'`/`'1'` bytes, most significant first.
///
/// Returns the value and the number of digits consumed. Runs longer than 64
/// digits keep only the low 64 bits; an empty run yields 0.
pub fn parse_binary_run(digits: &[u8]) -> (u64, usize) {
    let mut v = 0u64;
    let mut n = 0usize;
    for &d in digits {
        match d {
            b'0' => v <<= 1,
            b'1' => v = (v << 1) | 1,
            _ => break,
        }
        n += 1;
    }
    (v, n)
}
