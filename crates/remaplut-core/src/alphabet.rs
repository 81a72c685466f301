// crates/remaplut-core/src/alphabet.rs
//
// Symbol alphabet used by remap strings: one symbol per source bit (0..=63)
// plus '-' for "no source bit".

use crate::error::{RemapError, Result};

pub const ALPHABET: &[u8; 65] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/-";

/// Symbol printed for an output bit with no source.
pub const NO_SOURCE_SYMBOL: u8 = b'-';

/// Index of a source bit inside a 64-bit input value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitIndex(u8);

impl BitIndex {
    pub const MAX: u8 = 63;

    pub const fn new(i: u8) -> Option<Self> {
        if i <= Self::MAX {
            Some(Self(i))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Decode one remap symbol. `'-'` decodes to `None`.
pub fn symbol_to_index(symbol: u8) -> Result<Option<BitIndex>> {
    let idx = match symbol {
        b'0'..=b'9' => symbol - b'0',
        b'A'..=b'Z' => symbol - b'A' + 10,
        b'a'..=b'z' => symbol - b'a' + 36,
        b'+' => 62,
        b'/' => 63,
        NO_SOURCE_SYMBOL => return Ok(None),
        _ => return Err(RemapError::InvalidSymbol { symbol }),
    };
    Ok(BitIndex::new(idx))
}

#[inline]
pub fn index_to_symbol(slot: Option<BitIndex>) -> u8 {
    match slot {
        Some(b) => ALPHABET[b.get() as usize],
        None => NO_SOURCE_SYMBOL,
    }
}
