// crates/remaplut-core/src/remap/table.rs

use crate::alphabet::{index_to_symbol, symbol_to_index, BitIndex};
use crate::error::{RemapError, Result};
use crate::literal::OutputWidth;

pub const SLOTS: usize = 64;

/// Which input bit feeds each output bit.
///
/// Slot `i` holds the source bit for output bit `i`, or `None` when that
/// output bit is always 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemapTable {
    slots: [Option<BitIndex>; SLOTS],
}

impl Default for RemapTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RemapTable {
    /// Empty table: every output bit has no source.
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOTS],
        }
    }

    pub fn identity() -> Self {
        let mut t = Self::new();
        for (i, slot) in t.slots.iter_mut().enumerate() {
            *slot = BitIndex::new(i as u8);
        }
        t
    }

    #[inline]
    pub fn slot(&self, i: usize) -> Option<BitIndex> {
        self.slots[i]
    }

    #[inline]
    pub fn slots(&self) -> &[Option<BitIndex>; SLOTS] {
        &self.slots
    }

    /// Load a remap string captured from an input line.
    ///
    /// The last byte of `captured` is the line terminator and is not part of
    /// the mapping: byte `i` of the remaining `L-1` bytes lands in slot `L-2-i`.
    /// A line that reached end of input without a newline still loses its last
    /// byte, matching tables generated by earlier releases.
    pub fn load_line(&mut self, captured: &[u8]) -> Result<()> {
        check_len(captured.len())?;
        self.commit(&captured[..captured.len() - 1])
    }

    /// Load a remap string that carries no terminator (command line, API).
    ///
    /// Every byte is significant: byte `i` of `L` lands in slot `L-1-i`, so a
    /// 64-symbol string describes all 64 output bits.
    pub fn load_spec(&mut self, spec: &[u8]) -> Result<()> {
        check_len(spec.len())?;
        self.commit(spec)
    }

    /// Decode `symbols` (most significant output bit first) and overwrite the
    /// low `symbols.len()` slots. Nothing is written unless every symbol decodes.
    fn commit(&mut self, symbols: &[u8]) -> Result<()> {
        let mut decoded = [None; SLOTS];
        let n = symbols.len();
        for (i, &sym) in symbols.iter().enumerate() {
            decoded[n - 1 - i] = symbol_to_index(sym)?;
        }
        self.slots[..n].copy_from_slice(&decoded[..n]);
        Ok(())
    }

    /// Render the low `width` slots as a `//` comment, most significant first.
    pub fn echo(&self, width: OutputWidth) -> String {
        let bits = width.bits() as usize;
        let mut s = String::with_capacity(2 + bits);
        s.push_str("//");
        for i in (0..bits).rev() {
            s.push(index_to_symbol(self.slots[i]) as char);
        }
        s
    }

    #[inline]
    pub fn apply(&self, v: u64) -> u64 {
        super::apply::apply(self, v)
    }
}

fn check_len(len: usize) -> Result<()> {
    if len < 1 {
        return Err(RemapError::TooShort);
    }
    if len > SLOTS {
        return Err(RemapError::TooLong { len });
    }
    Ok(())
}
