// crates/remaplut-core/src/remap/apply.rs

use super::table::RemapTable;

/// Gather bits of `v` according to `table`.
///
/// Output bit `i` takes input bit `table[i]`; slots without a source read as 0.
/// Several outputs may share one input bit and unreferenced input bits are
/// dropped, so this is a general bit gather rather than a strict permutation.
pub fn apply(table: &RemapTable, v: u64) -> u64 {
    let mut o = 0u64;
    for (i, slot) in table.slots().iter().enumerate() {
        if let Some(src) = slot {
            o |= ((v >> src.get()) & 1) << i;
        }
    }
    o
}
