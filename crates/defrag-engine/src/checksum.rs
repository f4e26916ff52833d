//! Position-weighted checksum.

use crate::parser::FileId;

/// Sum of `position * id` over file units. Free units contribute nothing.
pub fn checksum(units: &[Option<FileId>]) -> u64 {
    units
        .iter()
        .enumerate()
        .filter_map(|(pos, unit)| unit.map(|id| pos as u64 * id as u64))
        .sum()
}

/// Checksum contribution of `len` contiguous units of `id` starting at `start`.
pub fn span_checksum(id: FileId, start: usize, len: usize) -> u64 {
    if len == 0 {
        return 0;
    }
    let (start, len) = (start as u64, len as u64);
    // start + (start + 1) + ... + (start + len - 1)
    let positions = len * start + len * (len - 1) / 2;
    positions * id as u64
}
