//! Whole-file compaction over the unit view.
//!
//! Files are visited once each, highest id first, and moved into the leftmost
//! free run that fits and lies entirely before them.

use crate::disk::Disk;
use crate::parser::FileId;
use tracing::{debug, trace};

/// Compact `disk` in place by moving whole files. Returns the number of files moved.
pub fn compact_files(disk: &mut Disk) -> usize {
    let ids = disk.file_ids();
    let mut moves = 0;
    for id in ids.into_iter().rev() {
        if relocate_file(disk, id) {
            moves += 1;
        }
    }
    debug!(units = disk.len(), moves, "file compaction finished");
    moves
}

/// Give file `id` its single turn. Returns true if it moved.
pub(crate) fn relocate_file(disk: &mut Disk, id: FileId) -> bool {
    let units = disk.units_mut();
    let Some(start) = units.iter().position(|u| *u == Some(id)) else { return false };
    let size = units[start..].iter().filter(|u| **u == Some(id)).count();

    let Some(target) = find_free_run(&units[..start], size) else { return false };

    for unit in units.iter_mut().filter(|u| **u == Some(id)) {
        *unit = None;
    }
    for unit in &mut units[target..target + size] {
        *unit = Some(id);
    }
    trace!(id, from = start, to = target, size, "moved file");
    true
}

/// Start of the leftmost run of at least `size` free units.
fn find_free_run<T>(units: &[Option<T>], size: usize) -> Option<usize> {
    let mut run = 0;
    for (i, unit) in units.iter().enumerate() {
        if unit.is_some() {
            run = 0;
            continue;
        }
        run += 1;
        if run == size {
            return Some(i + 1 - size);
        }
    }
    None
}
