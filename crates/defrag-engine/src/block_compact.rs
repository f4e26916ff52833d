//! Block-by-block compaction: move the rightmost file unit into the leftmost
//! free unit until no free unit precedes a file unit.
//!
//! Units move one at a time, so a file may end up split across several runs.

use crate::config::Engine;
use crate::disk::Disk;
use tracing::debug;

/// Compact `disk` in place. Returns the number of relocated units.
pub fn compact_blocks(disk: &mut Disk, engine: Engine) -> usize {
    let moves = match engine {
        Engine::Scan => compact_by_scan(disk.units_mut()),
        Engine::Indexed => compact_by_cursors(disk.units_mut()),
    };
    debug!(%engine, units = disk.len(), moves, "block compaction finished");
    moves
}

/// Rescans from both ends for every move. Quadratic, kept as the reference.
fn compact_by_scan<T>(units: &mut [Option<T>]) -> usize {
    let mut moves = 0;
    loop {
        let Some(file) = units.iter().rposition(Option::is_some) else { break };
        let Some(free) = units.iter().position(Option::is_none) else { break };
        if free >= file {
            break;
        }
        units.swap(free, file);
        moves += 1;
    }
    moves
}

/// Two cursors that only ever move towards each other.
fn compact_by_cursors<T>(units: &mut [Option<T>]) -> usize {
    let mut moves = 0;
    let mut free = 0;
    // exclusive: the rightmost file unit candidate is `end - 1`
    let mut end = units.len();
    loop {
        while free < units.len() && units[free].is_some() {
            free += 1;
        }
        while end > 0 && units[end - 1].is_none() {
            end -= 1;
        }
        if end == 0 || free >= end - 1 {
            break;
        }
        units.swap(free, end - 1);
        moves += 1;
    }
    moves
}
