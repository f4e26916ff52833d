//! Unit view of a disk: one cell per block, each holding a file id or free space.

use crate::parser::{FileId, Segment};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// Expanded disk. `None` marks a free unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Disk {
    units: Vec<Option<FileId>>,
}

impl Disk {
    /// Expand segments into units, repeating each id `size` times.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let len = segments.iter().map(|s| s.size).sum();
        let mut units = Vec::with_capacity(len);
        for seg in segments {
            units.extend(std::iter::repeat(seg.id).take(seg.size));
        }
        Self { units }
    }

    pub fn from_units(units: Vec<Option<FileId>>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[Option<FileId>] {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut [Option<FileId>] {
        &mut self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of units holding a file id.
    pub fn file_unit_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_some()).count()
    }

    /// Distinct file ids present on the disk, ascending.
    pub fn file_ids(&self) -> BTreeSet<FileId> {
        self.units.iter().flatten().copied().collect()
    }

    /// Index ranges occupied by `id`, one per maximal run.
    pub fn file_ranges(&self, id: FileId) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for (i, unit) in self.units.iter().enumerate() {
            if *unit != Some(id) {
                continue;
            }
            match ranges.last_mut() {
                Some(r) if r.end == i => r.end = i + 1,
                _ => ranges.push(i..i + 1),
            }
        }
        ranges
    }

    /// True when no free unit precedes a file unit.
    pub fn is_compact(&self) -> bool {
        match self.units.iter().position(|u| u.is_none()) {
            Some(first_free) => self.units[first_free..].iter().all(|u| u.is_none()),
            None => true,
        }
    }
}

/// Puzzle notation: `.` for free units, the id for single-digit ids, `#` otherwise.
impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            let c = match unit {
                None => '.',
                Some(id) if *id < 10 => char::from(b'0' + *id as u8),
                Some(_) => '#',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
