//! Run index: whole-file compaction without expanding the disk.
//!
//! Files are kept as spans. Free space is bucketed by run length, and each
//! bucket is a min-heap of start offsets, so the leftmost run that fits a file
//! is the smallest head among buckets at least as long as the file.
//!
//! Space vacated by a moved file is never indexed again. Every file processed
//! later has a lower id, sits left of that space and can only move left.

use crate::checksum::span_checksum;
use crate::disk::Disk;
use crate::parser::{FileId, Segment};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Contiguous run of units owned by one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpan {
    pub id: FileId,
    pub start: usize,
    pub len: usize,
}

/// Contiguous run of free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeSpan {
    pub start: usize,
    pub len: usize,
}

type Bucket = BinaryHeap<Reverse<usize>>;

#[derive(Debug, Clone, Default)]
pub struct RunIndex {
    files: Vec<FileSpan>,
    free: Vec<Bucket>,
    disk_len: usize,
}

impl RunIndex {
    /// Build the index from parsed segments.
    ///
    /// Expects the layout produced by `parse_disk_map`: each id appears once
    /// and ids increase from left to right. Zero-size files are dropped and
    /// the free runs on either side of them are merged.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut index = Self::default();
        let mut pending: Option<FreeSpan> = None;
        let mut pos = 0;

        for seg in segments.iter().filter(|s| s.size > 0) {
            match seg.id {
                None => match pending.as_mut() {
                    Some(span) => span.len += seg.size,
                    None => pending = Some(FreeSpan { start: pos, len: seg.size }),
                },
                Some(id) => {
                    if let Some(span) = pending.take() {
                        push_free(&mut index.free, span);
                    }
                    index.files.push(FileSpan { id, start: pos, len: seg.size });
                }
            }
            pos += seg.size;
        }
        if let Some(span) = pending {
            push_free(&mut index.free, span);
        }
        index.disk_len = pos;
        index
    }

    /// File spans in original order.
    pub fn files(&self) -> &[FileSpan] {
        &self.files
    }

    pub fn disk_len(&self) -> usize {
        self.disk_len
    }

    pub fn file_unit_count(&self) -> usize {
        self.files.iter().map(|f| f.len).sum()
    }

    /// Move whole files, highest id first, into the leftmost free run that
    /// fits before them. Returns the number of files moved.
    pub fn compact_files(&mut self) -> usize {
        let mut moves = 0;
        for i in (0..self.files.len()).rev() {
            if self.relocate_file(i) {
                moves += 1;
            }
        }
        debug!(units = self.disk_len, moves, "indexed file compaction finished");
        moves
    }

    /// Give the file at position `i` of `files()` its single turn.
    /// Returns true if it moved.
    pub(crate) fn relocate_file(&mut self, i: usize) -> bool {
        let file = &mut self.files[i];
        let Some(start) = take_leftmost_fit(&mut self.free, file.len, file.start) else {
            return false;
        };
        trace!(id = file.id, from = file.start, to = start, size = file.len, "moved file");
        file.start = start;
        true
    }

    pub fn checksum(&self) -> u64 {
        self.files
            .iter()
            .map(|f| span_checksum(f.id, f.start, f.len))
            .sum()
    }

    /// Materialise the unit view.
    pub fn to_disk(&self) -> Disk {
        let mut units = vec![None; self.disk_len];
        for f in &self.files {
            for unit in &mut units[f.start..f.start + f.len] {
                *unit = Some(f.id);
            }
        }
        Disk::from_units(units)
    }
}

fn push_free(buckets: &mut Vec<Bucket>, span: FreeSpan) {
    if buckets.len() <= span.len {
        buckets.resize_with(span.len + 1, BinaryHeap::new);
    }
    buckets[span.len].push(Reverse(span.start));
}

/// Claim the leftmost free run of at least `size` units starting before
/// `before`. The unused tail goes back into the bucket for its new length.
fn take_leftmost_fit(buckets: &mut Vec<Bucket>, size: usize, before: usize) -> Option<usize> {
    let (start, len) = (size..buckets.len())
        .filter_map(|len| buckets[len].peek().map(|Reverse(start)| (*start, len)))
        .filter(|(start, _)| *start < before)
        .min()?;

    buckets[len].pop();
    if len > size {
        push_free(buckets, FreeSpan { start: start + size, len: len - size });
    }
    Some(start)
}
