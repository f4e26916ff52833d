//! Disk map parsing: one digit per segment, alternating file and free space.

use crate::error::{CompactorError, Result};

/// File identifier. Ids are assigned in input order starting at 0.
pub type FileId = usize;

/// Raw id used for free space in the flat `(id, size)` notation.
pub const FREE_ID: i64 = -1;

/// A parsed `(id, size)` pair. `id` is `None` for free space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: Option<FileId>,
    pub size: usize,
}

impl Segment {
    pub fn file(id: FileId, size: usize) -> Self {
        Self { id: Some(id), size }
    }

    pub fn free(size: usize) -> Self {
        Self { id: None, size }
    }

    pub fn is_free(&self) -> bool {
        self.id.is_none()
    }

    /// Id in the flat notation, `FREE_ID` for free space.
    pub fn raw_id(&self) -> i64 {
        self.id.map_or(FREE_ID, |id| id as i64)
    }
}

/// Parse a disk map into segments.
///
/// Even positions are files (id = position / 2), odd positions are free space.
/// The input is taken as-is; callers are expected to trim line endings.
pub fn parse_disk_map(input: &str) -> Result<Vec<Segment>> {
    input
        .char_indices()
        .enumerate()
        .map(|(i, (position, c))| {
            let size = c
                .to_digit(10)
                .ok_or(CompactorError::InvalidInput { position, found: c })? as usize;
            Ok(if i % 2 == 0 {
                Segment::file(i / 2, size)
            } else {
                Segment::free(size)
            })
        })
        .collect()
}
