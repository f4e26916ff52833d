//! Defrag engine: disk map compaction and checksums.
//!
//! A disk map is a digit string alternating file sizes and free-space sizes.
//! Two strategies compact it:
//! 1. Blocks: move single units from the end into the leftmost gap
//! 2. Files: move whole files, highest id first, into the leftmost gap that fits
//!
//! The result is reduced to a checksum: the sum of `position * file id`.

pub mod block_compact;
pub mod checksum;
pub mod compactor;
pub mod config;
pub mod disk;
pub mod error;
pub mod file_compact;
pub mod parser;
pub mod run_index;

pub use compactor::{CompactionReport, Compactor};
pub use config::{CompactorConfig, Engine, Strategy};
pub use disk::Disk;
pub use error::{CompactorError, Result};
pub use parser::{parse_disk_map, FileId, Segment, FREE_ID};
pub use run_index::RunIndex;

/// Checksum after block-by-block compaction.
pub fn checksum_part1(input: &str) -> Result<u64> {
    Ok(Compactor::default().compact(input, Strategy::Blocks)?.checksum)
}

/// Checksum after whole-file compaction.
pub fn checksum_part2(input: &str) -> Result<u64> {
    Ok(Compactor::default().compact(input, Strategy::Files)?.checksum)
}
