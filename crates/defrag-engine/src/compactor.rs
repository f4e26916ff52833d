//! Compactor facade: parse, compact with the configured engine, checksum.

use crate::block_compact::compact_blocks;
use crate::checksum::checksum;
use crate::config::{CompactorConfig, Engine, Strategy};
use crate::disk::Disk;
use crate::error::Result;
use crate::file_compact::compact_files;
use crate::parser::{parse_disk_map, Segment};
use crate::run_index::RunIndex;
use tracing::debug;

/// Compaction result with statistics.
#[derive(Debug, Clone)]
pub struct CompactionReport {
    pub strategy: Strategy,
    pub engine: Engine,
    pub checksum: u64,
    pub disk_len: usize,
    pub file_units: usize,
    /// Units moved for `Strategy::Blocks`, files moved for `Strategy::Files`.
    pub moves: usize,
    /// Final layout.
    pub disk: Disk,
}

impl CompactionReport {
    pub fn free_units(&self) -> usize {
        self.disk_len - self.file_units
    }
}

/// Stateless apart from its configuration; one instance can serve any input.
#[derive(Debug, Clone, Default)]
pub struct Compactor {
    pub config: CompactorConfig,
}

impl Compactor {
    pub fn new(config: CompactorConfig) -> Self {
        Self { config }
    }

    pub fn scan() -> Self {
        Self::new(CompactorConfig::default().with_engine(Engine::Scan))
    }

    pub fn indexed() -> Self {
        Self::new(CompactorConfig::default().with_engine(Engine::Indexed))
    }

    /// Parse a disk map and compact it. Fails before any work on a non-digit.
    pub fn compact(&self, input: &str, strategy: Strategy) -> Result<CompactionReport> {
        let segments = parse_disk_map(input)?;
        Ok(self.compact_segments(&segments, strategy))
    }

    /// Compact already parsed segments.
    pub fn compact_segments(&self, segments: &[Segment], strategy: Strategy) -> CompactionReport {
        let engine = self.config.engine;

        let (disk, moves, sum) = match (strategy, engine) {
            (Strategy::Files, Engine::Indexed) => {
                let mut index = RunIndex::from_segments(segments);
                let moves = index.compact_files();
                (index.to_disk(), moves, index.checksum())
            }
            (Strategy::Files, Engine::Scan) => {
                let mut disk = Disk::from_segments(segments);
                let moves = compact_files(&mut disk);
                let sum = checksum(disk.units());
                (disk, moves, sum)
            }
            (Strategy::Blocks, engine) => {
                let mut disk = Disk::from_segments(segments);
                let moves = compact_blocks(&mut disk, engine);
                let sum = checksum(disk.units());
                (disk, moves, sum)
            }
        };

        debug!(%strategy, %engine, checksum = sum, moves, "compaction done");

        CompactionReport {
            strategy,
            engine,
            checksum: sum,
            disk_len: disk.len(),
            file_units: disk.file_unit_count(),
            moves,
            disk,
        }
    }
}
