use crate::error::{CompactorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a compaction is carried out. Both engines yield identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Repeated scans over the unit view.
    Scan,
    /// Monotonic cursors for blocks, a run index for whole files.
    #[default]
    Indexed,
}

/// What gets moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Single units, rightmost first.
    Blocks,
    /// Whole files, highest id first.
    Files,
}

impl Strategy {
    pub fn all() -> [Strategy; 2] {
        [Strategy::Blocks, Strategy::Files]
    }

    /// Puzzle part number (1 for blocks, 2 for files).
    pub fn part(&self) -> u8 {
        match self {
            Self::Blocks => 1,
            Self::Files => 2,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scan => "scan",
            Self::Indexed => "indexed",
        })
    }
}

impl FromStr for Engine {
    type Err = CompactorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(Self::Scan),
            "indexed" => Ok(Self::Indexed),
            other => Err(CompactorError::Config(format!("unknown engine: {other}"))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blocks => "blocks",
            Self::Files => "files",
        })
    }
}

impl FromStr for Strategy {
    type Err = CompactorError;

    /// Accepts the strategy name or its part number.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocks" | "1" => Ok(Self::Blocks),
            "files" | "2" => Ok(Self::Files),
            other => Err(CompactorError::Config(format!("unknown strategy: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactorConfig {
    #[serde(default)]
    pub engine: Engine,
}

impl CompactorConfig {
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Load from a JSON document such as `{"engine": "scan"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
