//! defrag: compact a disk map and print its checksums.

use anyhow::{Context, Result};
use clap::Parser;
use defrag_engine::{Compactor, CompactorConfig, Engine, Strategy};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "defrag")]
#[command(version, about = "Compact a disk map and print filesystem checksums")]
struct Cli {
    /// Disk map file; stdin when omitted or "-"
    path: Option<PathBuf>,

    /// Compaction engine (scan, indexed)
    #[arg(short, long)]
    engine: Option<Engine>,

    /// Run a single part (1 = blocks, 2 = files)
    #[arg(short, long)]
    part: Option<Strategy>,

    /// JSON config file, e.g. {"engine": "scan"}
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the compacted layout after each checksum
    #[arg(long)]
    show: bool,
}

fn load_config(cli: &Cli) -> Result<CompactorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            CompactorConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => CompactorConfig::default(),
    };
    if let Some(engine) = cli.engine {
        config.engine = engine;
    }
    Ok(config)
}

fn read_disk_map(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("reading disk map {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading disk map from stdin")?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}

/// Output lines for `input`, one `partN: checksum` per strategy.
fn run(cli: &Cli, config: CompactorConfig, input: &str) -> Result<Vec<String>> {
    let compactor = Compactor::new(config);
    let strategies = match cli.part {
        Some(strategy) => vec![strategy],
        None => Strategy::all().to_vec(),
    };

    let mut lines = Vec::new();
    for strategy in strategies {
        let report = compactor.compact(input, strategy)?;
        info!(
            %strategy,
            engine = %report.engine,
            units = report.disk_len,
            moves = report.moves,
            "compacted"
        );
        lines.push(format!("part{}: {}", strategy.part(), report.checksum));
        if cli.show {
            lines.push(report.disk.to_string());
        }
    }
    Ok(lines)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let input = read_disk_map(cli.path.as_deref())?;

    for line in run(&cli, config, &input)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests;
