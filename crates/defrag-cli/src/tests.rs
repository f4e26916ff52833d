use crate::*;
use std::io::Write;
use tempfile::NamedTempFile;

const EXAMPLE: &str = "2333133121414131402";

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("defrag").chain(args.iter().copied()))
}

// ========== Arguments ==========

#[test]
fn test_args_defaults() {
    let c = cli(&[]);
    assert!(c.path.is_none());
    assert!(c.engine.is_none());
    assert!(c.part.is_none());
    assert!(!c.show);
}

#[test]
fn test_args_parse_engine_and_part() {
    let c = cli(&["input.txt", "--engine", "scan", "--part", "2"]);
    assert_eq!(c.path.as_deref(), Some(Path::new("input.txt")));
    assert_eq!(c.engine, Some(Engine::Scan));
    assert_eq!(c.part, Some(Strategy::Files));
}

#[test]
fn test_args_reject_unknown_engine() {
    let res = Cli::try_parse_from(["defrag", "--engine", "turbo"]);
    assert!(res.is_err());
}

// ========== Run ==========

#[test]
fn test_run_both_parts() {
    let c = cli(&[]);
    let lines = run(&c, CompactorConfig::default(), EXAMPLE).unwrap();
    assert_eq!(lines, vec!["part1: 1928", "part2: 2858"]);
}

#[test]
fn test_run_single_part_with_layout() {
    let c = cli(&["--part", "files", "--show", "--engine", "scan"]);
    let config = load_config(&c).unwrap();
    let lines = run(&c, config, EXAMPLE).unwrap();
    assert_eq!(
        lines,
        vec![
            "part2: 2858".to_string(),
            "00992111777.44.333....5555.6666.....8888..".to_string(),
        ]
    );
}

#[test]
fn test_run_invalid_input() {
    let c = cli(&[]);
    let err = run(&c, CompactorConfig::default(), "12x").unwrap_err();
    assert!(err.to_string().contains("position 2"));
}

// ========== Files ==========

#[test]
fn test_read_disk_map_trims() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "{EXAMPLE}").unwrap();
    assert_eq!(read_disk_map(Some(f.path())).unwrap(), EXAMPLE);
}

#[test]
fn test_read_disk_map_missing_file() {
    let err = read_disk_map(Some(Path::new("/nonexistent/disk.txt"))).unwrap_err();
    assert!(format!("{err:#}").contains("reading disk map"));
}

#[test]
fn test_config_file_with_override() {
    let mut f = NamedTempFile::new().unwrap();
    write!(f, r#"{{"engine": "scan"}}"#).unwrap();
    let path = f.path().to_str().unwrap().to_string();

    let config = load_config(&cli(&["--config", &path])).unwrap();
    assert_eq!(config.engine, Engine::Scan);

    let config = load_config(&cli(&["--config", &path, "--engine", "indexed"])).unwrap();
    assert_eq!(config.engine, Engine::Indexed);
}

#[test]
fn test_config_file_invalid() {
    let mut f = NamedTempFile::new().unwrap();
    write!(f, "not json").unwrap();
    let path = f.path().to_str().unwrap().to_string();
    assert!(load_config(&cli(&["--config", &path])).is_err());
}
