//! Integration tests for config loading and its effect on output.

use piweb_path::PathFormat;
use piweb_path_cli::{Config, Error};

use crate::common::{config_file, parse, run_args};

#[test]
fn test_config_sets_default_format() {
    let file = config_file("[display]\nformat = \"full\"\n");
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.display.format, PathFormat::Full);

    let output = run_args(&["decode", "PC:/Engine/Bore/"], &config).unwrap();
    assert_eq!(output, "Bore (/Engine/Bore)");
}

#[test]
fn test_explicit_format_overrides_config() {
    let file = config_file("[display]\nformat = \"full\"\n");
    let config = Config::load(Some(file.path())).unwrap();
    let output = run_args(&["decode", "PC:/Engine/Bore/", "-f", "name"], &config).unwrap();
    assert_eq!(output, "Bore");
}

#[test]
fn test_config_without_root() {
    let file = config_file("[display]\nwith_root = false\n\n[logging]\nlevel = \"debug\"\n");
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.logging.level, "debug");

    let output = run_args(&["inspect", "PP:/Engine/Block/"], &config).unwrap();
    assert!(output.contains("path: Engine/Block"));
    assert!(output.contains("parent: Engine\n"));
}

#[test]
fn test_config_path_from_command_line() {
    let file = config_file("");
    let path = file.path().to_str().unwrap();
    let cli = parse(&["--config", path, "decode", "/"]);
    assert_eq!(cli.config.as_deref(), Some(file.path()));
    assert_eq!(Config::load(cli.config.as_deref()).unwrap(), Config::default());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}

#[test]
fn test_invalid_config_file() {
    let file = config_file("[display]\nformat = \"tree\"\n");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("Invalid config file"));
}
