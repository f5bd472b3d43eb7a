//! Common test utilities for pipath integration tests.

use std::io::Write;

use clap::Parser;
use piweb_path_cli::{Cli, Config, commands};
use tempfile::NamedTempFile;

/// Writes `contents` to a temporary config file.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("config should be written");
    file
}

/// Parses `args` as a pipath command line (without the binary name).
pub fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("pipath").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("arguments should parse")
}

/// Parses and runs `args` with `config`.
pub fn run_args(args: &[&str], config: &Config) -> piweb_path_cli::Result<String> {
    commands::run(&parse(args).command, config)
}

/// Runs `args` with the default configuration, expecting success.
pub fn run_ok(args: &[&str]) -> String {
    run_args(args, &Config::default()).expect("command should succeed")
}
