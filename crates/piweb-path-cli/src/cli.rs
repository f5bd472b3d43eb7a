//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use piweb_path::PathFormat;

use crate::config::CONFIG_ENV_VAR;

/// pipath - encode, decode and inspect PiWeb inspection-plan paths
#[derive(Parser, Debug)]
#[command(name = "pipath", version)]
#[command(about = "Encode, decode and inspect PiWeb inspection-plan paths", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = CONFIG_ENV_VAR, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands. Paths are given as round-trip strings such as
/// `PPC:/Engine/Block/Bore/`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build a round-trip string from a structure string and raw values
    Encode {
        /// One code per value: P for part, C for characteristic
        structure: String,
        /// Unescaped segment values, top-most first
        values: Vec<String>,
    },
    /// Render a round-trip string for display
    Decode {
        /// Round-trip string
        path: String,
        /// Rendering mode (name, full, path); defaults to the configured one
        #[arg(short, long)]
        format: Option<PathFormat>,
        /// Omit the leading root delimiter
        #[arg(long)]
        without_root: bool,
    },
    /// Show the derived paths and properties of a path
    Inspect {
        /// Round-trip string
        path: String,
    },
    /// Concatenate paths, top-most first
    Combine {
        /// Round-trip strings
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Test whether a path lies below (or at) an ancestor
    Below {
        /// Round-trip string of the candidate descendant
        path: String,
        /// Round-trip string of the ancestor
        ancestor: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let cli = Cli::try_parse_from(["pipath", "encode", "PC", "Engine", "Bore"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Encode {
                structure: "PC".to_string(),
                values: vec!["Engine".to_string(), "Bore".to_string()],
            }
        );
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_decode_with_format() {
        let cli = Cli::try_parse_from([
            "pipath",
            "decode",
            "P:/Engine/",
            "--format",
            "full",
            "--config",
            "pipath.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pipath.toml")));
        let Command::Decode { format, without_root, .. } = cli.command else {
            unreachable!("Expected Decode command");
        };
        assert_eq!(format, Some(PathFormat::Full));
        assert!(!without_root);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pipath", "decode", "/", "--format", "tree"]).is_err());
    }

    #[test]
    fn test_combine_requires_paths() {
        assert!(Cli::try_parse_from(["pipath", "combine"]).is_err());
    }
}
