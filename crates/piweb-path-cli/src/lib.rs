//! # piweb-path-cli
//!
//! The `pipath` tool for working with PiWeb inspection-plan paths:
//! - Building round-trip strings from raw segment values
//! - Rendering round-trip strings for display
//! - Inspecting parents, parent parts and root parts
//! - Combining paths and testing ancestry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, Result};
