//! Integration test suite for the pipath tool.
//!
//! Drives the commands through the same entry points the binary uses,
//! with configuration loaded from temporary files.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
