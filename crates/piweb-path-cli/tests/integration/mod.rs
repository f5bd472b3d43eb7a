//! Integration tests grouped by concern.

mod commands;
mod config;
