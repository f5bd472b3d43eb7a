//! PiWeb path addressing.
//!
//! Every entity of an inspection plan, part or characteristic, is identified
//! by a typed path such as `/Engine/Block/Bore`. This crate provides that
//! path type together with its lossless string encoding.
//!
//! # Modules
//!
//! - [`entity`]: The part/characteristic kind of a segment
//! - [`element`]: Typed, case-insensitive path segments
//! - [`path`]: [`PathInformation`] and its slicing and combination algebra
//! - [`roundtrip`]: Escaped string encoding and serde support
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod element;
pub mod entity;
pub mod error;
pub mod path;
mod proptests;
pub mod roundtrip;

// Re-exports for convenience
pub use element::PathElement;
pub use entity::InspectionPlanEntity;
pub use error::{Error, Result};
pub use path::{FormattedPath, PathFormat, PathInformation};
