//! Lossless string encoding of paths.
//!
//! Display strings (`/Engine/Block/Bore`) lose the entity kinds and cannot
//! tell a delimiter inside a value from a separator. The round-trip form
//! keeps both: a structure string with one code per element (`P` for parts,
//! `C` for characteristics), a `:`, then the escaped values, each followed by
//! the delimiter.
//!
//! ```text
//! PPC:/Engine/Block/Bore/
//! PC:/Rev A\/B/Ø 10\\12/
//! /                          (root)
//! ```
//!
//! Inside a value the escape character and the delimiter are escaped with a
//! backslash. [`decode`] is the exact inverse of [`encode`].
//!
//! `PathInformation` serializes through serde as its round-trip string.
//!
//! # Example
//!
//! ```
//! use piweb_path::{PathElement, PathInformation, roundtrip};
//!
//! let path = PathInformation::new([
//!     PathElement::part("Engine"),
//!     PathElement::characteristic("Bore/1"),
//! ]);
//!
//! let encoded = roundtrip::encode(&path);
//! assert_eq!(encoded, r"PC:/Engine/Bore\/1/");
//! assert_eq!(roundtrip::decode(&encoded)?, path);
//! # Ok::<(), piweb_path::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::element::PathElement;
use crate::entity::InspectionPlanEntity;
use crate::error::{Error, Result};
use crate::path::PathInformation;

/// Separator between path segments.
pub const DELIMITER: char = '/';

/// Escapes a delimiter or another escape inside a segment value.
pub const ESCAPE: char = '\\';

/// Separates the structure string from the path in round-trip strings.
pub const STRUCTURE_SEPARATOR: char = ':';

/// Encodes `path` as a round-trip string.
///
/// The root path encodes as `"/"`.
pub fn encode(path: &PathInformation) -> String {
    if path.is_root() {
        return DELIMITER.to_string();
    }

    let mut out = String::with_capacity(path.len() * 12);
    out.extend(path.iter().map(|element| element.entity().code()));
    out.push(STRUCTURE_SEPARATOR);
    out.push(DELIMITER);
    for element in path {
        push_escaped(&mut out, element.value());
        out.push(DELIMITER);
    }
    out
}

/// Decodes a round-trip string produced by [`encode`].
///
/// `""`, `"/"` and `":/"` all decode to the root path. The trailing delimiter
/// after the last value may be omitted.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the structure prefix is missing or holds an
/// unknown code, the path does not start with a delimiter, an escape is
/// left dangling, or the number of values differs from the structure length.
pub fn decode(text: &str) -> Result<PathInformation> {
    if text.is_empty() || text == "/" {
        return Ok(PathInformation::root());
    }

    let Some((structure, path)) = text.split_once(STRUCTURE_SEPARATOR) else {
        return Err(reject(text, "missing structure prefix"));
    };
    let entities = parse_structure(text, structure)?;

    let Some(body) = path.strip_prefix(DELIMITER) else {
        return Err(reject(text, "path must start with a delimiter"));
    };
    let values = split_segments(text, body, true)?;

    if values.len() != entities.len() {
        return Err(reject(
            text,
            format!(
                "structure describes {} elements but the path has {}",
                entities.len(),
                values.len()
            ),
        ));
    }

    Ok(entities
        .into_iter()
        .zip(values)
        .map(|(entity, value)| PathElement::new(entity, value))
        .collect())
}

/// Parses a delimited string in which every segment is a part.
///
/// Empty segments are skipped, so `"/Engine//Block/"` yields two parts.
///
/// # Errors
///
/// Returns [`Error::Parse`] on a dangling escape.
pub fn parse_part_path(text: &str) -> Result<PathInformation> {
    Ok(split_delimited(text)?
        .into_iter()
        .map(PathElement::part)
        .collect())
}

/// Parses a delimited string, taking the entity kinds from `structure`.
///
/// # Errors
///
/// Returns [`Error::Parse`] on an unknown structure code, a dangling escape,
/// or when the segment count differs from the structure length.
pub fn parse_with_structure(text: &str, structure: &str) -> Result<PathInformation> {
    let entities = parse_structure(structure, structure)?;
    let values = split_delimited(text)?;
    if values.len() != entities.len() {
        return Err(reject(
            text,
            format!(
                "structure {structure:?} describes {} elements but the path has {}",
                entities.len(),
                values.len()
            ),
        ));
    }

    Ok(entities
        .into_iter()
        .zip(values)
        .map(|(entity, value)| PathElement::new(entity, value))
        .collect())
}

/// Splits a delimited string into unescaped segment values, skipping empty
/// segments.
///
/// # Errors
///
/// Returns [`Error::Parse`] on a dangling escape.
pub fn split_delimited(text: &str) -> Result<Vec<String>> {
    split_segments(text, text, false)
}

/// Escapes the delimiter and the escape character in `value`.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value);
    out
}

/// Reverses [`escape`].
///
/// # Errors
///
/// Returns [`Error::Parse`] if `value` ends in a lone escape character.
pub fn unescape(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(reject(value, "dangling escape character")),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        if c == ESCAPE || c == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

fn parse_structure(input: &str, structure: &str) -> Result<Vec<InspectionPlanEntity>> {
    structure
        .chars()
        .map(|code| {
            InspectionPlanEntity::from_code(code)
                .ok_or_else(|| reject(input, format!("unknown structure code {code:?}")))
        })
        .collect()
}

/// Splits `body` at unescaped delimiters.
///
/// In strict mode every delimiter terminates a segment, empty ones included,
/// and a non-empty unterminated tail counts as the final segment. Otherwise
/// empty segments are dropped.
fn split_segments(input: &str, body: &str, strict: bool) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => return Err(reject(input, "dangling escape character")),
            },
            DELIMITER => {
                let segment = std::mem::take(&mut current);
                if strict || !segment.is_empty() {
                    segments.push(segment);
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    Ok(segments)
}

fn reject(input: &str, message: impl Into<String>) -> Error {
    let err = Error::parse(input, message);
    log::debug!("{err}");
    err
}

impl Serialize for PathInformation {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(self))
    }
}

impl<'de> Deserialize<'de> for PathInformation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        decode(&text).map_err(serde::de::Error::custom)
    }
}
