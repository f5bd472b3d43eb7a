//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use piweb_path::{InspectionPlanEntity, PathElement, PathFormat, PathInformation, roundtrip};

use crate::cli::Command;
use crate::config::{Config, DisplayConfig};
use crate::error::{Error, Result};

// ============================================================================
// Dispatch
// ============================================================================

/// Runs `command` and returns its output.
pub fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Encode { structure, values } => cmd_encode(structure, values),
        Command::Decode {
            path,
            format,
            without_root,
        } => cmd_decode(path, *format, *without_root, &config.display),
        Command::Inspect { path } => cmd_inspect(path, &config.display),
        Command::Combine { paths } => cmd_combine(paths),
        Command::Below { path, ancestor } => cmd_below(path, ancestor),
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Builds a round-trip string from a structure string and raw values.
pub fn cmd_encode(structure: &str, values: &[String]) -> Result<String> {
    let structure_len = structure.chars().count();
    if structure_len != values.len() {
        return Err(Error::usage(format!(
            "structure {structure:?} names {structure_len} elements but {} values were given",
            values.len()
        )));
    }

    let path = structure
        .chars()
        .zip(values)
        .map(|(code, value)| {
            InspectionPlanEntity::from_code(code)
                .map(|entity| PathElement::new(entity, value.as_str()))
                .ok_or_else(|| Error::usage(format!("unknown structure code {code:?}")))
        })
        .collect::<Result<PathInformation>>()?;

    if !path.is_well_formed() {
        tracing::warn!(path = %path, "Path places a part below a characteristic");
    }
    tracing::debug!(elements = path.len(), "Encoded path");
    Ok(roundtrip::encode(&path))
}

/// Renders a round-trip string for display.
pub fn cmd_decode(
    text: &str,
    format: Option<PathFormat>,
    without_root: bool,
    display: &DisplayConfig,
) -> Result<String> {
    let path = roundtrip::decode(text)?;
    let format = format.unwrap_or(display.format);
    let with_root = display.with_root && !without_root;
    tracing::debug!(elements = path.len(), %format, with_root, "Decoded path");
    Ok(render(&path, format, with_root))
}

/// Lists the derived paths and properties of a path, one `key: value` per
/// line.
pub fn cmd_inspect(text: &str, display: &DisplayConfig) -> Result<String> {
    let path = roundtrip::decode(text)?;
    let show = |p: &PathInformation| render(p, PathFormat::Path, display.with_root);

    let lines = [
        format!("name: {}", path.name()),
        format!("entity: {}", path.entity()),
        format!("depth: {}", path.len()),
        format!("path: {}", show(&path)),
        format!("parent: {}", show(&path.parent_path())),
        format!("parent part: {}", show(&path.parent_part_path())),
        format!("root part: {}", show(&path.root_part_path())),
        format!("well formed: {}", path.is_well_formed()),
        format!("roundtrip: {}", roundtrip::encode(&path)),
    ];
    Ok(lines.join("\n"))
}

/// Concatenates round-trip paths and returns the combined round-trip string.
pub fn cmd_combine(texts: &[String]) -> Result<String> {
    if texts.is_empty() {
        return Err(Error::usage("combine needs at least one path"));
    }

    let combined = texts
        .iter()
        .map(|text| roundtrip::decode(text))
        .try_fold(PathInformation::root(), |acc, path| {
            path.map(|path| acc.combine(&path))
        })?;

    tracing::debug!(inputs = texts.len(), elements = combined.len(), "Combined paths");
    Ok(roundtrip::encode(&combined))
}

/// Prints whether `text` lies below or at `ancestor`.
pub fn cmd_below(text: &str, ancestor: &str) -> Result<String> {
    let path = roundtrip::decode(text)?;
    let ancestor = roundtrip::decode(ancestor)?;
    Ok(path.is_below(&ancestor).to_string())
}

fn render(path: &PathInformation, format: PathFormat, with_root: bool) -> String {
    match format {
        PathFormat::Path if !with_root => path.to_string_without_root(),
        _ => path.format(format),
    }
}
