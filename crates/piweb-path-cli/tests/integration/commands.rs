//! Integration tests for the pipath commands.

use piweb_path_cli::{Config, Error};

use crate::common::{run_args, run_ok};

#[test]
fn test_encode_then_decode() {
    let encoded = run_ok(&["encode", "PPC", "Part1", "Part2", "CharA"]);
    assert_eq!(encoded, "PPC:/Part1/Part2/CharA/");

    let decoded = run_ok(&["decode", &encoded]);
    assert_eq!(decoded, "/Part1/Part2/CharA");
}

#[test]
fn test_encode_escapes_delimiters() {
    let encoded = run_ok(&["encode", "PC", "Rev A/B", r"x\y"]);
    assert_eq!(encoded, r"PC:/Rev A\/B/x\\y/");
    assert_eq!(run_ok(&["decode", &encoded, "--format", "name"]), r"x\y");
}

#[test]
fn test_encode_root() {
    assert_eq!(run_ok(&["encode", ""]), "/");
}

#[test]
fn test_encode_unknown_code() {
    let err = run_args(&["encode", "PX", "a", "b"], &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
    assert!(err.to_string().contains("unknown structure code"));
}

#[test]
fn test_decode_formats() {
    let path = "PPC:/Part1/Part2/CharA/";
    assert_eq!(run_ok(&["decode", path, "--format", "name"]), "CharA");
    assert_eq!(
        run_ok(&["decode", path, "--format", "full"]),
        "CharA (/Part1/Part2/CharA)"
    );
    assert_eq!(
        run_ok(&["decode", path, "--without-root"]),
        "Part1/Part2/CharA"
    );
}

#[test]
fn test_decode_malformed_input() {
    let err = run_args(&["decode", "Part1/Part2"], &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Path(piweb_path::Error::Parse { .. })));
}

#[test]
fn test_inspect() {
    let output = run_ok(&["inspect", "PPC:/Part1/Part2/CharA/"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "name: CharA",
            "entity: Characteristic",
            "depth: 3",
            "path: /Part1/Part2/CharA",
            "parent: /Part1/Part2",
            "parent part: /Part1/Part2",
            "root part: /Part1",
            "well formed: true",
            "roundtrip: PPC:/Part1/Part2/CharA/",
        ]
    );
}

#[test]
fn test_inspect_root() {
    let output = run_ok(&["inspect", "/"]);
    assert!(output.contains("name: \n"));
    assert!(output.contains("entity: Part"));
    assert!(output.contains("depth: 0"));
    assert!(output.contains("root part: /\n"));
}

#[test]
fn test_inspect_flags_inverted_structure() {
    let output = run_ok(&["inspect", "CP:/Char/Part/"]);
    assert!(output.contains("well formed: false"));
}

#[test]
fn test_combine() {
    let combined = run_ok(&["combine", "P:/Part1/", "/", "PC:/Part2/CharA/"]);
    assert_eq!(combined, "PPC:/Part1/Part2/CharA/");
}

#[test]
fn test_combine_single_root() {
    assert_eq!(run_ok(&["combine", "/"]), "/");
}

#[test]
fn test_below() {
    assert_eq!(
        run_ok(&["below", "PPC:/Part1/Part2/CharA/", "PP:/part1/PART2/"]),
        "true"
    );
    assert_eq!(
        run_ok(&["below", "PP:/Part1/Part2/", "PPC:/Part1/Part2/CharA/"]),
        "false"
    );
    assert_eq!(run_ok(&["below", "PP:/Part1/Part2/", "C:/Part1/"]), "false");
}
