//! End-to-end tests for the report generator

use super::*;
use crate::error::ArgumentError;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn sample_args() -> Vec<String> {
    [
        "A", "B", "C", "10", "5", "2", "1", "20", "10", "4", "2", "30", "15", "6", "3",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn generator_in(tmp: &TempDir) -> (ReportGenerator, PathBuf) {
    let dir = tmp.path().join("docs").join("images");
    let generator = ReportGenerator::new(ReportConfig::new(&dir)).unwrap();
    (generator, dir)
}

fn assert_svg_file(path: &Path) {
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(!contents.is_empty());
    assert!(contents.contains("<svg"));
    assert!(contents.trim_end().ends_with("</svg>"));
}

// ============================================================================
// Success paths
// ============================================================================

#[test]
fn test_generate_writes_svg_into_output_dir() {
    let tmp = TempDir::new().unwrap();
    let (generator, dir) = generator_in(&tmp);

    let path = generator.generate_from_args(&sample_args()).unwrap();

    assert_eq!(path.parent(), Some(dir.as_path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
    assert_svg_file(&path);
}

#[test]
fn test_identical_inputs_get_distinct_files() {
    let tmp = TempDir::new().unwrap();
    let (generator, dir) = generator_in(&tmp);

    let first = generator.generate_from_args(&sample_args()).unwrap();
    let second = generator.generate_from_args(&sample_args()).unwrap();

    assert_ne!(first, second);
    assert_svg_file(&first);
    assert_svg_file(&second);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
}

#[test]
fn test_generate_with_typed_input() {
    let tmp = TempDir::new().unwrap();
    let (generator, _) = generator_in(&tmp);

    let path = generator
        .generate(
            ["load".into(), "solve".into(), "store".into()],
            [8.0, 4.0, 2.0, 1.0, 8.0, 5.0, 3.0, 2.0, 1.0, 1.0, 1.0, 1.0],
        )
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("solve"));
    assert!(contents.contains("8.0"));
}

#[test]
fn test_zero_timings_still_complete() {
    let tmp = TempDir::new().unwrap();
    let (generator, _) = generator_in(&tmp);

    let mut args = sample_args();
    for arg in &mut args[3..7] {
        *arg = "0".to_string();
    }
    args[14] = "0".to_string();

    let path = generator.generate_from_args(&args).unwrap();
    assert_svg_file(&path);
}

#[test]
fn test_trailing_arguments_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let (generator, _) = generator_in(&tmp);

    let mut args = sample_args();
    args.push("surplus".to_string());

    let path = generator.generate_from_args(&args).unwrap();
    assert_svg_file(&path);
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn test_missing_arguments_produce_no_file() {
    let tmp = TempDir::new().unwrap();
    let (generator, dir) = generator_in(&tmp);

    let err = generator.generate_from_args(&sample_args()[..10]).unwrap_err();

    assert!(matches!(
        err,
        ReportError::Argument(ArgumentError::MissingArguments { got: 10, .. })
    ));
    assert!(!dir.exists());
}

#[test]
fn test_malformed_timing_fails_before_io() {
    let tmp = TempDir::new().unwrap();
    let (generator, dir) = generator_in(&tmp);

    let mut args = sample_args();
    args[5] = "abc".to_string();

    let err = generator.generate_from_args(&args).unwrap_err();

    assert!(matches!(
        err,
        ReportError::Argument(ArgumentError::InvalidTiming { position: 6, .. })
    ));
    assert!(!dir.exists());
}

#[test]
fn test_unwritable_output_dir_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("docs");
    std::fs::write(&blocker, "occupied").unwrap();

    let generator = ReportGenerator::new(ReportConfig::new(blocker.join("images"))).unwrap();
    let err = generator.generate_from_args(&sample_args()).unwrap_err();

    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = ReportGenerator::new(ReportConfig::default().with_size(900, 50));
    assert!(matches!(result, Err(ReportError::Config(_))));
}
