//! Conformance tests that run YAML fixtures against criteria
//!
//! Run with: cargo test -p criteria-test --test conformance --features criteria-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.
//! Set `RUST_LOG=criteria=debug` to see state changes while fixtures run.

#![cfg(feature = "fixtures")]

use criteria_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixtures live next to this crate's manifest
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run one fixture file
fn run_fixture_file(path: &Path) {
    init_tracing();

    let yaml = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} has no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_exclusive_criteria() {
    run_fixture_file(&fixtures_dir().join("01_exclusive.yaml"));
}

#[test]
fn test_inclusive_criteria() {
    run_fixture_file(&fixtures_dir().join("02_inclusive.yaml"));
}

#[test]
fn test_modification_tracking() {
    run_fixture_file(&fixtures_dir().join("03_modification.yaml"));
}

#[test]
fn test_registry() {
    run_fixture_file(&fixtures_dir().join("04_registry.yaml"));
}

#[test]
fn every_fixture_file_is_covered() {
    let mut files: Vec<_> = fs::read_dir(fixtures_dir())
        .expect("read fixtures dir")
        .map(|entry| entry.expect("dir entry").file_name())
        .filter_map(|name| name.into_string().ok())
        .filter(|name| name.ends_with(".yaml") || name.ends_with(".yml"))
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "01_exclusive.yaml",
            "02_inclusive.yaml",
            "03_modification.yaml",
            "04_registry.yaml"
        ]
    );
}
