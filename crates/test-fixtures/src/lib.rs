//! Test fixture loader for Crux golden model pairs and comparison scenarios.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crux_core::models::{InterventionProbe, ModelSpec};

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find fixtures/.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("crates/test-fixtures/fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find crates/test-fixtures/fixtures from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("crates/test-fixtures/fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// A golden comparison scenario: two inline specs, probes, and expectations.
#[derive(Debug, Deserialize)]
pub struct ComparisonScenario {
    pub name: String,
    pub left: ModelSpec,
    pub right: ModelSpec,
    #[serde(default)]
    pub interventions: Vec<InterventionProbe>,
    pub expected: ScenarioExpectation,
}

/// What a golden scenario expects from the report.
#[derive(Debug, Deserialize)]
pub struct ScenarioExpectation {
    /// Atom kinds in exact report order.
    pub atom_kinds: Vec<String>,
    /// Severities in the same order.
    pub severities: Vec<String>,
    pub score_above_zero: bool,
}

/// Load all golden comparison scenarios.
pub fn comparison_scenarios() -> Vec<ComparisonScenario> {
    load_fixture("comparisons/golden_scenarios.json")
}
