//! Integration test: validate the sample planner documents under
//! `blueprints/` against the built-in module schemas.
//!
//! `blueprints/sample/` holds one passing document per module, named after
//! the module. `blueprints/invalid/` holds documents with known defects whose
//! exact messages are pinned here.

use std::path::{Path, PathBuf};

use blueprint_catalog::SchemaRegistry;
use blueprint_core::PlannerModule;
use serde_json::Value;

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn load(path: &Path) -> Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).unwrap(),
        _ => serde_yaml::from_str(&content).unwrap(),
    }
}

fn find_document(dir: &Path, module: PlannerModule) -> Option<PathBuf> {
    ["yaml", "yml", "json"]
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", module.as_str())))
        .find(|p| p.exists())
}

#[test]
fn test_every_module_has_a_passing_sample() {
    let registry = SchemaRegistry::builtin().expect("built-in schemas");
    let sample_dir = repo_root().join("blueprints/sample");

    let mut failures = Vec::new();
    for module in PlannerModule::all() {
        let Some(path) = find_document(&sample_dir, *module) else {
            failures.push(format!("{module}: no sample document"));
            continue;
        };
        let result = registry.validate_module(*module, &load(&path)).unwrap();
        if !result.is_valid() || !result.warnings().is_empty() {
            failures.push(format!("{}: {result}", path.display()));
        }
    }

    assert!(
        failures.is_empty(),
        "{} sample(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_invalid_data_sources_messages() {
    let registry = SchemaRegistry::builtin().unwrap();
    let path = repo_root().join("blueprints/invalid/data_sources.yaml");
    let result = registry
        .validate_module(PlannerModule::DataSources, &load(&path))
        .unwrap();

    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        [
            "data_sources[1].connection: Value does not match any valid option",
            "data_sources[2].source_type: Must be one of: API, FTP, DATABASE, FILE, STREAM, MANUAL",
        ]
    );
    assert_eq!(result.warnings(), ["data_sources[2].owner: Unknown property"]);
}

#[test]
fn test_invalid_commander_intent_collects_every_error() {
    let registry = SchemaRegistry::builtin().unwrap();
    let path = repo_root().join("blueprints/invalid/commander_intent.yaml");
    let result = registry
        .validate_module(PlannerModule::CommanderIntent, &load(&path))
        .unwrap();

    assert_eq!(
        result.errors(),
        [
            "end_state: Required field missing",
            "mission_name: Must be at least 1 characters",
            "objective: Must be at least 10 characters",
            "priority: Must be one of: LOW, MEDIUM, HIGH, CRITICAL",
            r"version: Does not match pattern ^v[0-9]+\.[0-9]+$",
        ]
    );
    assert!(result.warnings().is_empty());
}

#[test]
fn test_final_blueprint_embeds_module_paths() {
    let registry = SchemaRegistry::builtin().unwrap();
    let path = repo_root().join("blueprints/sample/final_blueprint.json");
    let mut doc = load(&path);
    doc["modules"]["security"]["classification"] = Value::String("PUBLIC".into());

    let result = registry
        .validate_module(PlannerModule::FinalBlueprint, &doc)
        .unwrap();
    assert_eq!(
        result.errors(),
        ["modules.security.classification: Must be one of: UNCLASSIFIED, CUI, SECRET, TOP_SECRET"]
    );
}
