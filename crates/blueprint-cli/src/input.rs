//! # Document Loading
//!
//! Planner documents arrive as YAML (`.yaml`/`.yml`) or JSON (anything
//! else). Both are converted to a `serde_json::Value` with keys in document
//! order, which is the order validation messages are reported in.

use std::path::Path;

use blueprint_core::BlueprintError;
use serde_json::Value;

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`BlueprintError::Io`] if the file cannot be read and
/// [`BlueprintError::Serialization`] if it does not parse.
pub fn load_document(path: &Path) -> Result<Value, BlueprintError> {
    let content = std::fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
                BlueprintError::Serialization(format!("invalid YAML in {}: {e}", path.display()))
            })?;
            yaml_to_json(&yaml).map_err(|reason| {
                BlueprintError::Serialization(format!("{}: {reason}", path.display()))
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| {
            BlueprintError::Serialization(format!("invalid JSON in {}: {e}", path.display()))
        }),
    }
}

/// Convert a YAML tree to its JSON equivalent.
///
/// Scalar map keys are stringified; tags are dropped. Floats that JSON
/// cannot represent (NaN, infinities) are rejected.
fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| format!("number {n} has no JSON representation"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported map key: {other:?}")),
                };
                object.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
