//! # Recursive Validation
//!
//! Walks a `serde_json::Value` and a [`SchemaNode`] together. Every
//! violation anywhere in the tree is recorded; a failing sibling never stops
//! its neighbours from being checked. The one exception is a kind mismatch:
//! once a value is known not to be a string (say), no string-specific check
//! runs against it.
//!
//! Message order is deterministic: `required` in declaration order, then the
//! value's own keys in document order, then array elements by index.
//!
//! Each `pattern` is compiled at most once per [`validate`] call. Compiled
//! patterns are dropped when the call returns.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use regex::Regex;
use serde_json::{Map, Value};

use blueprint_core::{display_path, join_index, join_key};

use crate::error::SchemaError;
use crate::node::{ArraySchema, NumberSchema, ObjectSchema, SchemaNode, StringSchema};
use crate::result::ValidationResult;

/// Validate `value` against `schema`.
///
/// `path` is the location of `value` within its document: `""` for the
/// root, or a field name when validating one field of a larger payload.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidPattern`] if a `pattern` reached during the
/// walk is not a valid regular expression. Problems with the *data* never
/// produce `Err`; they are reported in the returned result.
pub fn validate(
    value: &Value,
    schema: &SchemaNode,
    path: &str,
) -> Result<ValidationResult, SchemaError> {
    let mut patterns = PatternCache::default();
    let mut result = ValidationResult::new();
    validate_node(value, schema, path, &mut patterns, &mut result)?;
    Ok(result)
}

/// Name of a value's JSON kind, as used in type-mismatch messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Patterns compiled during one walk, keyed by their source text.
#[derive(Default)]
struct PatternCache<'s> {
    compiled: HashMap<&'s str, Regex>,
}

impl<'s> PatternCache<'s> {
    fn compile(&mut self, pattern: &'s str, path: &str) -> Result<&Regex, SchemaError> {
        match self.compiled.entry(pattern) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let re = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
                    location: display_path(path).to_string(),
                    pattern: pattern.to_string(),
                    source,
                })?;
                Ok(entry.insert(re))
            }
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.compiled.len()
    }
}

fn validate_node<'s>(
    value: &Value,
    schema: &'s SchemaNode,
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    match schema {
        SchemaNode::OneOf(alternatives) => validate_union(value, alternatives, path, patterns, out),
        SchemaNode::Object(object) => validate_object(value, object, path, patterns, out),
        SchemaNode::Array(array) => validate_array(value, array, path, patterns, out),
        SchemaNode::String(string) => validate_string(value, string, path, patterns, out),
        SchemaNode::Number(number) => {
            validate_number(value, number, path, out);
            Ok(())
        }
        SchemaNode::Boolean => {
            if !value.is_boolean() {
                type_mismatch("boolean", value, path, out);
            }
            Ok(())
        }
        SchemaNode::Any { .. } => Ok(()),
    }
}

/// First alternative with no errors wins and contributes its warnings.
/// When nothing matches, a single error is reported for the whole union;
/// the per-alternative errors are discarded.
fn validate_union<'s>(
    value: &Value,
    alternatives: &'s [SchemaNode],
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    for alternative in alternatives {
        let mut attempt = ValidationResult::new();
        validate_node(value, alternative, path, patterns, &mut attempt)?;
        if attempt.is_valid() {
            out.merge(attempt);
            return Ok(());
        }
    }
    out.push_error(path, "Value does not match any valid option");
    Ok(())
}

fn validate_object<'s>(
    value: &Value,
    schema: &'s ObjectSchema,
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    let Some(map) = value.as_object() else {
        type_mismatch("object", value, path, out);
        return Ok(());
    };

    for name in &schema.required {
        if !map.contains_key(name) {
            out.push_error(&join_key(path, name), "Required field missing");
        }
    }

    validate_properties(map, schema, path, patterns, out)
}

fn validate_properties<'s>(
    map: &Map<String, Value>,
    schema: &'s ObjectSchema,
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    for (key, child) in map {
        let child_path = join_key(path, key);
        match schema.properties.get(key) {
            Some(child_schema) => validate_node(child, child_schema, &child_path, patterns, out)?,
            None => out.push_warning(&child_path, "Unknown property"),
        }
    }
    Ok(())
}

fn validate_array<'s>(
    value: &Value,
    schema: &'s ArraySchema,
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    let Some(elements) = value.as_array() else {
        type_mismatch("array", value, path, out);
        return Ok(());
    };

    if let Some(min) = schema.min_items {
        if elements.len() < min {
            out.push_error(path, format!("Must have at least {min} items"));
        }
    }
    if let Some(max) = schema.max_items {
        if elements.len() > max {
            out.push_error(path, format!("Must have at most {max} items"));
        }
    }

    // Element checks run even when the length bounds already failed.
    if let Some(items) = &schema.items {
        for (index, element) in elements.iter().enumerate() {
            validate_node(element, items, &join_index(path, index), patterns, out)?;
        }
    }
    Ok(())
}

fn validate_string<'s>(
    value: &Value,
    schema: &'s StringSchema,
    path: &str,
    patterns: &mut PatternCache<'s>,
    out: &mut ValidationResult,
) -> Result<(), SchemaError> {
    let Some(text) = value.as_str() else {
        type_mismatch("string", value, path, out);
        return Ok(());
    };

    let length = text.chars().count();
    if let Some(min) = schema.min_length {
        if length < min {
            out.push_error(path, format!("Must be at least {min} characters"));
        }
    }
    if let Some(max) = schema.max_length {
        if length > max {
            out.push_error(path, format!("Must be at most {max} characters"));
        }
    }

    if let Some(pattern) = &schema.pattern {
        if !patterns.compile(pattern, path)?.is_match(text) {
            out.push_error(path, format!("Does not match pattern {pattern}"));
        }
    }

    if let Some(allowed) = &schema.enum_values {
        if !allowed.iter().any(|candidate| candidate == text) {
            out.push_error(path, format!("Must be one of: {}", allowed.join(", ")));
        }
    }
    Ok(())
}

fn validate_number(value: &Value, schema: &NumberSchema, path: &str, out: &mut ValidationResult) {
    let Some(number) = value.as_f64() else {
        type_mismatch("number", value, path, out);
        return;
    };

    if let Some(min) = schema.minimum {
        if number < min {
            out.push_error(path, format!("Must be at least {min}"));
        }
    }
    if let Some(max) = schema.maximum {
        if number > max {
            out.push_error(path, format!("Must be at most {max}"));
        }
    }
}

fn type_mismatch(expected: &str, value: &Value, path: &str, out: &mut ValidationResult) {
    out.push_error(path, format!("Expected {expected}, got {}", value_kind(value)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: Value, schema: impl Into<SchemaNode>) -> ValidationResult {
        validate(&value, &schema.into(), "").unwrap()
    }

    // -- objects --------------------------------------------------------

    #[test]
    fn object_rejects_non_objects_once() {
        let schema = SchemaNode::object().required_property("a", SchemaNode::string());
        for value in [json!(null), json!([1]), json!("x"), json!(3), json!(true)] {
            let kind = value_kind(&value);
            let r = run(value, schema.clone());
            assert_eq!(r.errors(), [format!("(root): Expected object, got {kind}")]);
        }
    }

    #[test]
    fn object_reports_each_missing_required_in_declaration_order() {
        let schema = SchemaNode::object()
            .required_property("zeta", SchemaNode::string())
            .required_property("alpha", SchemaNode::string());
        let r = run(json!({}), schema);
        assert_eq!(
            r.errors(),
            ["zeta: Required field missing", "alpha: Required field missing"]
        );
    }

    #[test]
    fn object_nested_paths_are_dotted() {
        let schema = SchemaNode::object().required_property(
            "modules",
            SchemaNode::object().required_property(
                "security",
                SchemaNode::object().required_property("classification", SchemaNode::string()),
            ),
        );
        let r = run(json!({ "modules": { "security": {} } }), schema);
        assert_eq!(
            r.errors(),
            ["modules.security.classification: Required field missing"]
        );
    }

    #[test]
    fn object_optional_absent_property_is_silent() {
        let schema = SchemaNode::object().property("notes", SchemaNode::string());
        let r = run(json!({}), schema);
        assert!(r.is_valid());
        assert!(r.warnings().is_empty());
    }

    #[test]
    fn object_unknown_keys_warn_in_value_order() {
        let schema = SchemaNode::object().property("name", SchemaNode::string());
        let r = run(json!({ "zz": 1, "name": "n", "aa": 2 }), schema);
        assert!(r.is_valid());
        assert_eq!(
            r.warnings(),
            ["zz: Unknown property", "aa: Unknown property"]
        );
    }

    #[test]
    fn object_missing_and_invalid_siblings_both_reported() {
        let schema = SchemaNode::object()
            .required_property("name", SchemaNode::string())
            .required_property("count", SchemaNode::number());
        let r = run(json!({ "count": "three" }), schema);
        assert_eq!(
            r.errors(),
            ["name: Required field missing", "count: Expected number, got string"]
        );
    }

    #[test]
    fn required_without_property_schema_warns_when_present() {
        let schema = SchemaNode::object().require("id");
        let r = run(json!({ "id": 7 }), schema);
        assert!(r.is_valid());
        assert_eq!(r.warnings(), ["id: Unknown property"]);
    }

    // -- arrays ---------------------------------------------------------

    #[test]
    fn array_rejects_non_arrays() {
        let r = run(json!({ "0": "a" }), SchemaNode::array().items(SchemaNode::string()));
        assert_eq!(r.errors(), ["(root): Expected array, got object"]);
    }

    #[test]
    fn array_length_bounds() {
        let schema = SchemaNode::array().min_items(2).max_items(3);
        assert_eq!(run(json!([1]), schema.clone()).errors(), ["(root): Must have at least 2 items"]);
        assert!(run(json!([1, 2]), schema.clone()).is_valid());
        assert!(run(json!([1, 2, 3]), schema.clone()).is_valid());
        assert_eq!(
            run(json!([1, 2, 3, 4]), schema).errors(),
            ["(root): Must have at most 3 items"]
        );
    }

    #[test]
    fn array_items_checked_even_when_too_long() {
        let schema = SchemaNode::array()
            .items(SchemaNode::string())
            .max_items(1);
        let r = run(json!(["a", 2]), schema);
        assert_eq!(
            r.errors(),
            ["(root): Must have at most 1 items", "[1]: Expected string, got number"]
        );
    }

    #[test]
    fn array_without_items_accepts_any_elements() {
        let r = run(json!([1, "two", null, {}]), SchemaNode::array());
        assert!(r.is_valid());
    }

    #[test]
    fn array_of_objects_uses_bracketed_then_dotted_paths() {
        let schema = SchemaNode::object().required_property(
            "data_sources",
            SchemaNode::array().items(
                SchemaNode::object().required_property(
                    "source_type",
                    SchemaNode::string().allowed(["API", "FTP"]),
                ),
            ),
        );
        let value = json!({
            "data_sources": [
                { "source_type": "API" },
                { "source_type": "FTP" },
                { "source_type": "CARRIER_PIGEON" }
            ]
        });
        let r = run(value, schema);
        assert_eq!(
            r.errors(),
            ["data_sources[2].source_type: Must be one of: API, FTP"]
        );
    }

    // -- strings --------------------------------------------------------

    #[test]
    fn string_type_mismatch_skips_string_checks() {
        let schema = SchemaNode::string().min_length(3).pattern("^a").allowed(["abc"]);
        let r = run(json!(12), schema);
        assert_eq!(r.errors(), ["(root): Expected string, got number"]);
    }

    #[test]
    fn string_length_counts_characters() {
        let schema = SchemaNode::string().min_length(2).max_length(3);
        assert!(run(json!("éé"), schema.clone()).is_valid());
        assert_eq!(
            run(json!("é"), schema.clone()).errors(),
            ["(root): Must be at least 2 characters"]
        );
        assert_eq!(
            run(json!("abcd"), schema).errors(),
            ["(root): Must be at most 3 characters"]
        );
    }

    #[test]
    fn string_pattern_is_unanchored_search() {
        let schema = SchemaNode::string().pattern("[0-9]");
        assert!(run(json!("abc1def"), schema.clone()).is_valid());
        assert_eq!(
            run(json!("abc"), schema).errors(),
            ["(root): Does not match pattern [0-9]"]
        );
    }

    #[test]
    fn string_enum_lists_every_allowed_value() {
        let schema = SchemaNode::string().allowed(["LOW", "MEDIUM", "HIGH"]);
        assert!(run(json!("HIGH"), schema.clone()).is_valid());
        assert_eq!(
            run(json!("high"), schema).errors(),
            ["(root): Must be one of: LOW, MEDIUM, HIGH"]
        );
    }

    #[test]
    fn string_all_failing_constraints_reported_in_order() {
        let schema = SchemaNode::string()
            .min_length(5)
            .pattern("^[A-Z]+$")
            .allowed(["ALPHA"]);
        let r = run(json!("ab"), schema);
        assert_eq!(
            r.errors(),
            [
                "(root): Must be at least 5 characters",
                "(root): Does not match pattern ^[A-Z]+$",
                "(root): Must be one of: ALPHA",
            ]
        );
    }

    #[test]
    fn invalid_pattern_is_a_schema_error_not_a_data_error() {
        let schema: SchemaNode = SchemaNode::object()
            .property("v", SchemaNode::string().pattern("(unclosed"))
            .into();
        let err = validate(&json!({ "v": "x" }), &schema, "").unwrap_err();
        match err {
            SchemaError::InvalidPattern { location, pattern, .. } => {
                assert_eq!(location, "v");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("Expected InvalidPattern, got: {other}"),
        }
    }

    #[test]
    fn pattern_cache_compiles_each_pattern_once() {
        let mut patterns = PatternCache::default();
        assert!(patterns.compile("^v[0-9]+$", "a").unwrap().is_match("v1"));
        assert!(!patterns.compile("^v[0-9]+$", "b").unwrap().is_match("1"));
        assert!(patterns.compile("^x", "c").unwrap().is_match("xy"));
        assert_eq!(patterns.len(), 2);
    }

    #[test]
    fn pattern_cache_reports_location_of_first_use() {
        let mut patterns = PatternCache::default();
        let err = patterns.compile("(", "tags[3]").unwrap_err();
        assert_eq!(err.location(), "tags[3]");
        assert_eq!(patterns.len(), 0);
    }

    #[test]
    fn shared_pattern_checks_every_element() {
        let schema = SchemaNode::array().items(SchemaNode::string().pattern("^[a-z]+$"));
        let r = run(json!(["ok", "Bad", "fine", "7"]), schema);
        assert_eq!(
            r.errors(),
            [
                "[1]: Does not match pattern ^[a-z]+$",
                "[3]: Does not match pattern ^[a-z]+$",
            ]
        );
    }

    #[test]
    fn invalid_pattern_not_reached_for_non_string() {
        let schema = SchemaNode::string().pattern("(unclosed");
        let r = validate(&json!(1), &schema.into(), "").unwrap();
        assert_eq!(r.errors(), ["(root): Expected string, got number"]);
    }

    // -- numbers and booleans -------------------------------------------

    #[test]
    fn number_bounds_are_inclusive() {
        let schema = SchemaNode::number().minimum(1.0).maximum(65535.0);
        assert!(run(json!(1), schema.clone()).is_valid());
        assert!(run(json!(65535), schema.clone()).is_valid());
        assert!(run(json!(8080.5), schema.clone()).is_valid());
        assert_eq!(run(json!(0), schema.clone()).errors(), ["(root): Must be at least 1"]);
        assert_eq!(
            run(json!(65536), schema).errors(),
            ["(root): Must be at most 65535"]
        );
    }

    #[test]
    fn number_rejects_numeric_strings() {
        let r = run(json!("42"), SchemaNode::number());
        assert_eq!(r.errors(), ["(root): Expected number, got string"]);
    }

    #[test]
    fn boolean_type_check_only() {
        assert!(run(json!(false), SchemaNode::boolean()).is_valid());
        assert_eq!(
            run(json!("true"), SchemaNode::boolean()).errors(),
            ["(root): Expected boolean, got string"]
        );
        assert_eq!(
            run(json!(null), SchemaNode::boolean()).errors(),
            ["(root): Expected boolean, got null"]
        );
    }

    // -- unions and unconstrained nodes ---------------------------------

    #[test]
    fn union_first_match_wins_and_keeps_its_warnings() {
        let schema = SchemaNode::one_of([
            SchemaNode::from(SchemaNode::object().required_property("url", SchemaNode::string())),
            SchemaNode::from(SchemaNode::object().required_property("host", SchemaNode::string())),
        ]);
        let r = run(json!({ "host": "db", "extra": 1 }), schema);
        assert!(r.is_valid());
        assert_eq!(r.warnings(), ["extra: Unknown property"]);
    }

    #[test]
    fn union_stops_at_first_matching_alternative() {
        // Both alternatives accept the value; each warns about the other's key.
        let schema = SchemaNode::one_of([
            SchemaNode::object().property("x", SchemaNode::number()),
            SchemaNode::object().property("y", SchemaNode::number()),
        ]);
        let r = run(json!({ "x": 1, "y": 2 }), schema);
        assert!(r.is_valid());
        assert_eq!(r.warnings(), ["y: Unknown property"]);
    }

    #[test]
    fn union_without_match_reports_single_error() {
        let schema = SchemaNode::object().property(
            "connection",
            SchemaNode::one_of([SchemaNode::from(SchemaNode::string()), SchemaNode::boolean()]),
        );
        let r = run(json!({ "connection": 5 }), schema);
        assert_eq!(
            r.errors(),
            ["connection: Value does not match any valid option"]
        );
    }

    #[test]
    fn empty_union_matches_nothing() {
        let schema = SchemaNode::OneOf(Vec::new());
        let r = run(json!("anything"), schema);
        assert_eq!(r.errors(), ["(root): Value does not match any valid option"]);
    }

    #[test]
    fn union_propagates_schema_faults() {
        let schema = SchemaNode::one_of([SchemaNode::from(SchemaNode::string().pattern("["))]);
        assert!(validate(&json!("x"), &schema, "").is_err());
    }

    #[test]
    fn any_accepts_everything() {
        for value in [json!(null), json!(1), json!("s"), json!([]), json!({ "k": 1 })] {
            assert!(run(value.clone(), SchemaNode::any()).is_valid());
            assert!(run(value, SchemaNode::documented("note")).is_valid());
        }
    }

    #[test]
    fn root_path_argument_prefixes_messages() {
        let schema = SchemaNode::object().required_property("name", SchemaNode::string());
        let r = validate(&json!({}), &schema.into(), "commander_intent").unwrap();
        assert_eq!(r.errors(), ["commander_intent.name: Required field missing"]);
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("s")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }
}
