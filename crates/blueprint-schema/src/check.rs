//! # Schema Self-Check
//!
//! [`SchemaNode::check`] walks a schema tree and reports the first authoring
//! fault it finds. Registries run it when a schema is registered so that a
//! broken pattern surfaces at startup instead of on the first document that
//! happens to reach it.

use regex::Regex;

use blueprint_core::{display_path, join_key};

use crate::error::SchemaError;
use crate::node::{ArraySchema, NumberSchema, ObjectSchema, SchemaNode, StringSchema};

impl SchemaNode {
    /// Verify that this schema tree is well formed.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found, in depth-first order with
    /// object properties visited alphabetically.
    pub fn check(&self) -> Result<(), SchemaError> {
        check_node(self, "")
    }
}

fn check_node(node: &SchemaNode, location: &str) -> Result<(), SchemaError> {
    match node {
        SchemaNode::Object(object) => check_object(object, location),
        SchemaNode::Array(array) => check_array(array, location),
        SchemaNode::String(string) => check_string(string, location),
        SchemaNode::Number(number) => check_number(number, location),
        SchemaNode::OneOf(alternatives) => {
            if alternatives.is_empty() {
                return Err(SchemaError::EmptyUnion {
                    location: display_path(location).to_string(),
                });
            }
            for (index, alternative) in alternatives.iter().enumerate() {
                check_node(alternative, &join_key(location, &format!("oneOf[{index}]")))?;
            }
            Ok(())
        }
        SchemaNode::Boolean | SchemaNode::Any { .. } => Ok(()),
    }
}

fn check_object(object: &ObjectSchema, location: &str) -> Result<(), SchemaError> {
    for (name, child) in &object.properties {
        check_node(child, &join_key(&join_key(location, "properties"), name))?;
    }
    Ok(())
}

fn check_array(array: &ArraySchema, location: &str) -> Result<(), SchemaError> {
    ordered(location, "minItems", array.min_items, "maxItems", array.max_items)?;
    if let Some(items) = &array.items {
        check_node(items, &join_key(location, "items"))?;
    }
    Ok(())
}

fn check_string(string: &StringSchema, location: &str) -> Result<(), SchemaError> {
    ordered(location, "minLength", string.min_length, "maxLength", string.max_length)?;
    if let Some(pattern) = &string.pattern {
        Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            location: display_path(location).to_string(),
            pattern: pattern.clone(),
            source,
        })?;
    }
    if string.enum_values.as_ref().is_some_and(Vec::is_empty) {
        return Err(SchemaError::EmptyEnum {
            location: display_path(location).to_string(),
        });
    }
    Ok(())
}

fn check_number(number: &NumberSchema, location: &str) -> Result<(), SchemaError> {
    for (keyword, bound) in [("minimum", number.minimum), ("maximum", number.maximum)] {
        if bound.is_some_and(|b| !b.is_finite()) {
            return Err(SchemaError::NonFiniteBound {
                location: display_path(location).to_string(),
                keyword,
            });
        }
    }
    ordered(location, "minimum", number.minimum, "maximum", number.maximum)
}

fn ordered<T>(
    location: &str,
    lower_name: &'static str,
    lower: Option<T>,
    upper_name: &'static str,
    upper: Option<T>,
) -> Result<(), SchemaError>
where
    T: PartialOrd + ToString,
{
    match (lower, upper) {
        (Some(lo), Some(hi)) if lo > hi => Err(SchemaError::InvertedBounds {
            location: display_path(location).to_string(),
            lower_name,
            lower: lo.to_string(),
            upper_name,
            upper: hi.to_string(),
        }),
        _ => Ok(()),
    }
}
