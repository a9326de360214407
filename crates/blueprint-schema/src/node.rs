//! # Schema Nodes
//!
//! A schema is a tree of [`SchemaNode`]s built in code with consuming
//! builder methods:
//!
//! ```
//! use blueprint_schema::SchemaNode;
//!
//! let source = SchemaNode::object()
//!     .required_property("name", SchemaNode::string().min_length(1))
//!     .required_property(
//!         "source_type",
//!         SchemaNode::string().allowed(["API", "FTP", "DATABASE"]),
//!     )
//!     .property("contains_pii", SchemaNode::boolean());
//!
//! let schema = SchemaNode::object()
//!     .required_property("data_sources", SchemaNode::array().items(source).min_items(1));
//! # let _ = schema;
//! ```
//!
//! Each constraint lives on the one variant it applies to. A schema tree is
//! plain immutable data once built; the validator only borrows it.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

/// A declarative description of an expected value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A JSON object with known properties.
    Object(ObjectSchema),
    /// A JSON array, optionally with an element schema.
    Array(ArraySchema),
    /// A JSON string.
    String(StringSchema),
    /// A JSON number.
    Number(NumberSchema),
    /// A JSON boolean.
    Boolean,
    /// Valid when at least one alternative matches, tried in order.
    OneOf(Vec<SchemaNode>),
    /// No constraint. Used for documentation-only fields.
    Any {
        /// Free-form note for readers of the schema.
        description: Option<String>,
    },
}

/// Constraints on an object value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Property names that must be present, in declaration order.
    pub required: Vec<String>,
    /// Schemas for known properties. Keys not listed here draw a warning.
    pub properties: BTreeMap<String, SchemaNode>,
}

/// Constraints on an array value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    /// Schema applied to every element.
    pub items: Option<Box<SchemaNode>>,
    /// Minimum element count.
    pub min_items: Option<usize>,
    /// Maximum element count.
    pub max_items: Option<usize>,
}

/// Constraints on a string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Regular expression the string must match somewhere. Anchor with
    /// `^`/`$` to require a full match.
    pub pattern: Option<String>,
    /// Closed set of permitted values.
    pub enum_values: Option<Vec<String>>,
}

/// Inclusive bounds on a number value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    /// Smallest permitted value.
    pub minimum: Option<f64>,
    /// Largest permitted value.
    pub maximum: Option<f64>,
}

impl SchemaNode {
    /// Start an object schema.
    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    /// Start an array schema.
    pub fn array() -> ArraySchema {
        ArraySchema::default()
    }

    /// Start a string schema.
    pub fn string() -> StringSchema {
        StringSchema::default()
    }

    /// Start a number schema.
    pub fn number() -> NumberSchema {
        NumberSchema::default()
    }

    /// A boolean schema.
    pub fn boolean() -> SchemaNode {
        SchemaNode::Boolean
    }

    /// A union of alternatives.
    pub fn one_of<I, N>(alternatives: I) -> SchemaNode
    where
        I: IntoIterator<Item = N>,
        N: Into<SchemaNode>,
    {
        SchemaNode::OneOf(alternatives.into_iter().map(Into::into).collect())
    }

    /// A node that accepts any value.
    pub fn any() -> SchemaNode {
        SchemaNode::Any { description: None }
    }

    /// A node that accepts any value and carries a note for readers.
    pub fn documented(description: impl Into<String>) -> SchemaNode {
        SchemaNode::Any {
            description: Some(description.into()),
        }
    }

    /// Render this node in JSON-Schema vocabulary for display.
    ///
    /// Output only; nothing parses it back.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(o) => {
                let mut out = Map::new();
                out.insert("type".into(), json!("object"));
                if !o.required.is_empty() {
                    out.insert("required".into(), json!(o.required));
                }
                if !o.properties.is_empty() {
                    let props: Map<String, Value> = o
                        .properties
                        .iter()
                        .map(|(k, v)| (k.clone(), v.to_json()))
                        .collect();
                    out.insert("properties".into(), Value::Object(props));
                }
                Value::Object(out)
            }
            Self::Array(a) => {
                let mut out = Map::new();
                out.insert("type".into(), json!("array"));
                if let Some(items) = &a.items {
                    out.insert("items".into(), items.to_json());
                }
                if let Some(n) = a.min_items {
                    out.insert("minItems".into(), json!(n));
                }
                if let Some(n) = a.max_items {
                    out.insert("maxItems".into(), json!(n));
                }
                Value::Object(out)
            }
            Self::String(s) => {
                let mut out = Map::new();
                out.insert("type".into(), json!("string"));
                if let Some(n) = s.min_length {
                    out.insert("minLength".into(), json!(n));
                }
                if let Some(n) = s.max_length {
                    out.insert("maxLength".into(), json!(n));
                }
                if let Some(p) = &s.pattern {
                    out.insert("pattern".into(), json!(p));
                }
                if let Some(values) = &s.enum_values {
                    out.insert("enum".into(), json!(values));
                }
                Value::Object(out)
            }
            Self::Number(n) => {
                let mut out = Map::new();
                out.insert("type".into(), json!("number"));
                if let Some(min) = n.minimum {
                    out.insert("minimum".into(), json!(min));
                }
                if let Some(max) = n.maximum {
                    out.insert("maximum".into(), json!(max));
                }
                Value::Object(out)
            }
            Self::Boolean => json!({ "type": "boolean" }),
            Self::OneOf(alternatives) => {
                let alts: Vec<Value> = alternatives.iter().map(SchemaNode::to_json).collect();
                json!({ "oneOf": alts })
            }
            Self::Any { description } => match description {
                Some(d) => json!({ "description": d }),
                None => json!({}),
            },
        }
    }
}

impl ObjectSchema {
    /// Declare an optional property.
    pub fn property(mut self, name: impl Into<String>, schema: impl Into<SchemaNode>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Declare a property and mark it required.
    pub fn required_property(
        self,
        name: impl Into<String>,
        schema: impl Into<SchemaNode>,
    ) -> Self {
        let name = name.into();
        self.require(name.clone()).property(name, schema)
    }

    /// Mark a property name as required. Repeats are ignored.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }
}

impl ArraySchema {
    /// Schema for every element.
    pub fn items(mut self, schema: impl Into<SchemaNode>) -> Self {
        self.items = Some(Box::new(schema.into()));
        self
    }

    /// Minimum element count.
    pub fn min_items(mut self, n: usize) -> Self {
        self.min_items = Some(n);
        self
    }

    /// Maximum element count.
    pub fn max_items(mut self, n: usize) -> Self {
        self.max_items = Some(n);
        self
    }
}

impl StringSchema {
    /// Minimum length in characters.
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Maximum length in characters.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Regular expression the value must match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Restrict the value to a closed set.
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl NumberSchema {
    /// Inclusive lower bound.
    pub fn minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub fn maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }
}

impl From<ObjectSchema> for SchemaNode {
    fn from(schema: ObjectSchema) -> Self {
        SchemaNode::Object(schema)
    }
}

impl From<ArraySchema> for SchemaNode {
    fn from(schema: ArraySchema) -> Self {
        SchemaNode::Array(schema)
    }
}

impl From<StringSchema> for SchemaNode {
    fn from(schema: StringSchema) -> Self {
        SchemaNode::String(schema)
    }
}

impl From<NumberSchema> for SchemaNode {
    fn from(schema: NumberSchema) -> Self {
        SchemaNode::Number(schema)
    }
}
