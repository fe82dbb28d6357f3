//! # Schema Definitions — Introspectable Node Descriptions
//!
//! A [`SchemaDef`] is the declarative record of one schema node: its kind,
//! the kind-specific constraints, and the two presence flags shared by all
//! kinds (`optional`, `nullable`).
//!
//! Definitions are plain owned data. The validation engine derives them from
//! its nodes on demand and the GraphQL projector walks them; neither side
//! holds references into the other.
//!
//! ## Invariants
//!
//! - `optional` and `nullable` are independent. `optional` admits a missing
//!   value, `nullable` admits a present `null`.
//! - Object fields keep insertion order. That order is the SDL field order.
//! - A definition tree is acyclic: children are owned by value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The tag of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// Text values.
    String,
    /// Numeric values (integer or floating point).
    Number,
    /// `true` / `false`.
    Boolean,
    /// One of a fixed, ordered set of strings.
    Enum,
    /// A homogeneous sequence.
    Array,
    /// A record with a fixed set of named fields.
    Object,
}

impl SchemaKind {
    /// Returns all kinds in declaration order.
    pub fn all_kinds() -> &'static [SchemaKind] {
        &[
            Self::String,
            Self::Number,
            Self::Boolean,
            Self::Enum,
            Self::Array,
            Self::Object,
        ]
    }

    /// Returns the lowercase tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of an object definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Property name in the input record.
    pub name: String,
    /// Definition the property is validated against.
    pub schema: SchemaDef,
}

/// Kind-specific part of a [`SchemaDef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindDef {
    /// Text with an optional minimum length.
    String {
        /// Minimum length in Unicode scalar values.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
    },
    /// Number with optional inclusive bounds and an integer constraint.
    Number {
        /// Inclusive lower bound.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        /// Inclusive upper bound.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        /// Whether the value must have no fractional part.
        #[serde(default)]
        is_integer: bool,
    },
    /// Boolean, no constraints.
    Boolean,
    /// Exact, case-sensitive membership in `options`.
    Enum {
        /// Allowed values in declaration order. Never empty.
        options: Vec<String>,
    },
    /// Sequence of `items`.
    Array {
        /// Element definition.
        items: Box<SchemaDef>,
        /// Inclusive minimum length.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_items: Option<usize>,
        /// Inclusive maximum length.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
    },
    /// Record with named fields in insertion order.
    Object {
        /// Declared fields.
        fields: Vec<FieldDef>,
    },
}

impl KindDef {
    /// Returns the tag of this definition.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::String { .. } => SchemaKind::String,
            Self::Number { .. } => SchemaKind::Number,
            Self::Boolean => SchemaKind::Boolean,
            Self::Enum { .. } => SchemaKind::Enum,
            Self::Array { .. } => SchemaKind::Array,
            Self::Object { .. } => SchemaKind::Object,
        }
    }
}

/// The introspectable description of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Kind tag plus kind-specific constraints.
    #[serde(flatten)]
    pub kind: KindDef,
    /// A missing value is accepted and yields an absent result.
    #[serde(default)]
    pub optional: bool,
    /// A present `null` is accepted and yields `null`.
    #[serde(default)]
    pub nullable: bool,
}

impl SchemaDef {
    /// A required, non-nullable definition of the given kind.
    pub fn new(kind: KindDef) -> Self {
        Self {
            kind,
            optional: false,
            nullable: false,
        }
    }

    /// Returns the tag of this definition.
    pub fn kind(&self) -> SchemaKind {
        self.kind.kind()
    }

    /// True when the value may be absent or `null`, i.e. when a GraphQL
    /// field of this type must not carry the `!` marker.
    pub fn accepts_empty(&self) -> bool {
        self.optional || self.nullable
    }

    /// Returns the declared fields when this is an object definition.
    pub fn fields(&self) -> Option<&[FieldDef]> {
        match &self.kind {
            KindDef::Object { fields } => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags_are_lowercase() {
        let tags: Vec<&str> = SchemaKind::all_kinds().iter().map(|k| k.as_str()).collect();
        assert_eq!(
            tags,
            vec!["string", "number", "boolean", "enum", "array", "object"]
        );
        assert_eq!(SchemaKind::Enum.to_string(), "enum");
    }

    #[test]
    fn test_kind_def_reports_tag() {
        let def = SchemaDef::new(KindDef::Array {
            items: Box::new(SchemaDef::new(KindDef::Boolean)),
            min_items: None,
            max_items: Some(3),
        });
        assert_eq!(def.kind(), SchemaKind::Array);
        assert!(def.fields().is_none());
    }

    #[test]
    fn test_accepts_empty_is_either_flag() {
        let mut def = SchemaDef::new(KindDef::Boolean);
        assert!(!def.accepts_empty());
        def.optional = true;
        assert!(def.accepts_empty());
        def.optional = false;
        def.nullable = true;
        assert!(def.accepts_empty());
    }

    #[test]
    fn test_serialize_is_tagged_by_kind() {
        let def = SchemaDef::new(KindDef::Object {
            fields: vec![
                FieldDef {
                    name: "id".to_string(),
                    schema: SchemaDef::new(KindDef::Number {
                        min: None,
                        max: None,
                        is_integer: true,
                    }),
                },
                FieldDef {
                    name: "name".to_string(),
                    schema: SchemaDef::new(KindDef::String {
                        min_length: Some(1),
                    }),
                },
            ],
        });
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "object",
                "fields": [
                    {
                        "name": "id",
                        "schema": {
                            "kind": "number",
                            "is_integer": true,
                            "optional": false,
                            "nullable": false
                        }
                    },
                    {
                        "name": "name",
                        "schema": {
                            "kind": "string",
                            "min_length": 1,
                            "optional": false,
                            "nullable": false
                        }
                    }
                ],
                "optional": false,
                "nullable": false
            })
        );
    }

    #[test]
    fn test_deserialize_round_trips_enum() {
        let value = json!({
            "kind": "enum",
            "options": ["draft", "published"],
            "optional": true
        });
        let def: SchemaDef = serde_json::from_value(value).unwrap();
        assert_eq!(def.kind(), SchemaKind::Enum);
        assert!(def.optional);
        assert!(!def.nullable);
        match def.kind {
            KindDef::Enum { options } => assert_eq!(options, vec!["draft", "published"]),
            other => panic!("expected enum definition, got {other:?}"),
        }
    }
}
