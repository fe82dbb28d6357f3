//! # String Schema

use serde_json::Value;
use vschema_core::{
    Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaKind, ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Validates text values.
///
/// ```
/// use serde_json::json;
/// use vschema_schema::{validate, Schema};
///
/// let schema = validate::string().min(3);
/// assert!(schema.parse(&json!("hello")).is_ok());
/// assert!(schema.parse(&json!("hi")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    min_length: Option<usize>,
    default: Option<String>,
    optional: bool,
    nullable: bool,
}

impl StringSchema {
    /// A required, non-nullable string schema with no constraints.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Requires at least `n` characters (Unicode scalar values).
    pub fn min(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Uses `value` when the input is missing.
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Accepts a missing value.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Accepts `null`.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<String> {
        let presence =
            Presence::resolve(input, self.default.as_ref(), self.optional, self.nullable);
        let value = match presence {
            Presence::Settled(parsed) => return Ok(parsed),
            Presence::Check(value) => value,
        };
        let Value::String(s) = value else {
            return Err(ValidationErrors::single(Issue::TypeMismatch {
                expected: SchemaKind::String,
            }));
        };

        let mut issues = Vec::new();
        if let Some(min_length) = self.min_length {
            if s.chars().count() < min_length {
                issues.push(Issue::StringTooShort { min_length });
            }
        }

        match ValidationErrors::from_issues(issues) {
            Some(errors) => Err(errors),
            None => Ok(Parsed::Value(s.clone())),
        }
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::String {
                min_length: self.min_length,
            },
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        SchemaNode::String(self)
    }

    fn output_to_json(output: String) -> Value {
        Value::String(output)
    }
}
