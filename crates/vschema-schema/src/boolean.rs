//! # Boolean Schema

use serde_json::Value;
use vschema_core::{
    Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaKind, ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Validates `true` / `false`.
#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    default: Option<bool>,
    optional: bool,
    nullable: bool,
}

impl BooleanSchema {
    /// A required, non-nullable boolean schema.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Uses `value` when the input is missing.
    pub fn default(mut self, value: bool) -> Self {
        self.default = Some(value);
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

impl Schema for BooleanSchema {
    type Output = bool;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<bool> {
        match Presence::resolve(input, self.default.as_ref(), self.optional, self.nullable) {
            Presence::Settled(parsed) => Ok(parsed),
            Presence::Check(Value::Bool(b)) => Ok(Parsed::Value(*b)),
            Presence::Check(_) => Err(ValidationErrors::single(Issue::TypeMismatch {
                expected: SchemaKind::Boolean,
            })),
        }
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::Boolean,
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        SchemaNode::Boolean(self)
    }

    fn output_to_json(output: bool) -> Value {
        Value::Bool(output)
    }
}
