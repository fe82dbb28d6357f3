//! # Enum Schema
//!
//! A string restricted to a fixed, ordered set of options. Membership is an
//! exact, case-sensitive comparison. The option set is validated when the
//! schema is built: it must be non-empty and free of duplicates.

use std::collections::HashSet;

use serde_json::Value;
use vschema_core::{
    Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaError, SchemaKind,
    ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Validates membership in a fixed set of strings.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    options: Vec<String>,
    default: Option<String>,
    optional: bool,
    nullable: bool,
}

impl EnumSchema {
    /// Builds an enum schema over `options`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyEnum`] for an empty set and
    /// [`SchemaError::DuplicateEnumOption`] if an option repeats.
    pub fn new<I, S>(options: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(SchemaError::EmptyEnum);
        }
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(SchemaError::DuplicateEnumOption {
                    option: option.clone(),
                });
            }
        }
        Ok(Self {
            options,
            default: None,
            optional: false,
            nullable: false,
        })
    }

    /// The allowed values, in declaration order.
    pub fn options(&self) -> &[String] {
        &self.options
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

impl Schema for EnumSchema {
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
                expected: SchemaKind::Enum,
            }));
        };
        if !self.options.iter().any(|o| o == s) {
            return Err(ValidationErrors::single(Issue::NotInEnum {
                options: self.options.clone(),
            }));
        }
        Ok(Parsed::Value(s.clone()))
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::Enum {
                options: self.options.clone(),
            },
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        SchemaNode::Enum(self)
    }

    fn output_to_json(output: String) -> Value {
        Value::String(output)
    }
}
