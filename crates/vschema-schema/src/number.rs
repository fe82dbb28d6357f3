//! # Number Schema
//!
//! Bounds are inclusive. The lower bound, upper bound and integer checks are
//! independent: a value can fail several of them at once and every failure
//! is reported.

use serde_json::{Number, Value};
use vschema_core::{
    Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaKind, ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Validates numeric values.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    min: Option<f64>,
    max: Option<f64>,
    is_integer: bool,
    default: Option<f64>,
    optional: bool,
    nullable: bool,
}

impl NumberSchema {
    /// A required, non-nullable number schema with no constraints.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Requires the value to be at least `min`.
    pub fn min(mut self, min: impl Into<f64>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Requires the value to be at most `max`.
    pub fn max(mut self, max: impl Into<f64>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Requires the value to have no fractional part.
    pub fn int(mut self) -> Self {
        self.is_integer = true;
        self
    }

    /// Uses `value` when the input is missing.
    pub fn default(mut self, value: impl Into<f64>) -> Self {
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

impl Schema for NumberSchema {
    type Output = f64;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<f64> {
        let presence =
            Presence::resolve(input, self.default.as_ref(), self.optional, self.nullable);
        let value = match presence {
            Presence::Settled(parsed) => return Ok(parsed),
            Presence::Check(value) => value,
        };
        let Some(n) = value.as_f64() else {
            return Err(ValidationErrors::single(Issue::TypeMismatch {
                expected: SchemaKind::Number,
            }));
        };

        let mut issues = Vec::new();
        if let Some(min) = self.min {
            if n < min {
                issues.push(Issue::NumberTooSmall { min });
            }
        }
        if let Some(max) = self.max {
            if n > max {
                issues.push(Issue::NumberTooLarge { max });
            }
        }
        if self.is_integer && n.fract() != 0.0 {
            issues.push(Issue::NotInteger);
        }

        match ValidationErrors::from_issues(issues) {
            Some(errors) => Err(errors),
            None => Ok(Parsed::Value(n)),
        }
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::Number {
                min: self.min,
                max: self.max,
                is_integer: self.is_integer,
            },
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        SchemaNode::Number(self)
    }

    /// Integral values within the exactly representable range become JSON
    /// integers; everything else stays a float.
    fn output_to_json(output: f64) -> Value {
        if output.fract() == 0.0 && output.abs() <= MAX_SAFE_INTEGER {
            Value::from(output as i64)
        } else {
            Number::from_f64(output).map_or(Value::Null, Value::Number)
        }
    }
}
