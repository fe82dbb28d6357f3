//! # Array Schema
//!
//! Validates a sequence: length bounds first, then every element against the
//! item schema. A failing element contributes one `Item at index I: ...`
//! issue carrying all of that element's own issues. Elements are always all
//! attempted and a failure never returns the elements that did pass.

use serde_json::Value;
use vschema_core::{
    Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaKind, ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Validates sequences whose elements all match `S`.
#[derive(Debug, Clone)]
pub struct ArraySchema<S: Schema = SchemaNode> {
    items: S,
    min_items: Option<usize>,
    max_items: Option<usize>,
    default: Option<Vec<S::Output>>,
    optional: bool,
    nullable: bool,
}

impl<S: Schema> ArraySchema<S> {
    /// An array of `items` with no length constraints.
    pub fn new(items: S) -> Self {
        Self {
            items,
            min_items: None,
            max_items: None,
            default: None,
            optional: false,
            nullable: false,
        }
    }

    /// The element schema.
    pub fn items(&self) -> &S {
        &self.items
    }

    /// Requires at least `n` elements.
    pub fn min(mut self, n: usize) -> Self {
        self.min_items = Some(n);
        self
    }

    /// Requires at most `n` elements.
    pub fn max(mut self, n: usize) -> Self {
        self.max_items = Some(n);
        self
    }

    /// Uses `value` when the input is missing.
    pub fn default(mut self, value: Vec<S::Output>) -> Self {
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

impl<S: Schema> Schema for ArraySchema<S> {
    type Output = Vec<Parsed<S::Output>>;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<Self::Output> {
        let default = match (&self.default, input) {
            (Some(d), Input::Missing) => {
                Some(d.iter().cloned().map(Parsed::Value).collect::<Vec<_>>())
            }
            _ => None,
        };
        let value = match Presence::resolve(input, default.as_ref(), self.optional, self.nullable) {
            Presence::Settled(parsed) => return Ok(parsed),
            Presence::Check(value) => value,
        };
        let Value::Array(elements) = value else {
            return Err(ValidationErrors::single(Issue::TypeMismatch {
                expected: SchemaKind::Array,
            }));
        };

        let mut issues = Vec::new();
        if let Some(min_items) = self.min_items {
            if elements.len() < min_items {
                issues.push(Issue::TooFewItems { min_items });
            }
        }
        if let Some(max_items) = self.max_items {
            if elements.len() > max_items {
                issues.push(Issue::TooManyItems { max_items });
            }
        }

        let mut output = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match self.items.parse_input(Input::Present(element)) {
                Ok(parsed) => output.push(parsed),
                Err(errors) => issues.push(Issue::Element {
                    index,
                    issues: errors.into_inner(),
                }),
            }
        }

        match ValidationErrors::from_issues(issues) {
            Some(errors) => {
                tracing::trace!(
                    issues = errors.len(),
                    elements = elements.len(),
                    "array rejected"
                );
                Err(errors)
            }
            None => Ok(Parsed::Value(output)),
        }
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::Array {
                items: Box::new(self.items.definition()),
                min_items: self.min_items,
                max_items: self.max_items,
            },
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        let default = self
            .default
            .map(|d| d.into_iter().map(S::output_to_json).collect());
        SchemaNode::Array(Box::new(ArraySchema {
            items: self.items.into_node(),
            min_items: self.min_items,
            max_items: self.max_items,
            default,
            optional: self.optional,
            nullable: self.nullable,
        }))
    }

    fn output_to_json(output: Self::Output) -> Value {
        Value::Array(
            output
                .into_iter()
                .map(|p| match p {
                    Parsed::Value(v) => S::output_to_json(v),
                    Parsed::Null | Parsed::Missing => Value::Null,
                })
                .collect(),
        )
    }
}

impl<S: Schema> From<ArraySchema<S>> for SchemaNode {
    fn from(schema: ArraySchema<S>) -> Self {
        schema.into_node()
    }
}
