//! # Object Schema
//!
//! Validates a record against a fixed, ordered list of fields. Every field is
//! attempted, whether or not an earlier one failed, and each field issue is
//! prefixed with the field name. Properties the schema does not declare are
//! ignored and dropped from the output.
//!
//! Output maps follow declaration order. A missing optional field is left
//! out of the output; a nullable field that was `null` is kept as `null`.

use serde_json::{Map, Value};
use vschema_core::{
    FieldDef, Input, Issue, KindDef, ParseResult, Parsed, SchemaDef, SchemaKind, ValidationErrors,
};

use crate::node::{Presence, Schema, SchemaNode};

/// Validates records with named fields.
///
/// ```
/// use serde_json::json;
/// use vschema_schema::{validate, Schema};
///
/// let user = validate::object()
///     .field("name", validate::string().min(1))
///     .field("age", validate::number().int());
///
/// let errors = user.parse(&json!({"name": "", "age": 1.5})).unwrap_err();
/// assert_eq!(
///     errors.messages(),
///     vec!["name: String must be at least 1 characters", "age: Number not integer"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, SchemaNode)>,
    default: Option<Map<String, Value>>,
    optional: bool,
    nullable: bool,
}

impl ObjectSchema {
    /// An object schema with no fields.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Declares a field. Redeclaring a name replaces its schema in place.
    pub fn field(mut self, name: impl Into<String>, schema: impl Schema) -> Self {
        let name = name.into();
        let node = schema.into_node();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = node,
            None => self.fields.push((name, node)),
        }
        self
    }

    /// Looks up a declared field.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Iterates over the declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Uses `value` when the input is missing.
    pub fn default(mut self, value: Map<String, Value>) -> Self {
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

impl Schema for ObjectSchema {
    type Output = Map<String, Value>;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<Self::Output> {
        let presence =
            Presence::resolve(input, self.default.as_ref(), self.optional, self.nullable);
        let value = match presence {
            Presence::Settled(parsed) => return Ok(parsed),
            Presence::Check(value) => value,
        };
        let Value::Object(record) = value else {
            return Err(ValidationErrors::single(Issue::TypeMismatch {
                expected: SchemaKind::Object,
            }));
        };

        let mut issues = Vec::new();
        let mut output = Map::new();
        for (name, schema) in &self.fields {
            match schema.parse_input(Input::from(record.get(name))) {
                Ok(Parsed::Value(v)) => {
                    output.insert(name.clone(), v);
                }
                Ok(Parsed::Null) => {
                    output.insert(name.clone(), Value::Null);
                }
                Ok(Parsed::Missing) => {}
                Err(errors) => {
                    issues.extend(errors.into_iter().map(|issue| issue.in_field(name.as_str())));
                }
            }
        }

        match ValidationErrors::from_issues(issues) {
            Some(errors) => {
                tracing::trace!(
                    issues = errors.len(),
                    fields = self.fields.len(),
                    "object rejected"
                );
                Err(errors)
            }
            None => Ok(Parsed::Value(output)),
        }
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef {
            kind: KindDef::Object {
                fields: self
                    .fields
                    .iter()
                    .map(|(name, schema)| FieldDef {
                        name: name.clone(),
                        schema: schema.definition(),
                    })
                    .collect(),
            },
            optional: self.optional,
            nullable: self.nullable,
        }
    }

    fn into_node(self) -> SchemaNode {
        SchemaNode::Object(self)
    }

    fn output_to_json(output: Self::Output) -> Value {
        Value::Object(output)
    }
}
