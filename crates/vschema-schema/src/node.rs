//! # The Schema Contract
//!
//! [`Schema`] is the one capability every node exposes: parse an input and
//! describe yourself. [`SchemaNode`] is the closed sum of all node kinds and
//! is what object fields hold, so a heterogeneous record can be validated
//! through a single dynamic type.
//!
//! ## Parse order
//!
//! Every node evaluates the same preamble before its own checks:
//!
//! 1. Missing input with a default yields the default.
//! 2. Missing input on an optional node yields [`Parsed::Missing`].
//! 3. `null` on a nullable node yields [`Parsed::Null`].
//! 4. Otherwise the kind-specific checks run. The base type check
//!    short-circuits; constraint checks are all collected.
//!
//! The preamble lives in [`Presence::resolve`] so no node can reorder it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use vschema_core::{Input, ParseResult, Parsed, SchemaDef, VschemaError};

use crate::array::ArraySchema;
use crate::boolean::BooleanSchema;
use crate::enumeration::EnumSchema;
use crate::number::NumberSchema;
use crate::object::ObjectSchema;
use crate::string::StringSchema;

/// A validator that can be composed into a schema tree.
///
/// `Output` is the statically known shape of a successful parse. Object
/// schemas produce a dynamic JSON map; callers that want a concrete record
/// type declare it alongside the schema and use [`Schema::parse_as`].
pub trait Schema {
    /// Normalized value produced on success.
    type Output: Serialize + Clone;

    /// Validates `input` and returns the normalized value or every issue found.
    fn parse_input(&self, input: Input<'_>) -> ParseResult<Self::Output>;

    /// Returns the introspectable description of this node.
    fn definition(&self) -> SchemaDef;

    /// Converts this node into the dynamic [`SchemaNode`] form.
    fn into_node(self) -> SchemaNode
    where
        Self: Sized;

    /// Converts a parse output into its JSON representation.
    fn output_to_json(output: Self::Output) -> Value
    where
        Self: Sized;

    /// Validates a present value.
    fn parse(&self, value: &Value) -> ParseResult<Self::Output> {
        self.parse_input(Input::Present(value))
    }

    /// Validates an absent value, as if the property did not exist.
    fn parse_missing(&self) -> ParseResult<Self::Output> {
        self.parse_input(Input::Missing)
    }

    /// Validates `value`, then deserializes the normalized output into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`VschemaError::Validation`] when the input is rejected and
    /// [`VschemaError::OutputMismatch`] when `T` does not fit the output.
    fn parse_as<T: DeserializeOwned>(&self, value: &Value) -> Result<Parsed<T>, VschemaError>
    where
        Self: Sized,
    {
        match self.parse(value)? {
            Parsed::Value(output) => {
                let json = Self::output_to_json(output);
                Ok(Parsed::Value(serde_json::from_value(json)?))
            }
            Parsed::Null => Ok(Parsed::Null),
            Parsed::Missing => Ok(Parsed::Missing),
        }
    }
}

static NULL: Value = Value::Null;

/// Outcome of the shared presence preamble.
pub(crate) enum Presence<'a, T> {
    /// The preamble settled the result.
    Settled(Parsed<T>),
    /// A present value that still needs kind-specific checks.
    Check(&'a Value),
}

impl<'a, T: Clone> Presence<'a, T> {
    /// Applies default, optional and nullable handling, in that order.
    pub(crate) fn resolve(
        input: Input<'a>,
        default: Option<&T>,
        optional: bool,
        nullable: bool,
    ) -> Self {
        match input {
            Input::Missing => match default {
                Some(d) => Self::Settled(Parsed::Value(d.clone())),
                None if optional => Self::Settled(Parsed::Missing),
                // A required value that is missing fails the type check,
                // the same way an explicit wrong-kind value does.
                None => Self::Check(&NULL),
            },
            Input::Present(Value::Null) if nullable => Self::Settled(Parsed::Null),
            Input::Present(value) => Self::Check(value),
        }
    }
}

/// Any schema node, as a closed set of variants.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// See [`StringSchema`].
    String(StringSchema),
    /// See [`NumberSchema`].
    Number(NumberSchema),
    /// See [`BooleanSchema`].
    Boolean(BooleanSchema),
    /// See [`EnumSchema`].
    Enum(EnumSchema),
    /// See [`ArraySchema`].
    Array(Box<ArraySchema<SchemaNode>>),
    /// See [`ObjectSchema`].
    Object(ObjectSchema),
}

impl Schema for SchemaNode {
    type Output = Value;

    fn parse_input(&self, input: Input<'_>) -> ParseResult<Value> {
        match self {
            Self::String(s) => Ok(s.parse_input(input)?.map(StringSchema::output_to_json)),
            Self::Number(s) => Ok(s.parse_input(input)?.map(NumberSchema::output_to_json)),
            Self::Boolean(s) => Ok(s.parse_input(input)?.map(BooleanSchema::output_to_json)),
            Self::Enum(s) => Ok(s.parse_input(input)?.map(EnumSchema::output_to_json)),
            Self::Array(s) => Ok(s
                .parse_input(input)?
                .map(ArraySchema::<SchemaNode>::output_to_json)),
            Self::Object(s) => Ok(s.parse_input(input)?.map(ObjectSchema::output_to_json)),
        }
    }

    fn definition(&self) -> SchemaDef {
        match self {
            Self::String(s) => s.definition(),
            Self::Number(s) => s.definition(),
            Self::Boolean(s) => s.definition(),
            Self::Enum(s) => s.definition(),
            Self::Array(s) => s.definition(),
            Self::Object(s) => s.definition(),
        }
    }

    fn into_node(self) -> SchemaNode {
        self
    }

    fn output_to_json(output: Value) -> Value {
        output
    }
}

impl From<StringSchema> for SchemaNode {
    fn from(schema: StringSchema) -> Self {
        Self::String(schema)
    }
}

impl From<NumberSchema> for SchemaNode {
    fn from(schema: NumberSchema) -> Self {
        Self::Number(schema)
    }
}

impl From<BooleanSchema> for SchemaNode {
    fn from(schema: BooleanSchema) -> Self {
        Self::Boolean(schema)
    }
}

impl From<EnumSchema> for SchemaNode {
    fn from(schema: EnumSchema) -> Self {
        Self::Enum(schema)
    }
}

impl From<ObjectSchema> for SchemaNode {
    fn from(schema: ObjectSchema) -> Self {
        Self::Object(schema)
    }
}
