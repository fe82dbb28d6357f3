//! # Parse Input and Output
//!
//! [`Input`] is what a schema node is asked to validate: either a present
//! JSON value (which may be `null`) or nothing at all, the way a missing
//! object property arrives. [`Parsed`] is the successful outcome and keeps
//! the same three-way split on the way out.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationErrors;

/// Result of parsing one value against a schema.
pub type ParseResult<T> = Result<Parsed<T>, ValidationErrors>;

/// A value handed to a schema node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// The value is absent, e.g. the property does not exist on the record.
    Missing,
    /// The value is present. JSON `null` is a present value.
    Present(&'a Value),
}

impl<'a> Input<'a> {
    /// Returns true for [`Input::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true for a present JSON `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Present(Value::Null))
    }

    /// Returns the present value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Self::Missing => None,
            Self::Present(v) => Some(v),
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Missing, Self::Present)
    }
}

/// Successful outcome of a parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// A validated, normalized value (or the configured default).
    Value(T),
    /// A present `null` accepted by a nullable schema.
    Null,
    /// A missing value accepted by an optional schema.
    Missing,
}

impl<T> Parsed<T> {
    /// Returns true for [`Parsed::Value`].
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true for [`Parsed::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for [`Parsed::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Borrows the contained value.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::Missing => None,
        }
    }

    /// Collapses `Null` and `Missing` into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Null | Self::Missing => None,
        }
    }

    /// Maps the contained value, leaving `Null` and `Missing` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Self::Value(v) => Parsed::Value(f(v)),
            Self::Null => Parsed::Null,
            Self::Missing => Parsed::Missing,
        }
    }
}

impl<T: Serialize> Serialize for Parsed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Null | Self::Missing => serializer.serialize_none(),
        }
    }
}
