//! # Error Types — Validation Issues and Construction Errors
//!
//! Defines the error types used throughout vschema. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Bad input data is never a fault. It produces a [`ValidationErrors`]
//!   list returned from `parse`, in declaration order for object fields
//!   and index order for array elements.
//! - The `Display` text of each [`Issue`] is the human-readable message
//!   callers see. Nesting is expressed structurally (`Field`, `Element`)
//!   and rendered as a `field: ` or `Item at index I: ` prefix.
//! - Mistakes in schema construction are [`SchemaError`]s and surface
//!   when the schema is built, not when it is used.

use std::fmt;

use thiserror::Error;

use crate::definition::SchemaKind;

/// Coarse classification of an [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// The value has the wrong native kind.
    TypeMismatch,
    /// The value has the right kind but violates a constraint.
    ConstraintViolation,
    /// A field of an object failed.
    FieldError,
    /// An element of an array failed.
    ElementError,
}

/// A single validation failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Issue {
    /// The value is not of the expected native kind.
    #[error("{}", type_mismatch_message(.expected))]
    TypeMismatch {
        /// Kind of the schema that rejected the value.
        expected: SchemaKind,
    },

    /// String shorter than the configured minimum.
    #[error("String must be at least {min_length} characters")]
    StringTooShort {
        /// Configured minimum length.
        min_length: usize,
    },

    /// Number below the inclusive lower bound.
    #[error("Number must be at least {min}")]
    NumberTooSmall {
        /// Configured lower bound.
        min: f64,
    },

    /// Number above the inclusive upper bound.
    #[error("Number must be at most {max}")]
    NumberTooLarge {
        /// Configured upper bound.
        max: f64,
    },

    /// Number with a fractional part where an integer is required.
    #[error("Number not integer")]
    NotInteger,

    /// String outside the enum's allowed set.
    #[error("Value must be one of: {}", .options.join(", "))]
    NotInEnum {
        /// Allowed values in declaration order.
        options: Vec<String>,
    },

    /// Array shorter than the configured minimum.
    #[error("Array must have at least {min_items} items")]
    TooFewItems {
        /// Configured minimum length.
        min_items: usize,
    },

    /// Array longer than the configured maximum.
    #[error("Array must have at most {max_items} items")]
    TooManyItems {
        /// Configured maximum length.
        max_items: usize,
    },

    /// One failure of a named object field.
    #[error("{field}: {issue}")]
    Field {
        /// Name of the failing field.
        field: String,
        /// The field's own failure.
        issue: Box<Issue>,
    },

    /// All failures of one array element.
    #[error("Item at index {index}: {}", join_issues(.issues))]
    Element {
        /// Zero-based position of the element.
        index: usize,
        /// The element's failures, in the order the element reported them.
        issues: Vec<Issue>,
    },
}

fn type_mismatch_message(expected: &SchemaKind) -> &'static str {
    match expected {
        SchemaKind::String | SchemaKind::Enum => "Not a string",
        SchemaKind::Number => "Not a number",
        SchemaKind::Boolean => "Not a boolean",
        SchemaKind::Array => "Not an array",
        SchemaKind::Object => "Not an object",
    }
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Issue {
    /// Returns the coarse classification of this issue.
    pub fn category(&self) -> IssueCategory {
        match self {
            Self::TypeMismatch { .. } => IssueCategory::TypeMismatch,
            Self::StringTooShort { .. }
            | Self::NumberTooSmall { .. }
            | Self::NumberTooLarge { .. }
            | Self::NotInteger
            | Self::NotInEnum { .. }
            | Self::TooFewItems { .. }
            | Self::TooManyItems { .. } => IssueCategory::ConstraintViolation,
            Self::Field { .. } => IssueCategory::FieldError,
            Self::Element { .. } => IssueCategory::ElementError,
        }
    }

    /// Wraps this issue as a failure of the named field.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            issue: Box::new(self),
        }
    }
}

/// Ordered, non-empty list of issues reported by one failing `parse`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    /// Builds a list from collected issues.
    ///
    /// Returns `None` when `issues` is empty so that a failure can never
    /// carry zero errors.
    pub fn from_issues(issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// A list holding exactly one issue.
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns a slice of all issues.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Renders every issue to its message, preserving order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Issue> {
        self.issues
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

/// Error raised while constructing a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An enum was declared without any allowed value.
    #[error("enum schema requires at least one option")]
    EmptyEnum,

    /// An enum option was declared twice.
    #[error("enum option '{option}' is declared more than once")]
    DuplicateEnumOption {
        /// The repeated option.
        option: String,
    },
}

/// Top-level error type for vschema.
#[derive(Error, Debug)]
pub enum VschemaError {
    /// The input did not conform to the schema.
    #[error("validation failed:\n{0}")]
    Validation(#[from] ValidationErrors),

    /// The schema itself was malformed.
    #[error("schema construction error: {0}")]
    Schema(#[from] SchemaError),

    /// A validated value could not be converted into the caller's type.
    #[error("parsed value does not match the target type: {0}")]
    OutputMismatch(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_messages() {
        let msg = |kind| Issue::TypeMismatch { expected: kind }.to_string();
        assert_eq!(msg(SchemaKind::String), "Not a string");
        assert_eq!(msg(SchemaKind::Enum), "Not a string");
        assert_eq!(msg(SchemaKind::Number), "Not a number");
        assert_eq!(msg(SchemaKind::Boolean), "Not a boolean");
        assert_eq!(msg(SchemaKind::Array), "Not an array");
        assert_eq!(msg(SchemaKind::Object), "Not an object");
    }

    #[test]
    fn test_number_bounds_render_without_trailing_zero() {
        assert_eq!(
            Issue::NumberTooSmall { min: 18.0 }.to_string(),
            "Number must be at least 18"
        );
        assert_eq!(
            Issue::NumberTooLarge { max: 2.5 }.to_string(),
            "Number must be at most 2.5"
        );
    }

    #[test]
    fn test_enum_message_lists_options_in_order() {
        let issue = Issue::NotInEnum {
            options: vec!["admin".into(), "user".into(), "moderator".into()],
        };
        assert_eq!(issue.to_string(), "Value must be one of: admin, user, moderator");
        assert_eq!(issue.category(), IssueCategory::ConstraintViolation);
    }

    #[test]
    fn test_nested_prefixes() {
        let inner = Issue::Element {
            index: 2,
            issues: vec![
                Issue::TypeMismatch {
                    expected: SchemaKind::String,
                }
                .in_field("name"),
                Issue::NotInteger.in_field("age"),
            ],
        };
        let outer = inner.in_field("users");
        assert_eq!(
            outer.to_string(),
            "users: Item at index 2: name: Not a string, age: Number not integer"
        );
        assert_eq!(outer.category(), IssueCategory::FieldError);
    }

    #[test]
    fn test_validation_errors_never_empty() {
        assert!(ValidationErrors::from_issues(Vec::new()).is_none());
        let errors = ValidationErrors::from_issues(vec![
            Issue::TooFewItems { min_items: 1 },
            Issue::NotInteger,
        ])
        .unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.messages(),
            vec!["Array must have at least 1 items", "Number not integer"]
        );
        assert_eq!(
            errors.to_string(),
            "Array must have at least 1 items\nNumber not integer"
        );
    }

    #[test]
    fn test_top_level_error_wraps_validation() {
        let err: VschemaError = ValidationErrors::single(Issue::NotInteger).into();
        assert!(matches!(err, VschemaError::Validation(_)));
        assert_eq!(err.to_string(), "validation failed:\nNumber not integer");
    }

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::DuplicateEnumOption {
                option: "draft".into()
            }
            .to_string(),
            "enum option 'draft' is declared more than once"
        );
    }
}
