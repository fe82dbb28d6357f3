//! # Projection Errors
//!
//! Projection only fails on schemas that cannot be expressed as GraphQL
//! types. These are mistakes in schema construction, not bad input data,
//! and the projector returns them instead of emitting a partial document.

use thiserror::Error;
use vschema_core::SchemaKind;

/// Error raised while projecting a schema to GraphQL SDL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The root handed to the projector is not an object schema.
    #[error(
        "cannot convert {kind} schema '{type_name}' to GraphQL SDL: \
         only object schemas are supported at the root"
    )]
    UnsupportedRoot {
        /// Requested name of the root type.
        type_name: String,
        /// Kind of the schema that was passed instead.
        kind: SchemaKind,
    },

    /// An object definition declares no fields. GraphQL object types need
    /// at least one.
    #[error("invalid object schema definition for type '{type_name}': no fields declared")]
    EmptyObject {
        /// Name the object type would have been emitted under.
        type_name: String,
    },
}
