//! # vschema-graphql — GraphQL SDL Projection
//!
//! Converts object schemas built with `vschema-schema` into GraphQL Schema
//! Definition Language.
//!
//! ## Entry points
//!
//! - [`to_graphql_sdl`] — one root object type plus every nested type and
//!   enum it references.
//! - [`generate_graphql_schema`] — several named roots sharing one
//!   [`TypeRegistry`], so common nested types are emitted once.
//! - [`schema_def_to_graphql_type`] — the type reference of a single field.
//! - [`to_graphql_type_config`] — a flat, serializable field-type listing.
//!
//! ## Determinism
//!
//! Given the same schema tree, projection always yields the same type
//! names in the same order: fields are visited in declaration order,
//! depth-first, and the registry mints names from per-base counters that
//! start fresh with every call.
//!
//! ## Crate Policy
//!
//! - A registry never outlives the call that created it. There is no
//!   process-wide state, so concurrent projections are independent.
//! - Projection errors are returned, never panicked, and no partial
//!   document is produced on failure.

pub mod config;
pub mod error;
pub mod registry;
pub mod sdl;

pub use config::{to_graphql_type_config, GraphQLFieldConfig, GraphQLTypeConfig};
pub use error::ProjectionError;
pub use registry::TypeRegistry;
pub use sdl::{
    definition_to_graphql_sdl, generate_graphql_schema, resolve_root, schema_def_to_graphql_type,
    to_graphql_sdl,
};
