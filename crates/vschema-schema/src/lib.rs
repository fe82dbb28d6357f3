//! # vschema-schema — Composable Validation Schemas
//!
//! Callers describe the expected shape of untrusted input as a tree of
//! schema nodes and validate values against it. A parse returns either the
//! normalized value or every issue found, never both.
//!
//! ## Node kinds
//!
//! | Factory | Node | `Output` |
//! |---------|------|----------|
//! | [`validate::string`] | [`StringSchema`] | `String` |
//! | [`validate::number`] | [`NumberSchema`] | `f64` |
//! | [`validate::boolean`] | [`BooleanSchema`] | `bool` |
//! | [`validate::enumeration`] | [`EnumSchema`] | `String` |
//! | [`validate::array`] | [`ArraySchema<S>`] | `Vec<Parsed<S::Output>>` |
//! | [`validate::object`] | [`ObjectSchema`] | `serde_json::Map<String, Value>` |
//!
//! [`SchemaNode`] is the closed sum of all kinds and is what object fields
//! store. Its output is a plain `serde_json::Value`.
//!
//! ## Static output types
//!
//! `Schema::Output` is the statically derived result type of a node. For
//! records, declare the matching Rust type next to the schema and call
//! [`Schema::parse_as`], which validates first and then deserializes the
//! normalized output.
//!
//! ## Crate Policy
//!
//! - Depends only on `vschema-core` internally.
//! - Nodes are immutable once built and are `Send + Sync`; a single tree can
//!   validate concurrently from any number of threads.
//! - Trees are acyclic by ownership: every node owns its children.

pub mod array;
pub mod boolean;
pub mod enumeration;
pub mod node;
pub mod number;
pub mod object;
pub mod string;
pub mod validate;

pub use array::ArraySchema;
pub use boolean::BooleanSchema;
pub use enumeration::EnumSchema;
pub use node::{Schema, SchemaNode};
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use string::StringSchema;

pub use vschema_core::{Input, ParseResult, Parsed, SchemaDef, ValidationErrors};
