//! # vschema-core — Foundational Types for vschema
//!
//! This crate is the leaf of the vschema workspace. It defines the types
//! that every other crate exchanges: the introspectable schema definition
//! record, the parse input/output wrappers, and the error taxonomy.
//!
//! ## Key Design Principles
//!
//! 1. **Closed definition union.** [`KindDef`] is one enum with six variants.
//!    Every consumer (the validation engine, the GraphQL projector) matches it
//!    exhaustively, so adding a kind forces every consumer to handle it.
//!
//! 2. **Missing is not null.** [`Input::Missing`] models an absent field and
//!    is distinct from a present JSON `null`. The same split is carried on the
//!    output side by [`Parsed`].
//!
//! 3. **Errors are values.** Validation failures are collected into
//!    [`ValidationErrors`], an ordered list of [`Issue`]s. Parsing never
//!    panics on bad input.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vschema-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod definition;
pub mod error;
pub mod parsed;

// Re-export primary types for ergonomic imports.
pub use definition::{FieldDef, KindDef, SchemaDef, SchemaKind};
pub use error::{Issue, IssueCategory, SchemaError, ValidationErrors, VschemaError};
pub use parsed::{Input, ParseResult, Parsed};
