//! # vschema-cli — Command-Line Interface
//!
//! Thin clap front end over the library crates, driven by a set of bundled
//! demo schemas.
//!
//! ## Subcommands
//!
//! - `sdl` — GraphQL SDL (or type configs) for one or more demos
//! - `validate` — parse a JSON document against a demo schema
//! - `definition` — dump a demo's schema definition as JSON
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; every handler is a
//!   `run_*` function returning the process exit code.
//! - Handlers write to caller-supplied writers so they can be tested
//!   without spawning the binary.
//! - No validation or projection logic lives here.

pub mod definition;
pub mod demo;
pub mod sdl;
pub mod validate;
