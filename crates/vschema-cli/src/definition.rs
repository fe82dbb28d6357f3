//! # Definition Subcommand
//!
//! Prints the introspectable definition of a demo schema as JSON.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use vschema_schema::Schema;

use crate::demo::Demo;

/// Arguments for the definition subcommand.
#[derive(Args, Debug)]
pub struct DefinitionArgs {
    /// Demo schema to describe.
    #[arg(value_enum)]
    pub demo: Demo,
}

/// Execute the definition subcommand.
pub fn run_definition(args: &DefinitionArgs, out: &mut impl Write) -> Result<u8> {
    let definition = args.demo.schema()?.definition();
    writeln!(out, "{}", serde_json::to_string_pretty(&definition)?)?;
    Ok(0)
}
