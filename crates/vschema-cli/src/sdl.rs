//! # SDL Subcommand
//!
//! Prints the GraphQL SDL of one or more demo schemas. Several demos are
//! projected through one registry, so nested types and enums they share by
//! name are emitted once.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use vschema_graphql::{generate_graphql_schema, to_graphql_type_config, GraphQLTypeConfig};
use vschema_schema::ObjectSchema;

use crate::demo::Demo;

/// Output formats for the sdl subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SdlFormat {
    /// A GraphQL SDL document.
    #[default]
    Sdl,
    /// Flat type configs as JSON.
    Config,
}

/// Arguments for the sdl subcommand.
#[derive(Args, Debug)]
pub struct SdlArgs {
    /// Demo schemas to project, in emission order.
    #[arg(required = true, value_enum)]
    pub demos: Vec<Demo>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SdlFormat::Sdl)]
    pub format: SdlFormat,
}

/// Execute the sdl subcommand.
pub fn run_sdl(args: &SdlArgs, out: &mut impl Write) -> Result<u8> {
    let schemas = args
        .demos
        .iter()
        .map(|demo| -> Result<(&'static str, ObjectSchema)> {
            Ok((demo.type_name(), demo.schema()?))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(roots = schemas.len(), format = ?args.format, "projecting demo schemas");

    match args.format {
        SdlFormat::Sdl => {
            let sdl = generate_graphql_schema(schemas.iter().map(|(name, schema)| (*name, schema)))
                .context("failed to project demo schemas")?;
            writeln!(out, "{sdl}")?;
        }
        SdlFormat::Config => {
            let configs = schemas
                .iter()
                .map(|(name, schema)| to_graphql_type_config(schema, name))
                .collect::<Result<Vec<GraphQLTypeConfig>, _>>()
                .context("failed to build type configs")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&configs)?)?;
        }
    }
    Ok(0)
}
