//! # Validate Subcommand
//!
//! Parses a JSON document against a demo schema. On success the normalized
//! value is printed; on failure every issue is printed, one per line, and
//! the exit code is 1.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use vschema_schema::{Parsed, Schema};

use crate::demo::Demo;

/// Exit code for a document that failed validation.
pub const EXIT_INVALID: u8 = 1;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Demo schema to validate against.
    #[arg(value_enum)]
    pub demo: Demo,

    /// JSON document to validate. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// `stdin` is only read when no file is given.
pub fn run_validate(
    args: &ValidateArgs,
    stdin: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    let document = read_document(args.file.as_deref(), stdin)?;
    let schema = args.demo.schema()?;

    match schema.parse(&document) {
        Ok(Parsed::Value(record)) => {
            tracing::info!(demo = ?args.demo, "document is valid");
            writeln!(out, "{}", serde_json::to_string_pretty(&Value::Object(record))?)?;
            Ok(0)
        }
        // Object roots are neither optional nor nullable.
        Ok(Parsed::Null | Parsed::Missing) => {
            writeln!(out, "null")?;
            Ok(0)
        }
        Err(errors) => {
            tracing::info!(demo = ?args.demo, issues = errors.len(), "document is invalid");
            for message in errors.messages() {
                writeln!(err, "{message}")?;
            }
            Ok(EXIT_INVALID)
        }
    }
}

fn read_document(file: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))
        }
        _ => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            serde_json::from_str(&text).context("stdin is not valid JSON")
        }
    }
}
