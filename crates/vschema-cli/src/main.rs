//! # vschema CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vschema_cli::definition::{run_definition, DefinitionArgs};
use vschema_cli::sdl::{run_sdl, SdlArgs};
use vschema_cli::validate::{run_validate, ValidateArgs};

/// Exit code for failures other than an invalid document.
const EXIT_ERROR: u8 = 2;

/// vschema — composable data validation with GraphQL SDL projection.
#[derive(Parser, Debug)]
#[command(name = "vschema", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the GraphQL SDL of one or more demo schemas.
    Sdl(SdlArgs),

    /// Validate a JSON document against a demo schema.
    Validate(ValidateArgs),

    /// Print the definition of a demo schema as JSON.
    Definition(DefinitionArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let result = match cli.command {
        Commands::Sdl(args) => run_sdl(&args, &mut stdout.lock()),
        Commands::Validate(args) => run_validate(
            &args,
            std::io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        ),
        Commands::Definition(args) => run_definition(&args, &mut stdout.lock()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
