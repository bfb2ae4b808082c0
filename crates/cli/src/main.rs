//! Roastery CLI - Inspect schemas and validate record files.
//!
//! # Usage
//!
//! ```bash
//! # List schemas and their collections
//! roastery collections
//!
//! # Show the fields of a schema
//! roastery describe coffeeitem
//!
//! # Print a schema as JSON Schema
//! roastery describe ContactMessage --json-schema
//!
//! # Validate a file of records
//! roastery validate coffeeitem menu.yaml
//! ```
//!
//! # Commands
//!
//! - `collections` - List schemas and collection names
//! - `describe` - Show a schema's fields or JSON Schema
//! - `validate` - Validate records from a file or stdin

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use roastery_core::SchemaKind;

mod commands;
mod config;
mod error;
mod input;
mod output;

use config::{CliConfig, LogFormat};
use error::CliError;
use input::InputFormat;

#[derive(Parser)]
#[command(name = "roastery")]
#[command(author, version, about = "Roastery schema tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List schemas and the collections they are stored in
    Collections,
    /// Show the fields of a schema
    Describe {
        /// Schema type name or collection name
        #[arg(value_parser = SchemaKind::lookup)]
        schema: SchemaKind,

        /// Print a JSON Schema document instead of a field table
        #[arg(long)]
        json_schema: bool,
    },
    /// Validate records against a schema
    Validate {
        /// Schema type name or collection name
        #[arg(value_parser = SchemaKind::lookup)]
        schema: SchemaKind,

        /// Record file (JSON or YAML); reads stdin when omitted or `-`
        path: Option<PathBuf>,

        /// Input format (default: from file extension, JSON for stdin)
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,
    },
}

/// Initialize tracing on stderr.
///
/// Defaults to info level for our crate if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "roastery_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Collections => output::stdout(&commands::collections::render()).await?,
        Commands::Describe {
            schema,
            json_schema,
        } => {
            let text = if json_schema {
                commands::describe::render_json_schema(schema, config.output)?
            } else {
                commands::describe::render_table(schema)
            };
            output::stdout(&text).await?;
        }
        Commands::Validate {
            schema,
            path,
            format,
        } => commands::validate::run(schema, path.as_deref(), format, config).await?,
    }
    Ok(())
}
