#![deny(missing_docs)]

//! # RPC OpenAPI CLI
//!
//! Command Line Interface for documenting procedure manifests.
//!
//! Supported Commands:
//! - `generate`: Writes the OpenAPI 3.1 document for a manifest.
//! - `routes`: Lists the documented operations of a manifest.

use clap::{ArgAction, Parser, Subcommand};
use rpc_openapi_core::AppResult;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod generate;
mod routes;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Procedure tree to OpenAPI generator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate an OpenAPI document from a procedure manifest.
    Generate(generate::GenerateArgs),
    /// List the routes a procedure manifest documents.
    Routes(routes::RoutesArgs),
}

/// Initialize tracing on stderr based on verbosity level.
///
/// Without `-v` nothing is installed unless `RUST_LOG` is set.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => return,
            1 => "warn,rpc_openapi=info,rpc_openapi_core=info".to_string(),
            2 => "warn,rpc_openapi=debug,rpc_openapi_core=debug".to_string(),
            _ => "info,rpc_openapi=trace,rpc_openapi_core=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Routes(args) => routes::execute(args)?,
    }

    Ok(())
}
