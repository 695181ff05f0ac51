#![deny(missing_docs)]

//! # Routes Command
//!
//! Lists the operations a manifest would document, one per line.

use crate::generate::load_with_overrides;
use rpc_openapi_core::error::AppResult;
use rpc_openapi_core::{walk, DefaultConverter, RouteMap};
use std::path::PathBuf;

/// Arguments for the routes command.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// Path to the procedure manifest (YAML or JSON).
    #[clap(long, env = "RPC_OPENAPI_MANIFEST")]
    pub manifest: PathBuf,

    /// Overrides the manifest's route prefix.
    #[clap(long, env = "RPC_OPENAPI_BASE_PATH")]
    pub base_path: Option<String>,
}

/// Executes the route listing.
pub fn execute(args: &RoutesArgs) -> AppResult<()> {
    let manifest = load_with_overrides(&args.manifest, None, None, args.base_path.as_deref())?;
    let routes = walk(&manifest.base_path, &manifest.router, &DefaultConverter);
    for line in format_routes(&routes) {
        println!("{}", line);
    }
    Ok(())
}

/// `METHOD route operationId` lines in route-map order.
fn format_routes(routes: &RouteMap) -> Vec<String> {
    routes
        .iter()
        .flat_map(|(route, item)| {
            item.iter()
                .map(move |(method, op)| format!("{} {} {}", method, route, op.operation_id))
        })
        .collect()
}
