#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads a procedure manifest and writes the OpenAPI document it describes.

use rpc_openapi_core::error::{AppError, AppResult};
use rpc_openapi_core::{generate_openapi_document, read_manifest, Manifest, OpenApiDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the procedure manifest (YAML or JSON).
    #[clap(long, env = "RPC_OPENAPI_MANIFEST")]
    pub manifest: PathBuf,

    /// Output path for the document.
    /// Supports .json and .yaml/.yml extensions.
    /// If not provided, prints JSON to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Overrides the manifest's API title.
    #[clap(long)]
    pub title: Option<String>,

    /// Overrides the manifest's API version.
    #[clap(long)]
    pub api_version: Option<String>,

    /// Overrides the manifest's route prefix (e.g. `/trpc`).
    #[clap(long, env = "RPC_OPENAPI_BASE_PATH")]
    pub base_path: Option<String>,
}

/// Loads the manifest named by `manifest` and applies command-line overrides.
pub fn load_with_overrides(
    manifest: &Path,
    title: Option<&str>,
    version: Option<&str>,
    base_path: Option<&str>,
) -> AppResult<Manifest> {
    if !manifest.exists() {
        return Err(AppError::General(format!(
            "Manifest file not found: {:?}",
            manifest
        )));
    }
    let mut loaded = read_manifest(manifest)?;
    if let Some(title) = title {
        loaded.title = title.to_string();
    }
    if let Some(version) = version {
        loaded.version = version.to_string();
    }
    if let Some(base_path) = base_path {
        loaded.base_path = base_path.to_string();
    }
    Ok(loaded)
}

/// Executes the document generation.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    let manifest = load_with_overrides(
        &args.manifest,
        args.title.as_deref(),
        args.api_version.as_deref(),
        args.base_path.as_deref(),
    )?;
    let document = generate_openapi_document(&manifest.options());
    tracing::info!(routes = document.paths.len(), "document generated");

    let output_str = render(&document, args.output.as_deref())?;

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output directory: {}", e))
                })?;
            }
        }
        fs::write(out_path, output_str)
            .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
        tracing::info!(path = %out_path.display(), "wrote OpenAPI document");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

/// Serializes by output extension; stdout defaults to JSON.
fn render(document: &OpenApiDocument, output: Option<&Path>) -> AppResult<String> {
    let ext = output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .unwrap_or("json");
    match ext {
        "yaml" | "yml" => document.to_yaml(),
        _ => document.to_json(),
    }
}
