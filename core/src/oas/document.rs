#![deny(missing_docs)]

//! # OpenAPI Document Generation
//!
//! Assembles the top-level document around the route map produced by
//! [`walk`](crate::oas::routes::walk), and serializes it.

use crate::error::{AppError, AppResult};
use crate::oas::models::{Info, OpenApiDocument, OPENAPI_VERSION};
use crate::oas::routes::walk;
use crate::procedure::ProcedureTree;
use crate::schema_generator::{DefaultConverter, SchemaConverter};
use serde_json::Map;

/// Inputs for [`generate_openapi_document`].
#[derive(Debug)]
pub struct GenerateOptions<'a, T> {
    /// `info.title` of the document.
    pub title: &'a str,
    /// `info.version` of the document.
    pub version: &'a str,
    /// Prefix of every route, used verbatim.
    pub base_path: &'a str,
    /// The procedures to document.
    pub router: &'a ProcedureTree<T>,
}

/// Generates a document using [`DefaultConverter`] for type descriptions.
pub fn generate_openapi_document<T>(options: &GenerateOptions<'_, T>) -> OpenApiDocument
where
    DefaultConverter: SchemaConverter<T>,
{
    generate_openapi_document_with(options, &DefaultConverter)
}

/// Generates a document, converting type descriptions with `converter`.
pub fn generate_openapi_document_with<T, C>(
    options: &GenerateOptions<'_, T>,
    converter: &C,
) -> OpenApiDocument
where
    C: SchemaConverter<T> + ?Sized,
{
    let paths = walk(options.base_path, options.router, converter);
    tracing::debug!(
        title = options.title,
        version = options.version,
        base_path = options.base_path,
        routes = paths.len(),
        "generated OpenAPI document"
    );

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: options.title.to_string(),
            version: options.version.to_string(),
        },
        paths,
        components: Map::new(),
    }
}

impl OpenApiDocument {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e)))
    }

    /// YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::General(format!("YAML serialization failed: {}", e)))
    }
}
