#![deny(missing_docs)]

//! # RPC OpenAPI Core
//!
//! Turns a tree of declared remote procedures into an OpenAPI 3.1 document.
//! Queries are documented as `GET` with a single JSON-valued `input` query
//! parameter, mutations as `POST` with a JSON request body, and every output is
//! wrapped in the `{ result: { data } }` success envelope. Subscriptions are
//! left out.

/// Shared error types.
pub mod error;

/// Procedure tree declarations.
pub mod procedure;

/// Type shapes and Rust type expression mapping.
pub mod type_mapping;

/// JSON Schema generation.
pub mod schema_generator;

/// OpenAPI (OAS) document generation.
pub mod oas;

/// Manifest loading.
pub mod manifest;

pub use error::{AppError, AppResult};
pub use manifest::{load_manifest, read_manifest, Manifest};
pub use oas::{
    generate_openapi_document, generate_openapi_document_with, translate, walk,
    GenerateOptions, OpenApiDocument, RouteMap,
};
pub use procedure::{Procedure, ProcedureKind, ProcedureTree, RouterEntry};
pub use schema_generator::{DefaultConverter, SchemaConverter};
pub use type_mapping::{map_rust_type, NamedTypeResolver, TypeShape};
