#![deny(missing_docs)]

//! # OpenAPI Generation Module
//!
//! - **models**: The OpenAPI object model written to documents.
//! - **routes**: Tree walking and per-procedure route building.
//! - **document**: Top-level document assembly and serialization.

pub mod document;
pub mod models;
pub mod routes;

pub use document::{generate_openapi_document, generate_openapi_document_with, GenerateOptions};
pub use models::{OpenApiDocument, RouteMap};
pub use routes::builder::translate;
pub use routes::walk;
