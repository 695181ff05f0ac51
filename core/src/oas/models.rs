#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! The subset of the OpenAPI 3.1 object model that generated documents use.
//! Optional members are skipped when absent, so a bodyless response serializes
//! as `{"description": ...}` and an operation without input has neither
//! `parameters` nor `requestBody`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The OpenAPI version written to every document.
pub const OPENAPI_VERSION: &str = "3.1.0";

/// Media type used for every schema-bearing entry.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Description attached to every `200` response.
pub const SUCCESS_DESCRIPTION: &str = "Successful response";

/// Route string to path item.
pub type RouteMap = IndexMap<String, PathItem>;

/// HTTP method to operation, for a single route.
pub type PathItem = IndexMap<HttpMethod, Operation>;

/// Media type string to media type object.
pub type Content = IndexMap<String, MediaType>;

/// HTTP methods a procedure can be documented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`, used for queries.
    Get,
    /// `POST`, used for mutations.
    Post,
}

impl HttpMethod {
    /// Upper-case method name, as written in HTTP requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// The URL query string.
    Query,
}

/// A top-level OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version, always [`OPENAPI_VERSION`].
    pub openapi: String,
    /// API metadata.
    pub info: Info,
    /// Documented routes.
    pub paths: RouteMap,
    /// Reusable components. Always empty; schemas are inlined.
    pub components: Map<String, Value>,
}

/// The `info` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
}

/// A single documented operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Procedure name.
    pub operation_id: String,
    /// Present only for queries that declare an input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Present only for mutations that declare an input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Status code to response.
    pub responses: IndexMap<String, Response>,
}

/// A content-bearing parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Serialized value description.
    pub content: Content,
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether the body must be sent.
    pub required: bool,
    /// Body description per media type.
    pub content: Content,
}

/// A response description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Human-readable description.
    pub description: String,
    /// Body description per media type; absent for bodyless responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// A media type entry holding a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// JSON Schema of the payload.
    pub schema: Value,
}

/// Wraps `schema` as `{"application/json": {"schema": schema}}`.
pub fn json_content(schema: Value) -> Content {
    let mut content = Content::new();
    content.insert(JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    content
}
