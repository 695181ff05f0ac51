#![deny(missing_docs)]

//! # Route Builder
//!
//! Translates one procedure into its route fragment: method, input parameter
//! or request body, and the enveloped `200` response.

use crate::oas::models::{
    json_content, HttpMethod, Operation, Parameter, ParameterLocation, PathItem, RequestBody,
    Response, RouteMap, SUCCESS_DESCRIPTION,
};
use crate::procedure::{Procedure, ProcedureKind};
use crate::schema_generator::SchemaConverter;
use indexmap::IndexMap;
use serde_json::{json, Value};

/// Name of the single query parameter carrying a query's input.
pub const INPUT_PARAMETER: &str = "input";

/// Joins a base path and a procedure name. No separator normalization is done.
pub fn route_path(base_path: &str, name: &str) -> String {
    format!("{}/{}", base_path, name)
}

/// The method a procedure kind is documented under; `None` for subscriptions.
pub fn method_for(kind: ProcedureKind) -> Option<HttpMethod> {
    match kind {
        ProcedureKind::Query => Some(HttpMethod::Get),
        ProcedureKind::Mutation => Some(HttpMethod::Post),
        ProcedureKind::Subscription => None,
    }
}

/// Translates a single procedure into a route map with zero or one entries.
///
/// Subscriptions produce an empty map.
pub fn translate<T, C>(
    base_path: &str,
    name: &str,
    procedure: &Procedure<T>,
    converter: &C,
) -> RouteMap
where
    C: SchemaConverter<T> + ?Sized,
{
    let mut routes = RouteMap::new();
    let Some(method) = method_for(procedure.kind) else {
        return routes;
    };

    let operation = build_operation(name, method, procedure, converter);
    let mut item = PathItem::new();
    item.insert(method, operation);
    routes.insert(route_path(base_path, name), item);
    routes
}

/// Builds the operation for a procedure documented under `method`.
pub fn build_operation<T, C>(
    name: &str,
    method: HttpMethod,
    procedure: &Procedure<T>,
    converter: &C,
) -> Operation
where
    C: SchemaConverter<T> + ?Sized,
{
    let mut operation = Operation {
        operation_id: name.to_string(),
        parameters: None,
        request_body: None,
        responses: IndexMap::new(),
    };

    if let Some(input) = &procedure.input {
        let content = json_content(converter.to_schema(input));
        match method {
            HttpMethod::Get => {
                operation.parameters = Some(vec![Parameter {
                    name: INPUT_PARAMETER.to_string(),
                    location: ParameterLocation::Query,
                    content,
                }]);
            }
            HttpMethod::Post => {
                operation.request_body = Some(RequestBody {
                    required: true,
                    content,
                });
            }
        }
    }

    let response = match &procedure.output {
        Some(output) => Response {
            description: SUCCESS_DESCRIPTION.to_string(),
            content: Some(json_content(success_envelope(converter.to_schema(output)))),
        },
        None => Response {
            description: SUCCESS_DESCRIPTION.to_string(),
            content: None,
        },
    };
    operation.responses.insert("200".to_string(), response);

    operation
}

/// Wraps an output schema in the `{ result: { data: ... } }` success envelope.
pub fn success_envelope(data: Value) -> Value {
    json!({
        "type": "object",
        "required": ["result"],
        "properties": {
            "result": {
                "type": "object",
                "required": ["data"],
                "properties": {
                    "data": data,
                },
            },
        },
    })
}
