#![deny(missing_docs)]

//! # Schema Generator
//!
//! Converts type descriptions into JSON Schema fragments.
//!
//! The route builder never looks inside a type description; it only calls a
//! [`SchemaConverter`]. [`DefaultConverter`] covers the built-in [`TypeShape`]
//! descriptions and raw JSON Schema values.

use crate::type_mapping::TypeShape;
use serde_json::{json, Map, Value};

/// Converts a type description into a JSON Schema fragment.
pub trait SchemaConverter<T: ?Sized> {
    /// Returns the schema describing `ty`.
    fn to_schema(&self, ty: &T) -> Value;
}

/// Converter for [`TypeShape`] and pre-built JSON Schema [`Value`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl SchemaConverter<TypeShape> for DefaultConverter {
    fn to_schema(&self, ty: &TypeShape) -> Value {
        shape_schema(ty)
    }
}

/// Values are taken to already be JSON Schema and are passed through unchanged.
impl SchemaConverter<Value> for DefaultConverter {
    fn to_schema(&self, ty: &Value) -> Value {
        ty.clone()
    }
}

impl<T: ?Sized, C: SchemaConverter<T> + ?Sized> SchemaConverter<T> for &C {
    fn to_schema(&self, ty: &T) -> Value {
        (**self).to_schema(ty)
    }
}

fn shape_schema(shape: &TypeShape) -> Value {
    match shape {
        TypeShape::String { format: None } => json!({ "type": "string" }),
        TypeShape::String {
            format: Some(format),
        } => json!({ "type": "string", "format": format }),
        TypeShape::Integer => json!({ "type": "integer" }),
        TypeShape::Number => json!({ "type": "number" }),
        TypeShape::Boolean => json!({ "type": "boolean" }),
        TypeShape::Any => json!({}),
        TypeShape::Array(items) => json!({ "type": "array", "items": shape_schema(items) }),
        TypeShape::Map(values) => json!({
            "type": "object",
            "additionalProperties": shape_schema(values),
        }),
        TypeShape::Optional(inner) => json!({
            "anyOf": [shape_schema(inner), { "type": "null" }],
        }),
        TypeShape::Object(fields) => object_schema(fields),
    }
}

fn object_schema(fields: &indexmap::IndexMap<String, TypeShape>) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for (name, field) in fields {
        // An optional field is expressed by leaving it out of `required`
        let schema = match field {
            TypeShape::Optional(inner) => shape_schema(inner),
            other => {
                required.push(Value::String(name.clone()));
                shape_schema(other)
            }
        };
        properties.insert(name.clone(), schema);
    }

    let mut obj = Map::new();
    obj.insert("type".to_string(), json!("object"));
    obj.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        obj.insert("required".to_string(), Value::Array(required));
    }
    obj.insert("additionalProperties".to_string(), json!(false));
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_schemas() {
        let c = DefaultConverter;
        assert_eq!(c.to_schema(&TypeShape::string()), json!({"type": "string"}));
        assert_eq!(
            c.to_schema(&TypeShape::formatted("date")),
            json!({"type": "string", "format": "date"})
        );
        assert_eq!(c.to_schema(&TypeShape::Integer), json!({"type": "integer"}));
        assert_eq!(c.to_schema(&TypeShape::Any), json!({}));
    }

    #[test]
    fn test_object_required_follows_optionality() {
        let shape = TypeShape::object([
            ("id", TypeShape::formatted("uuid")),
            ("nickname", TypeShape::optional(TypeShape::string())),
            ("tags", TypeShape::array(TypeShape::string())),
        ]);

        assert_eq!(
            DefaultConverter.to_schema(&shape),
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "format": "uuid"},
                    "nickname": {"type": "string"},
                    "tags": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["id", "tags"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_all_optional_object_omits_required() {
        let shape = TypeShape::object([("cursor", TypeShape::optional(TypeShape::Integer))]);
        let schema = DefaultConverter.to_schema(&shape);
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_nullable_outside_object() {
        let shape = TypeShape::array(TypeShape::optional(TypeShape::Number));
        assert_eq!(
            DefaultConverter.to_schema(&shape),
            json!({
                "type": "array",
                "items": {"anyOf": [{"type": "number"}, {"type": "null"}]}
            })
        );
    }

    #[test]
    fn test_map_schema() {
        let shape = TypeShape::map(TypeShape::Boolean);
        assert_eq!(
            DefaultConverter.to_schema(&shape),
            json!({"type": "object", "additionalProperties": {"type": "boolean"}})
        );
    }

    #[test]
    fn test_value_passthrough() {
        let raw = json!({"type": "string", "minLength": 3});
        assert_eq!(DefaultConverter.to_schema(&raw), raw);
    }
}
