#![deny(missing_docs)]

//! # Type Mapping
//!
//! Structural type descriptions ([`TypeShape`]) and the mapper that builds them
//! from Rust type expressions such as `Option<Vec<Uuid>>`.
//! Handles primitives, collections, maps, nullability (Option) and named types.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use ra_ap_edition::Edition;
// Import HasGenericArgs to access .generic_arg_list() on PathSegments
use ra_ap_syntax::ast::{self, HasGenericArgs};
use ra_ap_syntax::{AstNode, SourceFile};
use std::fmt::Display;
use std::str::FromStr;

/// A structural description of a value's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    /// A string, optionally with a well-known format (`uuid`, `date-time`, ...).
    String {
        /// Format hint emitted as the JSON Schema `format` keyword.
        format: Option<String>,
    },
    /// An integer.
    Integer,
    /// A floating point number.
    Number,
    /// A boolean.
    Boolean,
    /// Any JSON value.
    Any,
    /// A list of items of one shape.
    Array(Box<TypeShape>),
    /// A string-keyed map of values of one shape.
    Map(Box<TypeShape>),
    /// A value that may be absent or null.
    Optional(Box<TypeShape>),
    /// A fixed set of named fields, in declaration order.
    Object(IndexMap<String, TypeShape>),
}

impl TypeShape {
    /// A plain string.
    pub fn string() -> Self {
        TypeShape::String { format: None }
    }

    /// A string with the given format.
    pub fn formatted(format: impl Into<String>) -> Self {
        TypeShape::String {
            format: Some(format.into()),
        }
    }

    /// An array of `item`.
    pub fn array(item: TypeShape) -> Self {
        TypeShape::Array(Box::new(item))
    }

    /// A map with values of `value`.
    pub fn map(value: TypeShape) -> Self {
        TypeShape::Map(Box::new(value))
    }

    /// An optional `inner`.
    pub fn optional(inner: TypeShape) -> Self {
        TypeShape::Optional(Box::new(inner))
    }

    /// An object built from `(field, shape)` pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypeShape)>,
    {
        TypeShape::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Display for TypeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeShape::String { format: None } => write!(f, "string"),
            TypeShape::String { format: Some(fmt) } => write!(f, "string({})", fmt),
            TypeShape::Integer => write!(f, "integer"),
            TypeShape::Number => write!(f, "number"),
            TypeShape::Boolean => write!(f, "boolean"),
            TypeShape::Any => write!(f, "any"),
            TypeShape::Array(inner) => write!(f, "array<{}>", inner),
            TypeShape::Map(inner) => write!(f, "map<{}>", inner),
            TypeShape::Optional(inner) => write!(f, "{}?", inner),
            TypeShape::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, shape)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, shape)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Supplies shapes for user-defined type names met while mapping.
pub trait NamedTypeResolver {
    /// Returns the shape declared for `name`.
    fn resolve(&mut self, name: &str) -> AppResult<TypeShape>;
}

/// A resolver that knows no named types.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNamedTypes;

impl NamedTypeResolver for NoNamedTypes {
    fn resolve(&mut self, name: &str) -> AppResult<TypeShape> {
        Err(AppError::Type(format!("Unknown type '{}'", name)))
    }
}

impl FromStr for TypeShape {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        map_rust_type(s, &mut NoNamedTypes)
    }
}

/// Maps a Rust type string (e.g., `Option<i32>`) to a [`TypeShape`].
///
/// Paths that are not built-in types are handed to `resolver`.
pub fn map_rust_type(
    rust_type: &str,
    resolver: &mut dyn NamedTypeResolver,
) -> AppResult<TypeShape> {
    // Wrap implementation to parse valid Rust syntax using a type alias
    let code = format!("type _Wrapper = {};", rust_type);
    let parse = SourceFile::parse(&code, Edition::Edition2021);
    if !parse.errors().is_empty() {
        return Err(AppError::Type(format!(
            "Failed to parse type string: {}",
            rust_type
        )));
    }
    let file = parse.tree();

    let type_alias = file
        .syntax()
        .descendants()
        .find_map(ast::TypeAlias::cast)
        .ok_or_else(|| AppError::Type(format!("Failed to parse type string: {}", rust_type)))?;

    let root_type = type_alias
        .ty()
        .ok_or_else(|| AppError::Type(format!("Invalid type syntax: {}", rust_type)))?;

    map_ast_type(&root_type, resolver)
}

/// Recursively maps an AST Type node to a TypeShape.
fn map_ast_type(ty: &ast::Type, resolver: &mut dyn NamedTypeResolver) -> AppResult<TypeShape> {
    match ty {
        ast::Type::PathType(path_type) => {
            let path = path_type
                .path()
                .ok_or_else(|| AppError::Type("Empty path".into()))?;
            // Last segment, so `std::collections::HashMap<..>` maps like `HashMap<..>`
            let segment = path
                .segment()
                .ok_or_else(|| AppError::Type("Empty segment".into()))?;
            let name_ref = segment
                .name_ref()
                .ok_or_else(|| AppError::Type("No type name".into()))?;
            let name = name_ref.text();

            match name.as_str() {
                // Primitives
                "String" | "str" | "char" => Ok(TypeShape::string()),
                "bool" => Ok(TypeShape::Boolean),
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "u128" | "usize" => Ok(TypeShape::Integer),
                "f32" | "f64" => Ok(TypeShape::Number),
                "Value" => Ok(TypeShape::Any),

                // Formats
                "Uuid" => Ok(TypeShape::formatted("uuid")),
                "NaiveDateTime" | "DateTime" => Ok(TypeShape::formatted("date-time")),
                "NaiveDate" => Ok(TypeShape::formatted("date")),

                // Containers
                "Option" => Ok(TypeShape::optional(generic_arg(&segment, 0, resolver)?)),
                "Box" | "Rc" | "Arc" => generic_arg(&segment, 0, resolver),
                "Vec" | "VecDeque" | "HashSet" | "BTreeSet" | "IndexSet" => {
                    Ok(TypeShape::array(generic_arg(&segment, 0, resolver)?))
                }
                "HashMap" | "BTreeMap" | "IndexMap" => {
                    Ok(TypeShape::map(generic_arg(&segment, 1, resolver)?))
                }

                other => resolver.resolve(other),
            }
        }
        ast::Type::RefType(ref_type) => {
            let inner = ref_type
                .ty()
                .ok_or_else(|| AppError::Type("Invalid reference".into()))?;
            map_ast_type(&inner, resolver)
        }
        ast::Type::SliceType(slice) => {
            let inner = slice
                .ty()
                .ok_or_else(|| AppError::Type("Invalid slice".into()))?;
            Ok(TypeShape::array(map_ast_type(&inner, resolver)?))
        }
        ast::Type::ArrayType(array) => {
            let inner = array
                .ty()
                .ok_or_else(|| AppError::Type("Invalid array".into()))?;
            Ok(TypeShape::array(map_ast_type(&inner, resolver)?))
        }
        _ => Err(AppError::Type(format!(
            "Unsupported type structure: {}",
            ty.syntax().text()
        ))),
    }
}

/// Maps the `index`-th type argument of a generic segment such as `HashMap<K, V>`.
fn generic_arg(
    segment: &ast::PathSegment,
    index: usize,
    resolver: &mut dyn NamedTypeResolver,
) -> AppResult<TypeShape> {
    // Need HasGenericArgs trait for this method
    let generic_args = segment
        .generic_arg_list()
        .ok_or_else(|| AppError::Type("Missing generic arguments for container type".into()))?;

    let arg = generic_args
        .generic_args()
        .filter_map(|arg| match arg {
            ast::GenericArg::TypeArg(type_arg) => Some(type_arg),
            _ => None,
        })
        .nth(index)
        .ok_or_else(|| AppError::Type(format!("Missing generic argument #{}", index + 1)))?;

    let inner_ty = arg
        .ty()
        .ok_or_else(|| AppError::Type("Invalid generic type".into()))?;
    map_ast_type(&inner_ty, resolver)
}
