#![deny(missing_docs)]

//! # Procedure Manifests
//!
//! Loads a procedure tree declared in YAML (or JSON) so documents can be
//! generated without writing Rust. Types are written as Rust type expressions
//! or as field mappings, and named types from the `types` section are inlined
//! wherever they are used.
//!
//! ```yaml
//! title: Example API
//! version: 1.0.0
//! basePath: /trpc
//! types:
//!   User: { id: Uuid, name: String, email: Option<String> }
//! procedures:
//!   greeting:
//!     kind: query
//!     input: { name: String }
//!     output: { message: String }
//!   users:
//!     list: { kind: query, output: Vec<User> }
//! ```
//!
//! Inside a flow mapping (`{ ... }`) a comma ends the value, so expressions such
//! as `HashMap<String, i32>` must be quoted there or written in block style.

use crate::error::{AppError, AppResult};
use crate::oas::document::GenerateOptions;
use crate::procedure::{Procedure, ProcedureKind, ProcedureTree, RouterEntry};
use crate::type_mapping::{map_rust_type, NamedTypeResolver, TypeShape};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const DEFAULT_TITLE: &str = "API";
const DEFAULT_VERSION: &str = "0.0.0";

/// A loaded manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Route prefix.
    pub base_path: String,
    /// Declared procedures with resolved type shapes.
    pub router: ProcedureTree<TypeShape>,
}

impl Manifest {
    /// Generation options borrowing this manifest.
    pub fn options(&self) -> GenerateOptions<'_, TypeShape> {
        GenerateOptions {
            title: &self.title,
            version: &self.version,
            base_path: &self.base_path,
            router: &self.router,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    title: Option<serde_yaml::Value>,
    #[serde(default)]
    version: Option<serde_yaml::Value>,
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    types: IndexMap<String, RawType>,
    #[serde(default)]
    procedures: serde_yaml::Mapping,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawType {
    Expr(String),
    Fields(IndexMap<String, RawType>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProcedure {
    kind: ProcedureKind,
    #[serde(default)]
    input: Option<RawType>,
    #[serde(default)]
    output: Option<RawType>,
}

/// Parses a manifest from YAML or JSON text.
pub fn load_manifest(content: &str) -> AppResult<Manifest> {
    let raw: RawManifest = serde_yaml::from_str(content)
        .map_err(|e| AppError::Manifest(format!("Failed to parse manifest: {}", e)))?;

    let mut resolver = TypeResolver::new(&raw.types);
    let router = build_tree(&raw.procedures, "", &mut resolver)?;

    Ok(Manifest {
        title: scalar_string(raw.title.as_ref(), "title")?
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        version: scalar_string(raw.version.as_ref(), "version")?
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        base_path: raw.base_path.unwrap_or_default(),
        router,
    })
}

/// Reads and parses a manifest file.
pub fn read_manifest(path: &Path) -> AppResult<Manifest> {
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read manifest");
    load_manifest(&content)
}

/// Accepts `1.0` as well as `"1.0"` for scalar metadata.
fn scalar_string(value: Option<&serde_yaml::Value>, field: &str) -> AppResult<Option<String>> {
    match value {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s.clone())),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(AppError::Manifest(format!(
            "'{}' must be a scalar value",
            field
        ))),
    }
}

/// A procedure is any mapping with a string `kind`; every other mapping is a router.
fn build_tree(
    entries: &serde_yaml::Mapping,
    prefix: &str,
    resolver: &mut TypeResolver<'_>,
) -> AppResult<ProcedureTree<TypeShape>> {
    let mut tree = ProcedureTree::new();
    for (key, value) in entries {
        let name = key.as_str().ok_or_else(|| {
            AppError::Manifest(format!(
                "Entry names under '{}' must be strings",
                if prefix.is_empty() { "procedures" } else { prefix }
            ))
        })?;
        let qualified = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };
        let mapping = value.as_mapping().ok_or_else(|| {
            AppError::Manifest(format!(
                "Entry '{}' must be a procedure or a router mapping",
                qualified
            ))
        })?;

        let built = if matches!(mapping.get("kind"), Some(serde_yaml::Value::String(_))) {
            let raw: RawProcedure = serde_yaml::from_value(value.clone()).map_err(|e| {
                AppError::Manifest(format!("Invalid procedure '{}': {}", qualified, e))
            })?;
            RouterEntry::Procedure(build_procedure(&raw, &qualified, resolver)?)
        } else {
            RouterEntry::Router(build_tree(mapping, &qualified, resolver)?)
        };
        tree.insert(name, built);
    }
    Ok(tree)
}

fn build_procedure(
    raw: &RawProcedure,
    qualified: &str,
    resolver: &mut TypeResolver<'_>,
) -> AppResult<Procedure<TypeShape>> {
    let mut procedure = Procedure::new(raw.kind);
    if let Some(input) = &raw.input {
        procedure.input = Some(resolver.shape(input).map_err(|e| {
            AppError::Manifest(format!("Invalid input type for '{}': {}", qualified, e))
        })?);
    }
    if let Some(output) = &raw.output {
        procedure.output = Some(resolver.shape(output).map_err(|e| {
            AppError::Manifest(format!("Invalid output type for '{}': {}", qualified, e))
        })?);
    }
    Ok(procedure)
}

/// Resolves the manifest's `types` section on demand, caching results.
struct TypeResolver<'a> {
    definitions: &'a IndexMap<String, RawType>,
    resolved: HashMap<String, TypeShape>,
    resolving: Vec<String>,
}

impl<'a> TypeResolver<'a> {
    fn new(definitions: &'a IndexMap<String, RawType>) -> Self {
        Self {
            definitions,
            resolved: HashMap::new(),
            resolving: Vec::new(),
        }
    }

    fn shape(&mut self, raw: &RawType) -> AppResult<TypeShape> {
        match raw {
            RawType::Expr(expr) => map_rust_type(expr, self),
            RawType::Fields(fields) => {
                let mut out = IndexMap::with_capacity(fields.len());
                for (name, field) in fields {
                    out.insert(name.clone(), self.shape(field)?);
                }
                Ok(TypeShape::Object(out))
            }
        }
    }
}

impl NamedTypeResolver for TypeResolver<'_> {
    fn resolve(&mut self, name: &str) -> AppResult<TypeShape> {
        if let Some(shape) = self.resolved.get(name) {
            return Ok(shape.clone());
        }
        // Inlining cannot express a type that contains itself
        if self.resolving.iter().any(|n| n == name) {
            return Err(AppError::Type(format!(
                "Recursive type '{}' cannot be inlined",
                name
            )));
        }
        let definitions = self.definitions;
        let raw = definitions
            .get(name)
            .ok_or_else(|| AppError::Type(format!("Unknown type '{}'", name)))?;

        self.resolving.push(name.to_string());
        let shape = self.shape(raw);
        self.resolving.pop();

        let shape = shape?;
        self.resolved.insert(name.to_string(), shape.clone());
        Ok(shape)
    }
}
