#![deny(missing_docs)]

//! # Procedure Declarations
//!
//! The input side of the generator: a tree of named procedures, each carrying a
//! call kind and optional input/output type descriptions. The type description
//! is generic so any schema source can be plugged in through a
//! [`SchemaConverter`](crate::schema_generator::SchemaConverter).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a procedure is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    /// A read. Documented as `GET`.
    Query,
    /// A write. Documented as `POST`.
    Mutation,
    /// A stream. Never documented.
    Subscription,
}

/// A single declared remote operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure<T> {
    /// The call kind.
    pub kind: ProcedureKind,
    /// Description of the accepted input, if any.
    pub input: Option<T>,
    /// Description of the returned data, if any.
    pub output: Option<T>,
}

impl<T> Procedure<T> {
    /// Creates a procedure of the given kind without input or output.
    pub fn new(kind: ProcedureKind) -> Self {
        Self {
            kind,
            input: None,
            output: None,
        }
    }

    /// Shorthand for a `Query` procedure.
    pub fn query() -> Self {
        Self::new(ProcedureKind::Query)
    }

    /// Shorthand for a `Mutation` procedure.
    pub fn mutation() -> Self {
        Self::new(ProcedureKind::Mutation)
    }

    /// Shorthand for a `Subscription` procedure.
    pub fn subscription() -> Self {
        Self::new(ProcedureKind::Subscription)
    }

    /// Sets the input type description.
    pub fn input(mut self, input: T) -> Self {
        self.input = Some(input);
        self
    }

    /// Sets the output type description.
    pub fn output(mut self, output: T) -> Self {
        self.output = Some(output);
        self
    }
}

/// One named entry of a [`ProcedureTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum RouterEntry<T> {
    /// A leaf procedure.
    Procedure(Procedure<T>),
    /// A nested group of entries.
    Router(ProcedureTree<T>),
}

/// An insertion-ordered tree of procedures and nested routers.
///
/// Trees mirror a static declaration and are acyclic by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureTree<T> {
    entries: IndexMap<String, RouterEntry<T>>,
}

impl<T> Default for ProcedureTree<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> ProcedureTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a procedure under `name`, replacing any previous entry of that name.
    pub fn procedure(mut self, name: impl Into<String>, procedure: Procedure<T>) -> Self {
        self.insert(name, RouterEntry::Procedure(procedure));
        self
    }

    /// Adds a nested router under `name`, replacing any previous entry of that name.
    pub fn router(mut self, name: impl Into<String>, router: ProcedureTree<T>) -> Self {
        self.insert(name, RouterEntry::Router(router));
        self
    }

    /// Inserts an entry in place.
    pub fn insert(&mut self, name: impl Into<String>, entry: RouterEntry<T>) {
        self.entries.insert(name.into(), entry);
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouterEntry<T>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Looks up a direct child entry.
    pub fn get(&self, name: &str) -> Option<&RouterEntry<T>> {
        self.entries.get(name)
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no direct entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(String, RouterEntry<T>)> for ProcedureTree<T> {
    fn from_iter<I: IntoIterator<Item = (String, RouterEntry<T>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
