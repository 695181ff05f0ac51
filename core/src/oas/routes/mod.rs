#![deny(missing_docs)]

//! # Routes Module
//!
//! Flattens a procedure tree into a [`RouteMap`].
//! Orchestrates Tree -> Builder -> route fragments.

pub mod builder;

use crate::oas::models::RouteMap;
use crate::oas::routes::builder::translate;
use crate::procedure::{ProcedureTree, RouterEntry};
use crate::schema_generator::SchemaConverter;

/// Walks `tree` depth-first and collects the routes of every documented procedure.
///
/// Every leaf is routed as `base_path + "/" + name`. Nested routers are walked
/// with the same `base_path`; their own key does not become a path segment.
/// When two procedures land on the same route, the later one replaces the
/// whole path item.
pub fn walk<T, C>(base_path: &str, tree: &ProcedureTree<T>, converter: &C) -> RouteMap
where
    C: SchemaConverter<T> + ?Sized,
{
    let mut routes = RouteMap::new();

    for (name, entry) in tree.iter() {
        let fragment = match entry {
            RouterEntry::Procedure(procedure) => {
                let fragment = translate(base_path, name, procedure, converter);
                if fragment.is_empty() {
                    tracing::trace!(
                        procedure = name,
                        kind = ?procedure.kind,
                        "skipping undocumented procedure"
                    );
                }
                fragment
            }
            RouterEntry::Router(nested) => {
                tracing::trace!(router = name, entries = nested.len(), "descending into router");
                walk(base_path, nested, converter)
            }
        };

        for (route, item) in fragment {
            tracing::debug!(route = %route, "documented route");
            routes.insert(route, item);
        }
    }

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::HttpMethod;
    use crate::procedure::Procedure;
    use serde_json::{json, Value};

    struct Null;

    impl SchemaConverter<()> for Null {
        fn to_schema(&self, _ty: &()) -> Value {
            json!({})
        }
    }

    #[test]
    fn test_walk_flat() {
        let tree = ProcedureTree::new()
            .procedure("list", Procedure::<()>::query())
            .procedure("save", Procedure::mutation())
            .procedure("watch", Procedure::subscription());

        let routes = walk("/api", &tree, &Null);
        let keys: Vec<&str> = routes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/api/list", "/api/save"]);
        assert!(routes["/api/list"].contains_key(&HttpMethod::Get));
        assert!(routes["/api/save"].contains_key(&HttpMethod::Post));
    }

    #[test]
    fn test_nested_routers_share_base_path() {
        let tree = ProcedureTree::new().router(
            "users",
            ProcedureTree::new().router(
                "admin",
                ProcedureTree::new().procedure("ban", Procedure::<()>::mutation()),
            ),
        );

        let routes = walk("/trpc", &tree, &Null);
        assert_eq!(routes.len(), 1);
        assert!(routes.contains_key("/trpc/ban"));
    }

    #[test]
    fn test_depth_does_not_change_output() {
        let flat = ProcedureTree::new()
            .procedure("a", Procedure::<()>::query().input(()))
            .procedure("b", Procedure::mutation().output(()));
        let deep = ProcedureTree::new()
            .router(
                "one",
                ProcedureTree::new().router(
                    "two",
                    ProcedureTree::new().procedure("a", Procedure::<()>::query().input(())),
                ),
            )
            .router(
                "three",
                ProcedureTree::new().procedure("b", Procedure::mutation().output(())),
            );

        assert_eq!(walk("", &flat, &Null), walk("", &deep, &Null));
    }

    #[test]
    fn test_last_write_wins_on_collision() {
        let tree = ProcedureTree::new()
            .procedure("get", Procedure::<()>::query())
            .router(
                "nested",
                ProcedureTree::new().procedure("get", Procedure::mutation()),
            );

        let routes = walk("", &tree, &Null);
        assert_eq!(routes.len(), 1);
        let item = &routes["/get"];
        assert!(item.contains_key(&HttpMethod::Post));
        assert!(!item.contains_key(&HttpMethod::Get));
    }

    #[test]
    fn test_empty_tree() {
        let tree: ProcedureTree<()> = ProcedureTree::new();
        assert!(walk("/trpc", &tree, &Null).is_empty());
    }
}
