use pretty_assertions::assert_eq;
use rpc_openapi_core::{
    generate_openapi_document, generate_openapi_document_with, load_manifest, GenerateOptions,
    Procedure, ProcedureTree, SchemaConverter, TypeShape,
};
use serde_json::{json, Value};

fn greeting_router() -> ProcedureTree<TypeShape> {
    ProcedureTree::new()
        .procedure(
            "greeting",
            Procedure::query()
                .input(TypeShape::object([("name", TypeShape::string())]))
                .output(TypeShape::object([("message", TypeShape::string())])),
        )
        .procedure("onMessage", Procedure::subscription())
}

fn document_value(router: &ProcedureTree<TypeShape>, base_path: &str) -> Value {
    let doc = generate_openapi_document(&GenerateOptions {
        title: "Test API",
        version: "1.0.0",
        base_path,
        router,
    });
    serde_json::to_value(&doc).unwrap()
}

#[test]
fn test_greeting_query_document() {
    let value = document_value(&greeting_router(), "/trpc");
    let get = &value["paths"]["/trpc/greeting"]["get"];

    assert_eq!(get["operationId"], "greeting");
    assert_eq!(get["parameters"][0]["name"], "input");
    assert_eq!(get["parameters"][0]["in"], "query");
    assert_eq!(
        get["parameters"][0]["content"]["application/json"]["schema"]["properties"]["name"]
            ["type"],
        "string"
    );
    assert_eq!(
        get["responses"]["200"]["content"]["application/json"]["schema"]["properties"]["result"]
            ["properties"]["data"]["properties"]["message"]["type"],
        "string"
    );
    assert!(get.get("requestBody").is_none());
}

#[test]
fn test_subscription_absent() {
    let value = document_value(&greeting_router(), "/trpc");
    assert!(value["paths"].get("/trpc/onMessage").is_none());
    assert_eq!(value["paths"].as_object().unwrap().len(), 1);
}

#[test]
fn test_empty_tree_has_empty_paths_and_components() {
    for base in ["", "/trpc", "api"] {
        let value = document_value(&ProcedureTree::new(), base);
        assert_eq!(value["openapi"], "3.1.0");
        assert_eq!(value["paths"], json!({}));
        assert_eq!(value["components"], json!({}));
    }
}

#[test]
fn test_route_composition_without_normalization() {
    let router = ProcedureTree::new().procedure("test", Procedure::<TypeShape>::query());
    assert!(document_value(&router, "")["paths"].get("/test").is_some());
    assert!(document_value(&router, "api")["paths"].get("api/test").is_some());
}

#[test]
fn test_mutation_body_and_bodyless_response() {
    let router = ProcedureTree::new().procedure(
        "save",
        Procedure::mutation().input(TypeShape::object([("id", TypeShape::Integer)])),
    );
    let value = document_value(&router, "");
    let post = &value["paths"]["/save"]["post"];

    assert_eq!(post["requestBody"]["required"], true);
    assert_eq!(
        post["requestBody"]["content"]["application/json"]["schema"]["required"],
        json!(["id"])
    );
    assert!(post.get("parameters").is_none());
    assert_eq!(
        post["responses"],
        json!({"200": {"description": "Successful response"}})
    );
}

#[test]
fn test_bare_query_operation() {
    let router = ProcedureTree::new().procedure("health", Procedure::<TypeShape>::query());
    let value = document_value(&router, "/rpc");
    assert_eq!(
        value["paths"]["/rpc/health"],
        json!({
            "get": {
                "operationId": "health",
                "responses": {"200": {"description": "Successful response"}}
            }
        })
    );
}

#[test]
fn test_nesting_yields_flat_routes() {
    let deep = ProcedureTree::new().router(
        "v1",
        ProcedureTree::new().router(
            "users",
            ProcedureTree::new()
                .procedure("listUsers", Procedure::query().output(TypeShape::Integer))
                .router(
                    "admin",
                    ProcedureTree::new()
                        .procedure("banUser", Procedure::mutation().input(TypeShape::string())),
                ),
        ),
    );
    let flat = ProcedureTree::new()
        .procedure("listUsers", Procedure::query().output(TypeShape::Integer))
        .procedure("banUser", Procedure::mutation().input(TypeShape::string()));

    assert_eq!(document_value(&deep, "/api"), document_value(&flat, "/api"));
}

struct Stub;

impl SchemaConverter<&'static str> for Stub {
    fn to_schema(&self, ty: &&'static str) -> Value {
        json!({ "$comment": ty })
    }
}

#[test]
fn test_injected_converter_is_used_verbatim() {
    let router = ProcedureTree::new().procedure("item", Procedure::query().output("Item"));
    let doc = generate_openapi_document_with(
        &GenerateOptions {
            title: "Stubbed",
            version: "2",
            base_path: "",
            router: &router,
        },
        &Stub,
    );

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value["paths"]["/item"]["get"]["responses"]["200"]["content"]["application/json"]
            ["schema"]["properties"]["result"]["properties"]["data"],
        json!({"$comment": "Item"})
    );
    assert_eq!(value["info"], json!({"title": "Stubbed", "version": "2"}));
}

#[test]
fn test_raw_json_schema_descriptions() {
    let router: ProcedureTree<Value> = ProcedureTree::new().procedure(
        "lookup",
        Procedure::query().input(json!({"type": "string", "minLength": 1})),
    );
    let doc = generate_openapi_document(&GenerateOptions {
        title: "Raw",
        version: "1",
        base_path: "",
        router: &router,
    });

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value["paths"]["/lookup"]["get"]["parameters"][0]["content"]["application/json"]["schema"],
        json!({"type": "string", "minLength": 1})
    );
}

#[test]
fn test_manifest_to_document() {
    let yaml = r#"
title: Chat
version: 0.3.0
basePath: /trpc
types:
  Message: { id: Uuid, body: String, sentAt: DateTime }
procedures:
  chat:
    history:
      kind: query
      input: { room: String, before: Option<DateTime> }
      output: Vec<Message>
    send:
      kind: mutation
      input: { room: String, body: String }
      output: Message
    onMessage: { kind: subscription, output: Message }
"#;
    let manifest = load_manifest(yaml).unwrap();
    let value = serde_json::to_value(generate_openapi_document(&manifest.options())).unwrap();

    assert_eq!(value["info"], json!({"title": "Chat", "version": "0.3.0"}));
    let paths = value["paths"].as_object().unwrap();
    let routes: Vec<&str> = paths.keys().map(String::as_str).collect();
    assert_eq!(routes, vec!["/trpc/history", "/trpc/send"]);

    let history_input =
        &value["paths"]["/trpc/history"]["get"]["parameters"][0]["content"]["application/json"]
            ["schema"];
    assert_eq!(history_input["required"], json!(["room"]));
    assert_eq!(
        history_input["properties"]["before"],
        json!({"type": "string", "format": "date-time"})
    );

    let send_data = &value["paths"]["/trpc/send"]["post"]["responses"]["200"]["content"]
        ["application/json"]["schema"]["properties"]["result"]["properties"]["data"];
    assert_eq!(send_data["properties"]["id"]["format"], "uuid");
    assert_eq!(send_data["required"], json!(["id", "body", "sentAt"]));
}
