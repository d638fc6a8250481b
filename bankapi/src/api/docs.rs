use axum::response::Html;
use axum::Json;
use serde_json::{json, Map, Value};

use crate::query::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use crate::schema::{registry, REF_PREFIX};

pub const TITLE: &str = "Banking API";
pub const DESCRIPTION: &str =
    "Mock banking API serving synthetic customers, accounts, cards, transactions and loans.";

/// Entities served as paginated lists, with the tag of their endpoints.
const LISTED: &[(&str, &str)] = &[
    ("Customer", "Customers"),
    ("Account", "Accounts"),
    ("Card", "Cards"),
    ("Transaction", "Transactions"),
    ("Loan", "Loans"),
];

/// `GET /openapi.json`
pub async fn openapi() -> Json<Value> {
    Json(document())
}

/// `GET /docs`
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_HTML)
}

pub fn document() -> Value {
    let mut schemas = registry::document();
    for (name, _) in LISTED {
        schemas.insert(format!("Paginated{name}"), envelope_schema(name));
    }
    schemas.insert("ValidationIssue".into(), issue_schema());

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": TITLE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": DESCRIPTION,
        },
        "tags": LISTED
            .iter()
            .map(|(_, tag)| json!({ "name": tag }))
            .chain(std::iter::once(json!({ "name": "Schemas" })))
            .collect::<Vec<_>>(),
        "paths": paths(),
        "components": { "schemas": schemas },
    })
}

fn paths() -> Map<String, Value> {
    let mut paths = Map::new();

    paths.insert(
        "/api/schemas".into(),
        json!({ "get": operation("Schemas", "Get all available schemas", vec![], object_response()) }),
    );
    paths.insert(
        "/api/schemas/{schema_name}".into(),
        json!({ "get": with_not_found(operation(
            "Schemas",
            "Get specific schema by name",
            vec![path_param("schema_name")],
            object_response(),
        )) }),
    );
    paths.insert(
        "/api/customers".into(),
        json!({
            "get": operation("Customers", "List all customers with pagination", page_params(), envelope_response("Customer")),
            "post": create_customer(),
        }),
    );
    paths.insert(
        "/api/customers/{customer_id}".into(),
        json!({ "get": with_not_found(operation(
            "Customers",
            "Get customer details",
            vec![path_param("customer_id")],
            ref_response("Customer"),
        )) }),
    );

    let customer_scoped = |summary: &str, tag: &str, name: &str| {
        let mut params = vec![query_param("customer_id", json!({ "type": "string" }))];
        params.extend(page_params());
        json!({ "get": operation(tag, summary, params, envelope_response(name)) })
    };
    paths.insert(
        "/api/accounts".into(),
        customer_scoped("List all accounts with optional customer filter", "Accounts", "Account"),
    );
    paths.insert(
        "/api/cards".into(),
        customer_scoped("List all cards with optional customer filter", "Cards", "Card"),
    );

    let mut tx_params = vec![
        query_param("account_id", json!({ "type": "string" })),
        query_param("start_date", json!({ "type": "string", "format": "date" })),
        query_param("end_date", json!({ "type": "string", "format": "date" })),
    ];
    tx_params.extend(page_params());
    paths.insert(
        "/api/transactions".into(),
        json!({ "get": operation("Transactions", "List all transactions with filters", tx_params, envelope_response("Transaction")) }),
    );

    let mut loan_params = vec![
        query_param("customer_id", json!({ "type": "string" })),
        query_param("status", json!({ "type": "string" })),
    ];
    loan_params.extend(page_params());
    paths.insert(
        "/api/loans".into(),
        json!({ "get": operation("Loans", "List all loans with filters", loan_params, envelope_response("Loan")) }),
    );

    paths
}

fn operation(tag: &str, summary: &str, parameters: Vec<Value>, ok: Value) -> Value {
    json!({
        "tags": [tag],
        "summary": summary,
        "parameters": parameters,
        "responses": {
            "200": ok,
            "422": error_response("Validation Error"),
        },
    })
}

fn with_not_found(mut op: Value) -> Value {
    op["responses"]["404"] = json!({
        "description": "Not Found",
        "content": { "application/json": { "schema": {
            "type": "object",
            "properties": { "detail": { "type": "string" } },
        } } },
    });
    op
}

fn create_customer() -> Value {
    json!({
        "tags": ["Customers"],
        "summary": "Create a new customer",
        "requestBody": {
            "required": true,
            "content": { "application/json": { "schema": { "$ref": reference("Customer") } } },
        },
        "responses": {
            "200": ref_response("Customer"),
            "422": error_response("Validation Error"),
        },
    })
}

fn page_params() -> Vec<Value> {
    vec![
        query_param(
            "page",
            json!({ "type": "integer", "minimum": 1, "default": DEFAULT_PAGE }),
        ),
        query_param(
            "limit",
            json!({ "type": "integer", "minimum": 1, "maximum": MAX_LIMIT, "default": DEFAULT_LIMIT }),
        ),
    ]
}

fn query_param(name: &str, schema: Value) -> Value {
    json!({ "name": name, "in": "query", "required": false, "schema": schema })
}

fn path_param(name: &str) -> Value {
    json!({ "name": name, "in": "path", "required": true, "schema": { "type": "string" } })
}

fn reference(name: &str) -> String {
    format!("{REF_PREFIX}{name}")
}

fn json_response(schema: Value) -> Value {
    json!({
        "description": "Successful Response",
        "content": { "application/json": { "schema": schema } },
    })
}

fn ref_response(name: &str) -> Value {
    json_response(json!({ "$ref": reference(name) }))
}

fn envelope_response(name: &str) -> Value {
    ref_response(&format!("Paginated{name}"))
}

fn object_response() -> Value {
    json_response(json!({ "type": "object" }))
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": {
            "type": "object",
            "properties": {
                "detail": { "type": "array", "items": { "$ref": reference("ValidationIssue") } },
            },
        } } },
    })
}

fn envelope_schema(name: &str) -> Value {
    json!({
        "title": format!("Paginated{name}"),
        "type": "object",
        "required": ["data", "total", "page", "limit"],
        "properties": {
            "data": { "type": "array", "items": { "$ref": reference(name) } },
            "total": { "type": "integer" },
            "page": { "type": "integer" },
            "limit": { "type": "integer" },
        },
    })
}

fn issue_schema() -> Value {
    json!({
        "title": "ValidationIssue",
        "type": "object",
        "required": ["loc", "msg", "type"],
        "properties": {
            "loc": { "type": "array", "items": { "type": "string" } },
            "msg": { "type": "string" },
            "type": { "type": "string" },
        },
    })
}

const SWAGGER_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Banking API - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
  </script>
</body>
</html>
"##;
