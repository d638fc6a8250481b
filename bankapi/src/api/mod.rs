use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::prelude::*;
use crate::query::InvalidQuery;

/// List endpoints for the read-only collections.
///
pub mod collections;
pub mod customers;

/// Machine-readable API description and the interactive docs page.
///
/// The component schemas come straight from the registry, so the document
/// describes exactly what the validators enforce.
///
pub mod docs;
pub mod schemas;

/// Builds the application router with CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/schemas", get(schemas::list))
        .route("/api/schemas/{name}", get(schemas::show))
        .route("/api/customers", get(customers::list).post(customers::create))
        .route("/api/customers/{id}", get(customers::show))
        .route("/api/accounts", get(collections::accounts))
        .route("/api/cards", get(collections::cards))
        .route("/api/transactions", get(collections::transactions))
        .route("/api/loans", get(collections::loans))
        .route("/openapi.json", get(docs::openapi))
        .route("/docs", get(docs::swagger_ui))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Unwraps query parameters, reporting unparsable ones as an invalid query.
fn params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    match query {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => Err(InvalidQuery::new("query", rejection.body_text()).into()),
    }
}
