use axum::{extract::Path, Json};
use serde_json::{Map, Value};

use crate::core::prelude::*;
use crate::schema::registry;

/// `GET /api/schemas`: every schema definition keyed by entity name.
pub async fn list() -> Json<Map<String, Value>> {
    Json(registry::document())
}

/// `GET /api/schemas/{name}`
pub async fn show(Path(name): Path<String>) -> Result<Json<Value>, ApiError> {
    registry::get(&name)
        .map(|schema| Json(schema.to_json()))
        .ok_or(ApiError::NotFound("Schema"))
}
