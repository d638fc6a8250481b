use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::params;
use crate::core::prelude::*;
use crate::domain::prelude::*;
use crate::query::{All, PageRequest, Paginated};
use crate::schema::validate::{decode, Issue, IssueKind, ValidationError};

#[derive(Deserialize, Debug, Default)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/customers`
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Paginated<Customer>>, ApiError> {
    let params = params(query)?;
    debug!(?params, "listing customers");

    let page = PageRequest::new(params.page, params.limit)?;
    Ok(Json(state.store.customers.query(&All, page).await))
}

/// `POST /api/customers`
///
/// The body is validated against the Customer schema before anything is
/// stored; the id and both timestamps are always assigned here.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ValidationError::single(Issue::new(
            &["body".to_string()],
            IssueKind::Json,
            rejection.body_text(),
        ))
    })?;
    let new: NewCustomer = decode(body)?;

    let customer = state
        .store
        .customers
        .insert(|id, now| new.into_customer(id, now))
        .await;
    info!("POST /api/customers - created {}", customer.id);

    Ok(Json(customer))
}

/// `GET /api/customers/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    state
        .store
        .customers
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Customer"))
}
