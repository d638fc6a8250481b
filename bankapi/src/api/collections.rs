use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use super::params;
use crate::core::prelude::*;
use crate::domain::prelude::*;
use crate::query::{AccountFilter, CardFilter, LoanFilter, PageRequest, Paginated, TransactionFilter};

/// Query string for lists scoped by owning customer.
#[derive(Deserialize, Debug, Default)]
pub struct CustomerParams {
    pub customer_id: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TransactionParams {
    pub account_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LoanParams {
    pub customer_id: Option<String>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/accounts`
pub async fn accounts(
    State(state): State<AppState>,
    query: Result<Query<CustomerParams>, QueryRejection>,
) -> Result<Json<Paginated<Account>>, ApiError> {
    let params = params(query)?;
    debug!(?params, "listing accounts");

    let page = PageRequest::new(params.page, params.limit)?;
    let filter = AccountFilter::new(params.customer_id);
    Ok(Json(state.store.accounts.query(&filter, page).await))
}

/// `GET /api/cards`
pub async fn cards(
    State(state): State<AppState>,
    query: Result<Query<CustomerParams>, QueryRejection>,
) -> Result<Json<Paginated<Card>>, ApiError> {
    let params = params(query)?;
    debug!(?params, "listing cards");

    let page = PageRequest::new(params.page, params.limit)?;
    let filter = CardFilter::new(params.customer_id);
    Ok(Json(state.store.cards.query(&filter, page).await))
}

/// `GET /api/transactions`
///
/// `start_date` and `end_date` are inclusive bounds on the calendar date of
/// the transaction timestamp. Empty values are ignored.
pub async fn transactions(
    State(state): State<AppState>,
    query: Result<Query<TransactionParams>, QueryRejection>,
) -> Result<Json<Paginated<Transaction>>, ApiError> {
    let params = params(query)?;
    debug!(?params, "listing transactions");

    let page = PageRequest::new(params.page, params.limit)?;
    let filter = TransactionFilter::from_params(params.account_id, params.start_date, params.end_date)?;
    Ok(Json(state.store.transactions.query(&filter, page).await))
}

/// `GET /api/loans`
pub async fn loans(
    State(state): State<AppState>,
    query: Result<Query<LoanParams>, QueryRejection>,
) -> Result<Json<Paginated<Loan>>, ApiError> {
    let params = params(query)?;
    debug!(?params, "listing loans");

    let page = PageRequest::new(params.page, params.limit)?;
    let filter = LoanFilter::new(params.customer_id, params.status);
    Ok(Json(state.store.loans.query(&filter, page).await))
}
