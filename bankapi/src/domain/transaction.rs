use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{TransactionStatus, TransactionType};
use crate::schema::{entities, EntitySchema, HasSchema};
use crate::store::Record;

/// Domain model for an account transaction.
///
/// Amounts carry no sign convention and are never applied to the account
/// balance.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub currency: String,
    pub description: Option<String>,
    pub status: TransactionStatus,
    pub timestamp: NaiveDateTime,
    pub reference_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasSchema for Transaction {
    fn schema() -> &'static EntitySchema {
        &entities::TRANSACTION
    }
}
