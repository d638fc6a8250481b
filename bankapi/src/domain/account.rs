use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::{AccountStatus, AccountType};
use crate::schema::{entities, EntitySchema, HasSchema};
use crate::store::Record;

/// Domain model for a customer account.
///
/// `customer_id` is never checked against the customers collection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub customer_id: String,
    pub account_type: AccountType,
    pub account_number: String,
    pub currency: String,
    pub balance: f64,
    pub available_balance: f64,
    pub interest_rate: f64,
    pub status: AccountStatus,
    pub opened_date: NaiveDate,
    pub last_activity_date: NaiveDateTime,
}

impl Account {
    /// Only checking and savings accounts get a card issued.
    pub fn is_card_eligible(&self) -> bool {
        matches!(self.account_type, AccountType::Checking | AccountType::Savings)
    }
}

impl Record for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasSchema for Account {
    fn schema() -> &'static EntitySchema {
        &entities::ACCOUNT
    }
}
