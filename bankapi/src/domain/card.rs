use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{CardStatus, CardType};
use crate::schema::{entities, EntitySchema, HasSchema};
use crate::store::Record;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub customer_id: String,
    pub account_id: String,
    pub card_type: CardType,
    pub card_number: String,
    pub expiry_date: NaiveDate,
    pub cvv: String,
    pub status: CardStatus,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    pub credit_limit: Option<f64>,
    pub issued_date: NaiveDate,
}

impl Record for Card {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasSchema for Card {
    fn schema() -> &'static EntitySchema {
        &entities::CARD
    }
}
