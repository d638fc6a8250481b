use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::{CustomerStatus, CustomerType, KycStatus, RiskProfile};
use crate::schema::{entities, EntitySchema, HasSchema};
use crate::store::Record;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    /// Two-letter country code.
    pub country: String,
    pub postal_code: String,
}

impl HasSchema for Address {
    fn schema() -> &'static EntitySchema {
        &entities::ADDRESS
    }
}

/// Domain model for a bank customer.
///
/// `id`, `created_at` and `updated_at` are always assigned by the store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_type: CustomerType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Address,
    pub kyc_status: KycStatus,
    pub risk_profile: RiskProfile,
    pub status: CustomerStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasSchema for Customer {
    fn schema() -> &'static EntitySchema {
        &entities::CUSTOMER
    }
}

/// A customer as submitted by a client, before the server assigns its
/// identity and timestamps.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub customer_type: CustomerType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Address,
    pub kyc_status: KycStatus,
    pub risk_profile: RiskProfile,
    pub status: CustomerStatus,
}

impl NewCustomer {
    pub fn into_customer(self, id: String, now: NaiveDateTime) -> Customer {
        Customer {
            id,
            customer_type: self.customer_type,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            kyc_status: self.kyc_status,
            risk_profile: self.risk_profile,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

impl HasSchema for NewCustomer {
    fn schema() -> &'static EntitySchema {
        &entities::CUSTOMER
    }
}
