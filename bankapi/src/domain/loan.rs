use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{LoanStatus, LoanType, PaymentStatus};
use crate::schema::{entities, EntitySchema, HasSchema};
use crate::store::Record;

/// One instalment of a loan. Embedded in [`Loan`], never stored on its own.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: PaymentStatus,
    pub paid_date: Option<NaiveDate>,
}

impl HasSchema for LoanPayment {
    fn schema() -> &'static EntitySchema {
        &entities::LOAN_PAYMENT
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: String,
    pub customer_id: String,
    #[serde(rename = "type")]
    pub kind: LoanType,
    pub amount: f64,
    pub currency: String,
    pub interest_rate: f64,
    /// Number of repayment periods.
    pub term: i64,
    pub status: LoanStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remaining_balance: f64,
    pub payment_schedule: Vec<LoanPayment>,
}

impl Record for Loan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasSchema for Loan {
    fn schema() -> &'static EntitySchema {
        &entities::LOAN
    }
}
