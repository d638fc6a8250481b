use chrono::NaiveDate;

use super::{Filter, InvalidQuery};
use crate::domain::prelude::*;

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn matches_eq(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().map_or(true, |expected| expected == actual)
}

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub customer_id: Option<String>,
}

impl AccountFilter {
    pub fn new(customer_id: Option<String>) -> Self {
        Self {
            customer_id: present(customer_id),
        }
    }
}

impl Filter<Account> for AccountFilter {
    fn matches(&self, account: &Account) -> bool {
        matches_eq(&self.customer_id, &account.customer_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    pub customer_id: Option<String>,
}

impl CardFilter {
    pub fn new(customer_id: Option<String>) -> Self {
        Self {
            customer_id: present(customer_id),
        }
    }
}

impl Filter<Card> for CardFilter {
    fn matches(&self, card: &Card) -> bool {
        matches_eq(&self.customer_id, &card.customer_id)
    }
}

/// Account equality plus an inclusive calendar-date range on the timestamp.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account_id: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new(
        account_id: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            account_id: present(account_id),
            start_date,
            end_date,
        }
    }

    /// Builds the filter from raw query-string values. Empty dates are
    /// ignored; anything else must be a `YYYY-MM-DD` calendar date.
    pub fn from_params(
        account_id: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<Self, InvalidQuery> {
        Ok(Self::new(
            account_id,
            parse_date("start_date", start_date)?,
            parse_date("end_date", end_date)?,
        ))
    }
}

fn parse_date(
    param: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, InvalidQuery> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    raw.parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| InvalidQuery::new(param, format!("invalid date `{raw}`, expected YYYY-MM-DD")))
}

impl Filter<Transaction> for TransactionFilter {
    fn matches(&self, tx: &Transaction) -> bool {
        let day = tx.timestamp.date();
        matches_eq(&self.account_id, &tx.account_id)
            && self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }
}

/// Customer and status equality. `status` is compared by name, so a value
/// that names no status matches nothing.
#[derive(Debug, Clone, Default)]
pub struct LoanFilter {
    pub customer_id: Option<String>,
    pub status: Option<String>,
}

impl LoanFilter {
    pub fn new(customer_id: Option<String>, status: Option<String>) -> Self {
        Self {
            customer_id: present(customer_id),
            status: present(status),
        }
    }
}

impl Filter<Loan> for LoanFilter {
    fn matches(&self, loan: &Loan) -> bool {
        matches_eq(&self.customer_id, &loan.customer_id)
            && matches_eq(&self.status, loan.status.as_str())
    }
}
