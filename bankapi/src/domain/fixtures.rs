use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use super::prelude::*;

pub struct Sample {
    pub customer: Customer,
    pub account: Account,
    pub card: Card,
    pub transaction: Transaction,
    pub loan: Loan,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

pub fn address() -> Address {
    Address {
        street: "123 Main St".to_string(),
        city: "New York".to_string(),
        state: Some("NY".to_string()),
        country: "US".to_string(),
        postal_code: "10001".to_string(),
    }
}

pub fn new_customer(first_name: &str) -> NewCustomer {
    NewCustomer {
        customer_type: CustomerType::Personal,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        email: format!("{}.doe@example.com", first_name.to_lowercase()),
        phone: Some("+1234567890".to_string()),
        date_of_birth: Some(date(1990, 1, 1)),
        address: address(),
        kyc_status: KycStatus::Verified,
        risk_profile: RiskProfile::Low,
        status: CustomerStatus::Active,
    }
}

pub fn account(id: &str, customer_id: &str, account_type: AccountType) -> Account {
    Account {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        account_type,
        account_number: "1234567890".to_string(),
        currency: "USD".to_string(),
        balance: 1000.0,
        available_balance: 1000.0,
        interest_rate: 0.01,
        status: AccountStatus::Active,
        opened_date: date(2023, 1, 1),
        last_activity_date: at(2023, 1, 1, 0),
    }
}

pub fn transaction(id: &str, account_id: &str, timestamp: NaiveDateTime) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: account_id.to_string(),
        kind: TransactionType::Deposit,
        amount: 100.0,
        currency: "USD".to_string(),
        description: Some("Initial deposit".to_string()),
        status: TransactionStatus::Completed,
        timestamp,
        reference_id: None,
        metadata: json!({ "channel": "atm" }).as_object().cloned(),
    }
}

pub fn loan(id: &str, customer_id: &str, status: LoanStatus) -> Loan {
    Loan {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        kind: LoanType::Personal,
        amount: 10000.0,
        currency: "USD".to_string(),
        interest_rate: 0.05,
        term: 12,
        status,
        start_date: date(2023, 1, 1),
        end_date: date(2023, 12, 31),
        remaining_balance: 10000.0,
        payment_schedule: vec![LoanPayment {
            due_date: date(2023, 2, 1),
            amount: 1000.0,
            status: PaymentStatus::Paid,
            paid_date: Some(date(2023, 1, 30)),
        }],
    }
}

pub fn sample() -> Sample {
    let customer = new_customer("John").into_customer("c-1".to_string(), at(2023, 1, 1, 9));
    let account = account("a-1", &customer.id, AccountType::Checking);
    let card = Card {
        id: "k-1".to_string(),
        customer_id: customer.id.clone(),
        account_id: account.id.clone(),
        card_type: CardType::Credit,
        card_number: "4111111111111111".to_string(),
        expiry_date: date(2025, 12, 31),
        cvv: "123".to_string(),
        status: CardStatus::Active,
        daily_limit: 1000.0,
        monthly_limit: 10000.0,
        credit_limit: Some(5000.0),
        issued_date: date(2023, 1, 1),
    };
    let transaction = transaction("t-1", &account.id, at(2023, 1, 2, 12));
    let loan = loan("l-1", &customer.id, LoanStatus::Active);

    Sample {
        customer,
        account,
        card,
        transaction,
        loan,
    }
}
