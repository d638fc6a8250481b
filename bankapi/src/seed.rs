use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::domain::prelude::*;
use crate::store::Store;

pub const CUSTOMER_COUNT: usize = 10;
pub const ACCOUNTS_PER_CUSTOMER: RangeInclusive<usize> = 1..=3;

pub const BALANCE: RangeInclusive<u32> = 1_000..=100_000;
pub const INTEREST_RATE: RangeInclusive<u32> = 1..=5;
pub const DAILY_LIMIT: RangeInclusive<u32> = 1_000..=5_000;
pub const MONTHLY_LIMIT: RangeInclusive<u32> = 10_000..=50_000;
pub const CVV: RangeInclusive<u32> = 100..=999;
/// Days ahead of today a generated card expires.
pub const EXPIRY_DAYS: RangeInclusive<i64> = 1..=30;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore",
];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "Maple Dr", "Cedar Ln", "Elm St", "Lake View Blvd",
    "Hillcrest Way", "Sunset Ave", "Park Pl",
];

/// City, optional state or region, two-letter country code.
const LOCALITIES: &[(&str, Option<&str>, &str)] = &[
    ("New York", Some("NY"), "US"),
    ("Austin", Some("TX"), "US"),
    ("Seattle", Some("WA"), "US"),
    ("Toronto", Some("ON"), "CA"),
    ("London", None, "GB"),
    ("Berlin", None, "DE"),
    ("Paris", None, "FR"),
    ("Sydney", Some("NSW"), "AU"),
    ("Dublin", None, "IE"),
    ("Singapore", None, "SG"),
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// What a seeding pass inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub customers: usize,
    pub accounts: usize,
    pub cards: usize,
}

/// Fills `store` with the startup data set.
pub async fn populate(store: &Store) -> SeedSummary {
    let mut rng = StdRng::from_rng(&mut rand::rng());
    let today = Utc::now().date_naive();
    let mut summary = SeedSummary::default();

    for _ in 0..CUSTOMER_COUNT {
        let draft = mock_customer(&mut rng, today);
        let customer = store
            .customers
            .insert(|id, now| draft.into_customer(id, now))
            .await;
        summary.customers += 1;

        for _ in 0..rng.random_range(ACCOUNTS_PER_CUSTOMER) {
            let account = store
                .accounts
                .insert(|id, now| mock_account(&mut rng, id, &customer.id, today, now))
                .await;
            summary.accounts += 1;

            if account.is_card_eligible() {
                store
                    .cards
                    .insert(|id, _| mock_card(&mut rng, id, &account, today))
                    .await;
                summary.cards += 1;
            }
        }
    }

    info!(
        customers = summary.customers,
        accounts = summary.accounts,
        cards = summary.cards,
        "seeded mock data"
    );
    summary
}

fn pick<T: Copy>(rng: &mut impl Rng, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

fn digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// A 16 digit, Visa-prefixed number with a valid Luhn check digit.
fn card_number(rng: &mut impl Rng) -> String {
    let mut number = format!("4{}", digits(rng, 14));
    number.push(luhn_check_digit(&number));
    number
}

fn luhn_check_digit(payload: &str) -> char {
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    char::from(b'0' + ((10 - sum % 10) % 10) as u8)
}

/// A date between January 1st of this year and today.
fn date_this_year(rng: &mut impl Rng, today: NaiveDate) -> NaiveDate {
    today - TimeDelta::days(rng.random_range(0..=i64::from(today.ordinal0())))
}

fn mock_customer(rng: &mut impl Rng, today: NaiveDate) -> NewCustomer {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let (city, state, country) = pick(rng, LOCALITIES);

    NewCustomer {
        customer_type: pick(rng, CustomerType::ALL),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            rng.random_range(1..100),
            pick(rng, EMAIL_DOMAINS)
        ),
        phone: Some(format!(
            "+1-{}-{}-{}",
            rng.random_range(200..1000),
            digits(rng, 3),
            digits(rng, 4)
        )),
        date_of_birth: Some(today - TimeDelta::days(rng.random_range(18 * 365..=85 * 365))),
        address: Address {
            street: format!("{} {}", rng.random_range(1..10_000), pick(rng, STREETS)),
            city: city.to_string(),
            state: state.map(str::to_string),
            country: country.to_string(),
            postal_code: digits(rng, 5),
        },
        kyc_status: pick(rng, KycStatus::ALL),
        risk_profile: pick(rng, RiskProfile::ALL),
        status: CustomerStatus::Active,
    }
}

fn mock_account(
    rng: &mut impl Rng,
    id: String,
    customer_id: &str,
    today: NaiveDate,
    now: NaiveDateTime,
) -> Account {
    Account {
        id,
        customer_id: customer_id.to_string(),
        account_type: pick(rng, AccountType::ALL),
        account_number: card_number(rng),
        currency: "USD".to_string(),
        balance: f64::from(rng.random_range(BALANCE)),
        available_balance: f64::from(rng.random_range(BALANCE)),
        interest_rate: f64::from(rng.random_range(INTEREST_RATE)),
        status: AccountStatus::Active,
        opened_date: date_this_year(rng, today),
        last_activity_date: now,
    }
}

fn mock_card(rng: &mut impl Rng, id: String, account: &Account, today: NaiveDate) -> Card {
    Card {
        id,
        customer_id: account.customer_id.clone(),
        account_id: account.id.clone(),
        card_type: pick(rng, &[CardType::Debit, CardType::Credit]),
        card_number: card_number(rng),
        expiry_date: today + TimeDelta::days(rng.random_range(EXPIRY_DAYS)),
        cvv: rng.random_range(CVV).to_string(),
        status: CardStatus::Active,
        daily_limit: f64::from(rng.random_range(DAILY_LIMIT)),
        monthly_limit: f64::from(rng.random_range(MONTHLY_LIMIT)),
        // A credit line is only granted to CREDIT-typed accounts, and no
        // account type is CREDIT.
        credit_limit: None,
        issued_date: date_this_year(rng, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::HasSchema;
    use std::collections::{HashMap, HashSet};

    fn in_range(value: f64, range: &RangeInclusive<u32>) -> bool {
        value >= f64::from(*range.start()) && value <= f64::from(*range.end())
    }

    #[tokio::test]
    async fn generates_ten_customers_with_linked_accounts() {
        let store = Store::new();
        let summary = populate(&store).await;

        let customers = store.customers.scan_all().await;
        let accounts = store.accounts.scan_all().await;
        assert_eq!(customers.len(), CUSTOMER_COUNT);
        assert_eq!(summary.customers, CUSTOMER_COUNT);
        assert_eq!(summary.accounts, accounts.len());

        let customer_ids: HashSet<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        let mut per_customer: HashMap<&str, usize> = HashMap::new();
        for account in &accounts {
            assert!(customer_ids.contains(account.customer_id.as_str()));
            *per_customer.entry(account.customer_id.as_str()).or_default() += 1;
        }
        assert_eq!(per_customer.len(), CUSTOMER_COUNT);
        assert!(per_customer.values().all(|n| ACCOUNTS_PER_CUSTOMER.contains(n)));
    }

    #[tokio::test]
    async fn issues_one_card_per_checking_or_savings_account() {
        let store = Store::new();
        let summary = populate(&store).await;

        let accounts = store.accounts.scan_all().await;
        let cards = store.cards.scan_all().await;
        let eligible: Vec<&Account> = accounts.iter().filter(|a| a.is_card_eligible()).collect();
        assert_eq!(cards.len(), eligible.len());
        assert_eq!(summary.cards, cards.len());

        for account in eligible {
            let issued: Vec<&Card> = cards.iter().filter(|c| c.account_id == account.id).collect();
            assert_eq!(issued.len(), 1);
            assert_eq!(issued[0].customer_id, account.customer_id);
            assert_ne!(issued[0].card_type, CardType::Prepaid);
            assert_eq!(issued[0].credit_limit, None);
        }
    }

    #[tokio::test]
    async fn values_stay_within_ranges() {
        let store = Store::new();
        populate(&store).await;
        let today = Utc::now().date_naive();

        for account in store.accounts.scan_all().await {
            assert!(in_range(account.balance, &BALANCE));
            assert!(in_range(account.available_balance, &BALANCE));
            assert!(in_range(account.interest_rate, &INTEREST_RATE));
            assert_eq!(account.opened_date.year(), today.year());
        }
        for card in store.cards.scan_all().await {
            assert!(in_range(card.daily_limit, &DAILY_LIMIT));
            assert!(in_range(card.monthly_limit, &MONTHLY_LIMIT));
            assert_eq!(card.cvv.len(), 3);
            assert!(card.expiry_date > today);
            assert_eq!(card.card_number.len(), 16);
        }
        assert!(store.transactions.is_empty().await);
        assert!(store.loans.is_empty().await);
    }

    #[tokio::test]
    async fn generated_records_satisfy_their_schemas() {
        let store = Store::new();
        populate(&store).await;

        for customer in store.customers.scan_all().await {
            let value = serde_json::to_value(&customer).unwrap();
            assert_eq!(Customer::schema().validate(&value), Ok(()));
        }
        for account in store.accounts.scan_all().await {
            let value = serde_json::to_value(&account).unwrap();
            assert_eq!(Account::schema().validate(&value), Ok(()));
        }
        for card in store.cards.scan_all().await {
            let value = serde_json::to_value(&card).unwrap();
            assert_eq!(Card::schema().validate(&value), Ok(()));
        }
    }

    #[test]
    fn luhn_digit_matches_known_number() {
        assert_eq!(luhn_check_digit("411111111111111"), '1');
        assert_eq!(luhn_check_digit("7992739871"), '3');
    }
}
