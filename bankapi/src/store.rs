use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::prelude::*;
use crate::query::{self, Filter, PageRequest, Paginated};

/// A record addressable by its identifier.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// An insertion-ordered collection of records.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    rows: RwLock<Rows<T>>,
}

/// Records in insertion order plus their positions keyed by id.
#[derive(Debug)]
struct Rows<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Rows {
                items: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Appends a record built from a freshly minted id and the insert time.
    ///
    /// `build` must use the id it is given; the stored record is returned.
    pub async fn insert<F>(&self, build: F) -> T
    where
        F: FnOnce(String, NaiveDateTime) -> T,
    {
        let mut rows = self.rows.write().await;

        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !rows.index.contains_key(&candidate) {
                break candidate;
            }
        };
        let record = build(id.clone(), Utc::now().naive_utc());
        debug_assert_eq!(record.id(), id);

        let position = rows.items.len();
        rows.index.insert(record.id().to_string(), position);
        rows.items.push(record.clone());
        debug!(collection = self.name, id = %id, "inserted record");
        record
    }

    /// Snapshot of the whole collection in insertion order.
    pub async fn scan_all(&self) -> Vec<T> {
        self.rows.read().await.items.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<T> {
        let rows = self.rows.read().await;
        rows.index.get(id).map(|&position| rows.items[position].clone())
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Filters then windows the collection under a single read lock.
    pub async fn query<F: Filter<T>>(&self, filter: &F, page: PageRequest) -> Paginated<T> {
        let rows = self.rows.read().await;
        query::paginate(rows.items.iter(), filter, page)
    }
}

/// The in-memory database. Built once at startup and shared by handle.
#[derive(Debug)]
pub struct Store {
    pub customers: Collection<Customer>,
    pub accounts: Collection<Account>,
    pub cards: Collection<Card>,
    pub transactions: Collection<Transaction>,
    pub loans: Collection<Loan>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            customers: Collection::new("customers"),
            accounts: Collection::new("accounts"),
            cards: Collection::new("cards"),
            transactions: Collection::new("transactions"),
            loans: Collection::new("loans"),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::query::All;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = Store::new();
        let customer = store
            .customers
            .insert(|id, now| fixtures::new_customer("Ann").into_customer(id, now))
            .await;

        assert!(Uuid::parse_str(&customer.id).is_ok());
        assert_eq!(customer.created_at, customer.updated_at);
        let fetched = store.customers.get_by_id(&customer.id).await;
        assert_eq!(fetched, Some(customer));
    }

    #[tokio::test]
    async fn scan_preserves_insertion_order() {
        let store = Store::new();
        let mut ids = Vec::new();
        for name in ["Ann", "Bob", "Cid"] {
            let c = store
                .customers
                .insert(|id, now| fixtures::new_customer(name).into_customer(id, now))
                .await;
            ids.push(c.id);
        }

        let scanned: Vec<String> = store.customers.scan_all().await.into_iter().map(|c| c.id).collect();
        assert_eq!(scanned, ids);
    }

    #[tokio::test]
    async fn unknown_id_is_absent() {
        let store = Store::new();
        assert!(store.loans.get_by_id("missing").await.is_none());
        assert!(store.loans.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_inserts_keep_ids_unique() {
        let store = Arc::new(Store::new());
        let mut handles = Vec::new();
        for n in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .accounts
                    .insert(|id, _| fixtures::account(&id, &format!("c-{n}"), AccountType::Savings))
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let accounts = store.accounts.scan_all().await;
        let ids: HashSet<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(accounts.len(), 50);
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn lookup_finds_every_record_by_id() {
        let store = Store::new();
        let mut inserted = Vec::new();
        for n in 0..200 {
            let account = store
                .accounts
                .insert(|id, _| fixtures::account(&id, &format!("c-{n}"), AccountType::Checking))
                .await;
            inserted.push(account);
        }

        assert_eq!(store.accounts.len().await, 200);
        for account in &inserted {
            assert_eq!(store.accounts.get_by_id(&account.id).await.as_ref(), Some(account));
        }
        assert_eq!(store.accounts.scan_all().await, inserted);
    }

    #[tokio::test]
    async fn query_reads_through_the_collection() {
        let store = Store::new();
        for _ in 0..3 {
            store
                .cards
                .insert(|id, _| {
                    let mut card = fixtures::sample().card;
                    card.id = id;
                    card
                })
                .await;
        }
        let page = store.cards.query(&All, PageRequest::new(Some(2), Some(2)).unwrap()).await;
        assert_eq!(page.total, 3);
        assert_eq!(page.data.len(), 1);
    }
}
