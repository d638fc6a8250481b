/// HTTP interface.
///
/// Routes requests onto the store, the query engine and the schema registry.
/// Every failure leaves through `ApiError`, which renders the client-error
/// responses.
///
pub mod api;
pub mod core;

/// Domain records served by the API.
///
/// Field names follow the wire format (camelCase) through serde; the
/// constraint tables for each record live in `crate::schema::entities`.
///
pub mod domain;

/// Filtering and pagination over a collection.
///
/// Every list endpoint answers with the same `Paginated` envelope:
/// the requested window of the filtered records plus the filtered total.
///
pub mod query;

/// Declarative constraint tables for every entity.
///
/// Each `EntitySchema` is the one place an entity's shape is written down.
/// The registry endpoints render it as an OpenAPI schema object and
/// `EntitySchema::validate` checks incoming JSON against it, so what the API
/// publishes and what it enforces come from the same table.
///
pub mod schema;

/// Synthetic data generation for the store.
///
/// Produces a small but linked graph: customers, their accounts, and one card
/// for every checking or savings account. Values are random within fixed
/// ranges; nothing about them is reproducible between runs.
///
pub mod seed;

/// Process-lifetime, append-only storage for the five collections.
///
/// Each collection sits behind its own `RwLock`: readers run concurrently,
/// an insert holds the write lock while it mints the id and appends, so a
/// reader never sees a half-inserted record or a duplicate id.
///
pub mod store;
