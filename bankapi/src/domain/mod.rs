pub mod account;
pub mod card;
pub mod customer;

/// Closed enumerations used by the domain records.
///
/// Every enum carries its wire names in `VARIANTS`, which is what the schema
/// registry publishes and validates against, so the two cannot disagree.
///
pub mod enums;
pub mod loan;
pub mod transaction;

/// Hand-built records shared by unit tests.
///
#[cfg(test)]
pub mod fixtures;

pub mod prelude {
    pub use super::{
        account::Account,
        card::Card,
        customer::{Address, Customer, NewCustomer},
        enums::*,
        loan::{Loan, LoanPayment},
        transaction::Transaction,
    };
}
