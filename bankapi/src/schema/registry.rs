use serde_json::{Map, Value};

use super::{entities::*, EntitySchema};

static SCHEMAS: &[&EntitySchema] = &[
    &ADDRESS,
    &CUSTOMER,
    &ACCOUNT,
    &CARD,
    &TRANSACTION,
    &LOAN_PAYMENT,
    &LOAN,
];

pub fn get(name: &str) -> Option<&'static EntitySchema> {
    SCHEMAS.iter().copied().find(|schema| schema.name == name)
}

/// All schemas rendered as a `name -> definition` object.
pub fn document() -> Map<String, Value> {
    SCHEMAS
        .iter()
        .map(|schema| (schema.name.to_string(), schema.to_json()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::HasSchema;
    use serde::Serialize;

    #[test]
    fn finds_schema_by_name() {
        assert_eq!(get("Customer").map(|s| s.name), Some("Customer"));
        assert!(get("NoSuchThing").is_none());
        assert!(get("customer").is_none());
    }

    #[test]
    fn document_lists_every_schema() {
        let doc = document();
        let names: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["Address", "Customer", "Account", "Card", "Transaction", "LoanPayment", "Loan"]
        );
    }

    #[test]
    fn customer_constraints_match_the_model() {
        let customer = get("Customer").unwrap();
        let required: Vec<&str> = customer.required().collect();
        for name in [
            "id",
            "customerType",
            "firstName",
            "lastName",
            "email",
            "address",
            "kycStatus",
            "riskProfile",
            "status",
            "createdAt",
            "updatedAt",
        ] {
            assert!(required.contains(&name), "{name} should be required");
        }
        assert!(!required.contains(&"phone"));
        assert!(!required.contains(&"dateOfBirth"));

        let doc = customer.to_json();
        assert_eq!(doc["properties"]["customerType"]["enum"], serde_json::json!(["PERSONAL", "BUSINESS"]));
        assert_eq!(doc["properties"]["riskProfile"]["enum"], serde_json::json!(["LOW", "MEDIUM", "HIGH"]));
        assert_eq!(
            doc["properties"]["status"]["enum"],
            serde_json::json!(["ACTIVE", "INACTIVE", "BLOCKED"])
        );
    }

    /// A serialized record must satisfy its own table and must not carry
    /// fields the table does not know about.
    fn assert_agrees<T: Serialize + HasSchema>(record: &T) {
        let value = serde_json::to_value(record).unwrap();
        let schema = T::schema();
        assert_eq!(schema.validate(&value), Ok(()), "{} does not validate", schema.name);
        for key in value.as_object().unwrap().keys() {
            assert!(schema.field(key).is_some(), "{}.{key} missing from schema", schema.name);
        }
        for name in schema.required() {
            assert!(value.get(name).is_some(), "{}.{name} not serialized", schema.name);
        }
    }

    #[test]
    fn serialized_records_agree_with_their_schemas() {
        let fixtures = crate::domain::fixtures::sample();
        assert_agrees(&fixtures.customer);
        assert_agrees(&fixtures.customer.address);
        assert_agrees(&fixtures.account);
        assert_agrees(&fixtures.card);
        assert_agrees(&fixtures.transaction);
        assert_agrees(&fixtures.loan);
        assert_agrees(&fixtures.loan.payment_schedule[0]);
    }
}
