use super::{EntitySchema, FieldDef, FieldType};
use crate::domain::prelude::*;

use super::FieldType::*;

pub static ADDRESS: EntitySchema = EntitySchema {
    name: "Address",
    description: "Postal address of a customer.",
    fields: &[
        FieldDef::required("street", String),
        FieldDef::required("city", String),
        FieldDef::optional("state", String),
        FieldDef::required("country", String).length(2, 2),
        FieldDef::required("postalCode", String),
    ],
};

pub static CUSTOMER: EntitySchema = EntitySchema {
    name: "Customer",
    description: "A personal or business banking customer.",
    fields: &[
        FieldDef::read_only("id", Id),
        FieldDef::required("customerType", Enum(CustomerType::VARIANTS)),
        FieldDef::required("firstName", String),
        FieldDef::required("lastName", String),
        FieldDef::required("email", Email),
        FieldDef::optional("phone", String),
        FieldDef::optional("dateOfBirth", Date),
        FieldDef::required("address", Object(&ADDRESS)),
        FieldDef::required("kycStatus", Enum(KycStatus::VARIANTS)),
        FieldDef::required("riskProfile", Enum(RiskProfile::VARIANTS)),
        FieldDef::required("status", Enum(CustomerStatus::VARIANTS)),
        FieldDef::read_only("createdAt", DateTime),
        FieldDef::read_only("updatedAt", DateTime),
    ],
};

pub static ACCOUNT: EntitySchema = EntitySchema {
    name: "Account",
    description: "A deposit or investment account held by a customer.",
    fields: &[
        FieldDef::read_only("id", Id),
        FieldDef::required("customerId", Id),
        FieldDef::required("accountType", Enum(AccountType::VARIANTS)),
        FieldDef::required("accountNumber", String),
        FieldDef::required("currency", String),
        FieldDef::required("balance", Number),
        FieldDef::required("availableBalance", Number),
        FieldDef::required("interestRate", Number),
        FieldDef::required("status", Enum(AccountStatus::VARIANTS)),
        FieldDef::required("openedDate", Date),
        FieldDef::required("lastActivityDate", DateTime),
    ],
};

pub static CARD: EntitySchema = EntitySchema {
    name: "Card",
    description: "A payment card linked to an account.",
    fields: &[
        FieldDef::read_only("id", Id),
        FieldDef::required("customerId", Id),
        FieldDef::required("accountId", Id),
        FieldDef::required("cardType", Enum(CardType::VARIANTS)),
        FieldDef::required("cardNumber", String),
        FieldDef::required("expiryDate", Date),
        FieldDef::required("cvv", String),
        FieldDef::required("status", Enum(CardStatus::VARIANTS)),
        FieldDef::required("dailyLimit", Number),
        FieldDef::required("monthlyLimit", Number),
        FieldDef::optional("creditLimit", Number),
        FieldDef::required("issuedDate", Date),
    ],
};

pub static TRANSACTION: EntitySchema = EntitySchema {
    name: "Transaction",
    description: "A movement of funds on an account.",
    fields: &[
        FieldDef::read_only("id", Id),
        FieldDef::required("accountId", Id),
        FieldDef::required("type", Enum(TransactionType::VARIANTS)),
        FieldDef::required("amount", Number),
        FieldDef::required("currency", String),
        FieldDef::optional("description", String),
        FieldDef::required("status", Enum(TransactionStatus::VARIANTS)),
        FieldDef::required("timestamp", DateTime),
        FieldDef::optional("referenceId", String),
        FieldDef::optional("metadata", Map),
    ],
};

pub static LOAN_PAYMENT: EntitySchema = EntitySchema {
    name: "LoanPayment",
    description: "One scheduled instalment of a loan.",
    fields: &[
        FieldDef::required("dueDate", Date),
        FieldDef::required("amount", Number),
        FieldDef::required("status", Enum(PaymentStatus::VARIANTS)),
        FieldDef::optional("paidDate", Date),
    ],
};

static LOAN_PAYMENT_ITEM: FieldType = Object(&LOAN_PAYMENT);

pub static LOAN: EntitySchema = EntitySchema {
    name: "Loan",
    description: "A loan granted to a customer with its repayment schedule.",
    fields: &[
        FieldDef::read_only("id", Id),
        FieldDef::required("customerId", Id),
        FieldDef::required("type", Enum(LoanType::VARIANTS)),
        FieldDef::required("amount", Number),
        FieldDef::required("currency", String),
        FieldDef::required("interestRate", Number),
        FieldDef::required("term", Integer),
        FieldDef::required("status", Enum(LoanStatus::VARIANTS)),
        FieldDef::required("startDate", Date),
        FieldDef::required("endDate", Date),
        FieldDef::required("remainingBalance", Number),
        FieldDef::required("paymentSchedule", Array(&LOAN_PAYMENT_ITEM)),
    ],
};
