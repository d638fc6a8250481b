use serde::{Deserialize, Serialize};

/// Error returned when parsing a name that is not one of the enum's variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Wire names, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[$($text),+];

            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum!(CustomerType { Personal => "PERSONAL", Business => "BUSINESS" });

string_enum!(KycStatus {
    Pending => "PENDING",
    Verified => "VERIFIED",
    Rejected => "REJECTED",
});

string_enum!(RiskProfile { Low => "LOW", Medium => "MEDIUM", High => "HIGH" });

string_enum!(CustomerStatus {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
    Blocked => "BLOCKED",
});

string_enum!(AccountType {
    Checking => "CHECKING",
    Savings => "SAVINGS",
    Investment => "INVESTMENT",
    FixedDeposit => "FIXED_DEPOSIT",
});

string_enum!(AccountStatus { Active => "ACTIVE", Frozen => "FROZEN", Closed => "CLOSED" });

string_enum!(CardType { Debit => "DEBIT", Credit => "CREDIT", Prepaid => "PREPAID" });

string_enum!(CardStatus { Active => "ACTIVE", Blocked => "BLOCKED", Expired => "EXPIRED" });

string_enum!(TransactionType {
    Deposit => "DEPOSIT",
    Withdrawal => "WITHDRAWAL",
    Transfer => "TRANSFER",
    Payment => "PAYMENT",
});

string_enum!(TransactionStatus {
    Pending => "PENDING",
    Completed => "COMPLETED",
    Failed => "FAILED",
    Reversed => "REVERSED",
});

string_enum!(PaymentStatus { Pending => "PENDING", Paid => "PAID", Overdue => "OVERDUE" });

string_enum!(LoanType {
    Personal => "PERSONAL",
    Mortgage => "MORTGAGE",
    Business => "BUSINESS",
    Auto => "AUTO",
});

string_enum!(LoanStatus {
    Pending => "PENDING",
    Active => "ACTIVE",
    Paid => "PAID",
    Defaulted => "DEFAULTED",
});
