use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment submitted against an invoice, matched by `reference`.
///
/// Immutable once constructed; an accepted payment is appended to the
/// invoice's payment history and owned by it from then on.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub amount: Decimal,
    pub reference: String,
}

impl Payment {
    pub fn new(amount: Decimal, reference: impl Into<String>) -> Self {
        Self {
            amount,
            reference: reference.into(),
        }
    }
}
