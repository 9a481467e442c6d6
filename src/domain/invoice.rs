use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::payment::Payment;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    Standard,
    Commercial,
}

impl InvoiceType {
    /// Tax rate applied to payments recorded against invoices of this type.
    pub fn tax_rate(&self) -> Decimal {
        match self {
            InvoiceType::Standard => Decimal::ZERO,
            InvoiceType::Commercial => dec!(0.14),
        }
    }
}

/// Financial state of a single invoice.
///
/// `amount_paid` and `tax_amount` only move through [`Invoice::apply_payment`];
/// `payments` is append-only. After any successful processing step
/// `amount_paid <= amount` holds.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    /// Unique identifier used for store lookups.
    pub reference: String,
    /// Total amount owed.
    pub amount: Decimal,
    /// Cumulative sum of recorded payment amounts.
    pub amount_paid: Decimal,
    /// Cumulative tax accrued on recorded payments.
    pub tax_amount: Decimal,
    /// Payments already applied to this invoice, in order of application.
    pub payments: Vec<Payment>,
    pub r#type: InvoiceType,
}

impl Invoice {
    /// Creates an invoice with nothing paid against it yet.
    pub fn new(reference: impl Into<String>, amount: Decimal, r#type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            payments: Vec::new(),
            r#type,
        }
    }

    /// Amount still owed.
    pub fn remaining(&self) -> Decimal {
        self.amount - self.amount_paid
    }

    pub fn has_payments(&self) -> bool {
        !self.payments.is_empty()
    }

    /// Records an accepted payment: bumps the paid total, accrues tax at the
    /// invoice's rate and appends the payment to the history.
    pub fn apply_payment(&mut self, payment: Payment) {
        self.amount_paid += payment.amount;
        self.tax_amount += payment.amount * self.r#type.tax_rate();
        self.payments.push(payment);
    }
}
