use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::invoice::Invoice;
use crate::domain::payment::Payment;
use crate::domain::ports::InvoiceStore;
use crate::error::{PaymentError, Result};
use crate::infrastructure::in_memory::InMemoryInvoiceStore;

/// Business result of a processed payment.
///
/// These are expected outcomes communicated to the caller, not failures;
/// fatal conditions surface as [`PaymentError`] instead. `Display` renders
/// the fixed human-readable message for each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing is owed and nothing was ever paid.
    NoPaymentNeeded,
    /// The payment exceeds the invoice total; no prior payments exist.
    PaymentExceedsInvoice,
    /// The payment exceeds what is left after earlier partial payments.
    PaymentExceedsRemaining,
    /// A single payment settled the invoice in full.
    AlreadyFullyPaid,
    /// A further partial payment brought the invoice to fully paid.
    FullyPaid,
    /// The first partial payment was recorded.
    PartiallyPaid,
    /// A further partial payment was recorded, balance still outstanding.
    StillPartiallyPaid,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::NoPaymentNeeded => "no payment needed",
            Outcome::PaymentExceedsInvoice => "the payment is greater than the invoice amount",
            Outcome::PaymentExceedsRemaining => {
                "the payment is greater than the partial amount remaining"
            }
            Outcome::AlreadyFullyPaid => "invoice was already fully paid",
            Outcome::FullyPaid => "final partial payment received, invoice is now fully paid",
            Outcome::PartiallyPaid => "invoice is now partially paid",
            Outcome::StillPartiallyPaid => {
                "another partial payment received, still not fully paid"
            }
        })
    }
}

/// Applies payments against invoices held in an [`InvoiceStore`].
///
/// One `process_payment` call performs exactly one store lookup and, unless
/// the call fails, exactly one persist. The processor assumes exclusive
/// access to the invoice for the duration of the call.
pub struct PaymentProcessor<S: InvoiceStore = InMemoryInvoiceStore> {
    pub store: S,
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentProcessor {
    pub fn new() -> Self {
        Self {
            store: InMemoryInvoiceStore::new(),
        }
    }
}

impl<S: InvoiceStore> PaymentProcessor<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Validates the payment against its invoice, applies it when accepted
    /// and persists the result.
    ///
    /// Fatal conditions ([`PaymentError`]) abort before anything is mutated
    /// or persisted.
    pub fn process_payment(&mut self, payment: &Payment) -> Result<Outcome> {
        let mut invoice = self
            .store
            .get(&payment.reference)?
            .ok_or(PaymentError::NotFound)?;

        let outcome = evaluate(&mut invoice, payment)?;

        self.store.persist(invoice)?;
        debug!(reference = %payment.reference, %outcome, "payment processed");
        Ok(outcome)
    }
}

/// The payment-validation decision tree. Mutates `invoice` only when the
/// payment is accepted.
fn evaluate(invoice: &mut Invoice, payment: &Payment) -> Result<Outcome> {
    if payment.amount < Decimal::ZERO {
        warn!(reference = %payment.reference, "rejected negative payment amount");
        return Err(PaymentError::InvalidInput(
            "payment amount must be non-negative".to_string(),
        ));
    }

    let remaining = invoice.remaining();

    if remaining == Decimal::ZERO {
        if invoice.has_payments() {
            return Err(PaymentError::InvariantViolation(
                "zero remaining balance but has recorded payments".to_string(),
            ));
        }
        return Ok(Outcome::NoPaymentNeeded);
    }

    let had_prior_payments = invoice.has_payments();

    if payment.amount > remaining {
        return Ok(if had_prior_payments {
            Outcome::PaymentExceedsRemaining
        } else {
            Outcome::PaymentExceedsInvoice
        });
    }

    invoice.apply_payment(payment.clone());

    if invoice.amount_paid == invoice.amount {
        Ok(if had_prior_payments {
            Outcome::FullyPaid
        } else {
            Outcome::AlreadyFullyPaid
        })
    } else {
        Ok(if had_prior_payments {
            Outcome::StillPartiallyPaid
        } else {
            Outcome::PartiallyPaid
        })
    }
}
