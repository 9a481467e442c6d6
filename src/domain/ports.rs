use super::invoice::Invoice;
use crate::error::Result;

/// Storage port for invoices, keyed by their reference string.
pub trait InvoiceStore {
    /// Adds an invoice to the store. References are assumed unique; the
    /// store does not enforce it.
    fn add(&mut self, invoice: Invoice) -> Result<()>;

    /// Exact-match lookup by reference. Returns an owned copy of the stored
    /// invoice, or `None` when absent.
    fn get(&self, reference: &str) -> Result<Option<Invoice>>;

    /// Writes the invoice state back, durably where the backend supports it.
    fn persist(&mut self, invoice: Invoice) -> Result<()>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;

impl<S: InvoiceStore + ?Sized> InvoiceStore for Box<S> {
    fn add(&mut self, invoice: Invoice) -> Result<()> {
        (**self).add(invoice)
    }

    fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        (**self).get(reference)
    }

    fn persist(&mut self, invoice: Invoice) -> Result<()> {
        (**self).persist(invoice)
    }
}
