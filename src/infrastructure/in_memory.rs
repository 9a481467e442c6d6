use std::collections::HashMap;

use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::Result;

/// An in-memory invoice store backed by a `HashMap` keyed by reference.
///
/// Ideal for testing or small datasets where persistence is not required.
/// `persist` writes the entry back, which keeps lookups consistent with
/// processed state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: HashMap<String, Invoice>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceStore for InMemoryInvoiceStore {
    fn add(&mut self, invoice: Invoice) -> Result<()> {
        self.invoices.insert(invoice.reference.clone(), invoice);
        Ok(())
    }

    fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        Ok(self.invoices.get(reference).cloned())
    }

    fn persist(&mut self, invoice: Invoice) -> Result<()> {
        // No durable backend here; the write-back is the whole save.
        self.invoices.insert(invoice.reference.clone(), invoice);
        Ok(())
    }
}
