use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::{PaymentError, Result};

/// Column family for storing invoice states.
pub const CF_INVOICES: &str = "invoices";

/// A persistent invoice store backed by RocksDB.
///
/// Invoices are stored as JSON documents keyed by their reference bytes.
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the invoices column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_invoices = ColumnFamilyDescriptor::new(CF_INVOICES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_invoices])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf_invoices(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_INVOICES)
            .ok_or_else(|| PaymentError::Storage("invoices column family not found".to_string()))
    }

    fn put_invoice(&self, invoice: &Invoice) -> Result<()> {
        let cf = self.cf_invoices()?;
        let value = serde_json::to_vec(invoice)
            .map_err(|e| PaymentError::Storage(format!("serialization error: {e}")))?;

        self.db.put_cf(cf, invoice.reference.as_bytes(), value)?;

        Ok(())
    }
}

impl InvoiceStore for RocksDBStore {
    fn add(&mut self, invoice: Invoice) -> Result<()> {
        self.put_invoice(&invoice)
    }

    fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let cf = self.cf_invoices()?;

        match self.db.get_cf(cf, reference.as_bytes())? {
            Some(bytes) => {
                let invoice = serde_json::from_slice(&bytes)
                    .map_err(|e| PaymentError::Storage(format!("deserialization error: {e}")))?;
                Ok(Some(invoice))
            }
            None => Ok(None),
        }
    }

    fn persist(&mut self, invoice: Invoice) -> Result<()> {
        self.put_invoice(&invoice)
    }
}
