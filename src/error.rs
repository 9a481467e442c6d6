use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Fatal processing failures.
///
/// Expected business results (overpayment, already fully paid, partial
/// completion) are not errors; they are returned as
/// [`Outcome`](crate::application::processor::Outcome) values.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// No invoice matches the payment's reference.
    #[error("there is no invoice matching this payment")]
    NotFound,
    /// The invoice state contradicts itself; indicates caller or store
    /// corruption.
    #[error("invoice is in an invalid state: {0}")]
    InvariantViolation(String),
    /// The payment itself is unprocessable.
    #[error("invalid payment: {0}")]
    InvalidInput(String),
    /// A store backend failed.
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
