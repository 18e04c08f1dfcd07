use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("unknown denomination: {0}")]
    UnknownDenomination(String),
    #[error("unknown product: {0}")]
    UnknownProduct(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("event error: {0}")]
    EventError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VendingError>;

/// Failure reported by a physical or simulated actuator (dispenser servo,
/// coin ejector). Never crosses the controller boundary: the machine notifies
/// the failure and keeps its bookkeeping consistent.
#[derive(Error, Debug)]
#[error("actuation failed: {0}")]
pub struct ActuationError(pub String);
