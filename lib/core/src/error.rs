use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog file not found or unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate SKU in catalog: {0}")]
    DuplicateSku(String),

    #[error("Invalid catalog item '{sku}': {reason}")]
    InvalidItem { sku: String, reason: String },

    #[error("Index build exceeded the {limit_ms}ms budget after {indexed} items")]
    BuildTimeout { limit_ms: u64, indexed: usize },

    #[error("Index query exceeded the {limit_ms}ms budget")]
    QueryTimeout { limit_ms: u64 },
}

impl Error {
    /// Timeouts are retryable; catalog load failures are fatal until the
    /// source file is corrected.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::BuildTimeout { .. } | Error::QueryTimeout { .. }
        )
    }
}
