use std::fmt;

/// Unified error type for catalog, ledger and console operations
#[derive(Debug)]
pub enum StockError {
    /// File I/O error (missing file, unreadable source, failed write)
    Io(std::io::Error),
    /// Malformed catalog data (bad encoding, wrong column count, unparsable field)
    Csv(csv::Error),
    /// Sale rejected: the requested quantity is not strictly below the current stock
    InsufficientStock { requested: u32, available: u32 },
    /// A previously selected record is no longer present in the catalog
    RecordVanished(String),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::Io(e) => write!(f, "I/O error: {}", e),
            StockError::Csv(e) => write!(f, "Catalog data error: {}", e),
            StockError::InsufficientStock {
                requested,
                available,
            } => write!(
                f,
                "Insufficient stock: requested {} with {} available",
                requested, available
            ),
            StockError::RecordVanished(title) => {
                write!(f, "Record no longer in the catalog: {}", title)
            }
        }
    }
}

impl std::error::Error for StockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StockError::Io(e) => Some(e),
            StockError::Csv(e) => Some(e),
            StockError::InsufficientStock { .. } => None,
            StockError::RecordVanished(_) => None,
        }
    }
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::Io(err)
    }
}

impl From<csv::Error> for StockError {
    fn from(err: csv::Error) -> Self {
        StockError::Csv(err)
    }
}

/// Result type alias for stock operations
pub type StockResult<T> = Result<T, StockError>;
