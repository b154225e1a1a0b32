use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub mod memory;
pub mod sqlite;

pub use memory::MemorySheet;
pub use sqlite::SqliteSheet;

/// One raw sheet row: cell values in column order.
pub type RawRow = Vec<String>;

/// Everything the store holds: the header row plus the data rows, in order.
#[derive(Debug, Clone)]
pub struct SheetRows {
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StoreError {}

impl From<String> for StoreError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StoreError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Row-oriented sheet access, the only surface the rest of the crate talks to.
///
/// Row indices are 1-based and header-inclusive: index 1 is the header, index
/// 2 is the first data row. Deleting row i shifts every later row down by one,
/// so multi-row deletes must run in descending index order.
#[async_trait]
pub trait SheetStore: Send + Sync {
    async fn read_all(&self) -> Result<SheetRows, StoreError>;
    async fn append_row(&self, row: RawRow) -> Result<(), StoreError>;
    /// Appends every row or none of them.
    async fn append_rows(&self, rows: Vec<RawRow>) -> Result<(), StoreError>;
    async fn delete_row(&self, index: usize) -> Result<(), StoreError>;
}
