use async_trait::async_trait;
use std::sync::Mutex;

use super::{RawRow, SheetRows, SheetStore, StoreError};

/// In-memory sheet, used by tests and by `--store memory` runs.
pub struct MemorySheet {
    inner: Mutex<SheetRows>,
}

impl MemorySheet {
    #[must_use]
    pub fn new(header: Vec<String>) -> Self {
        Self {
            inner: Mutex::new(SheetRows {
                header,
                rows: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn with_rows(header: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            inner: Mutex::new(SheetRows { header, rows }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SheetRows>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::new("sheet lock poisoned"))
    }
}

#[async_trait]
impl SheetStore for MemorySheet {
    async fn read_all(&self) -> Result<SheetRows, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn append_row(&self, row: RawRow) -> Result<(), StoreError> {
        self.lock()?.rows.push(row);
        Ok(())
    }

    async fn append_rows(&self, rows: Vec<RawRow>) -> Result<(), StoreError> {
        self.lock()?.rows.extend(rows);
        Ok(())
    }

    async fn delete_row(&self, index: usize) -> Result<(), StoreError> {
        let mut sheet = self.lock()?;
        if index <= 1 {
            return Err(StoreError::new("cannot delete the header row"));
        }
        let data_idx = index - 2;
        if data_idx >= sheet.rows.len() {
            return Err(StoreError::new(format!(
                "row {index} is past the end of the sheet"
            )));
        }
        sheet.rows.remove(data_idx);
        Ok(())
    }
}
