use async_trait::async_trait;
use rusqlite::{Connection, params};
use std::sync::Mutex;

use super::{RawRow, SheetRows, SheetStore, StoreError};

/// Sheet persisted in a local sqlite file, one row of cells per sheet row.
///
/// `pos` only has to be monotonically increasing; reads order by it, so
/// deletes never renumber surviving rows.
pub struct SqliteSheet {
    conn: Mutex<Connection>,
    header: Vec<String>,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl SqliteSheet {
    /// Opens (creating if needed) the sheet at `path`.
    pub fn open(path: &str, header: Vec<String>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sheet_row (
                pos INTEGER PRIMARY KEY AUTOINCREMENT,
                cells TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            header,
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::new("sqlite connection lock poisoned"))
    }

    fn encode(row: &RawRow) -> Result<String, StoreError> {
        serde_json::to_string(row).map_err(|e| StoreError::new(e.to_string()))
    }

    fn decode(cells: &str) -> Result<RawRow, StoreError> {
        serde_json::from_str(cells).map_err(|e| StoreError::new(e.to_string()))
    }
}

#[async_trait]
impl SheetStore for SqliteSheet {
    async fn read_all(&self) -> Result<SheetRows, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT cells FROM sheet_row ORDER BY pos")?;
        let mut rows = Vec::new();
        let mut query = stmt.query([])?;
        while let Some(db_row) = query.next()? {
            let cells: String = db_row.get(0)?;
            rows.push(Self::decode(&cells)?);
        }
        Ok(SheetRows {
            header: self.header.clone(),
            rows,
        })
    }

    async fn append_row(&self, row: RawRow) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO sheet_row (cells) VALUES (?1)",
            params![Self::encode(&row)?],
        )?;
        Ok(())
    }

    async fn append_rows(&self, rows: Vec<RawRow>) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for row in &rows {
            tx.execute(
                "INSERT INTO sheet_row (cells) VALUES (?1)",
                params![Self::encode(row)?],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    async fn delete_row(&self, index: usize) -> Result<(), StoreError> {
        if index <= 1 {
            return Err(StoreError::new("cannot delete the header row"));
        }
        let conn = self.lock()?;
        // The header is virtual here, so sheet row i is the (i-2)th stored row.
        let offset = (index - 2) as i64;
        let pos: Option<i64> = conn
            .query_row(
                "SELECT pos FROM sheet_row ORDER BY pos LIMIT 1 OFFSET ?1",
                params![offset],
                |r| r.get(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(StoreError::from(other)),
            })?;
        match pos {
            Some(pos) => {
                conn.execute("DELETE FROM sheet_row WHERE pos = ?1", params![pos])?;
                Ok(())
            }
            None => Err(StoreError::new(format!(
                "row {index} is past the end of the sheet"
            ))),
        }
    }
}
