//! In-memory sheet backend for testing.

use crate::error::Result;
use crate::roster::cell::Cell;
use crate::roster::traits::SheetStore;
use std::sync::{PoisonError, RwLock};

/// In-memory worksheet.
#[derive(Debug, Default)]
pub struct MemorySheet {
    rows: RwLock<Vec<Vec<Cell>>>,
}

impl MemorySheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet holding `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Snapshot of the current rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SheetStore for MemorySheet {
    fn read_rows(&self) -> Result<Vec<Vec<Cell>>> {
        Ok(self.rows())
    }

    fn write_rows(&self, rows: &[Vec<Cell>]) -> Result<()> {
        let mut current = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        *current = rows.to_vec();
        Ok(())
    }
}
