//! Workbook file backend.
//!
//! Reads `.xls` and `.xlsx` through `calamine` and writes through
//! `rust_xlsxwriter`. Written files are always in the xlsx format, whatever
//! extension the path carries.

use crate::error::{Error, Result};
use crate::roster::cell::Cell;
use crate::roster::traits::SheetStore;
use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One worksheet of a workbook on disk.
#[derive(Debug, Clone)]
pub struct WorkbookFile {
    path: PathBuf,
    sheet: String,
}

impl WorkbookFile {
    /// Create a backend for `sheet` inside the workbook at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: calamine::Error) -> Error {
        Error::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: XlsxError) -> Error {
        Error::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl SheetStore for WorkbookFile {
    fn read_rows(&self) -> Result<Vec<Vec<Cell>>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| self.read_error(e))?;
        let range = workbook
            .worksheet_range(&self.sheet)
            .map_err(|e| self.read_error(e))?;

        // Ranges start at the first used cell; pad back to A1 so column
        // positions match what the user sees.
        let (first_row, first_col) = range.start().unwrap_or((0, 0));
        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); first_row as usize];
        for row in range.rows() {
            let mut cells = vec![Cell::Empty; first_col as usize];
            cells.extend(row.iter().map(cell_from_data));
            rows.push(cells);
        }

        debug!(path = %self.path.display(), sheet = %self.sheet, rows = rows.len(), "read worksheet");
        Ok(rows)
    }

    /// Indices beyond the xlsx row/column range fail as write errors.
    fn write_rows(&self, rows: &[Vec<Cell>]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&self.sheet)
            .map_err(|e| self.write_error(e))?;

        for (r, row) in rows.iter().enumerate() {
            let r = u32::try_from(r)
                .map_err(|_| self.write_error(XlsxError::RowColumnLimitError))?;
            for (c, cell) in row.iter().enumerate() {
                let c = u16::try_from(c)
                    .map_err(|_| self.write_error(XlsxError::RowColumnLimitError))?;
                match cell {
                    Cell::Empty => {}
                    Cell::Number(n) => {
                        worksheet
                            .write_number(r, c, *n)
                            .map_err(|e| self.write_error(e))?;
                    }
                    Cell::Text(s) => {
                        worksheet
                            .write_string(r, c, s)
                            .map_err(|e| self.write_error(e))?;
                    }
                }
            }
        }

        workbook.save(&self.path).map_err(|e| self.write_error(e))?;
        debug!(path = %self.path.display(), rows = rows.len(), "wrote worksheet");
        Ok(())
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        #[allow(clippy::cast_precision_loss)] // Scores and ids fit in f64
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::text("学号"), Cell::text("总分")],
            vec![Cell::text("1001"), Cell::Number(72.5)],
            vec![Cell::text("1002"), Cell::Empty, Cell::text("note")],
        ]
    }

    #[test]
    fn write_then_read_preserves_cells() {
        let temp = TempDir::new().unwrap();
        let store = WorkbookFile::new(temp.path().join("roster.xlsx"), "Sheet1");

        store.write_rows(&sample_rows()).unwrap();
        let rows = store.read_rows().unwrap();

        assert_eq!(rows[0][0], Cell::text("学号"));
        assert_eq!(rows[1][1], Cell::Number(72.5));
        assert_eq!(rows[2][0], Cell::text("1002"));
        assert!(rows[2][1].is_empty());
        assert_eq!(rows[2][2], Cell::text("note"));
    }

    #[test]
    fn xls_named_output_is_readable() {
        let temp = TempDir::new().unwrap();
        let store = WorkbookFile::new(temp.path().join("roster_adjusted.xls"), "Sheet1");

        store.write_rows(&sample_rows()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let store = WorkbookFile::new(temp.path().join("absent.xlsx"), "Sheet1");

        let err = store.read_rows().unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("absent.xlsx"));
    }

    #[test]
    fn missing_sheet_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.xlsx");
        WorkbookFile::new(&path, "Other").write_rows(&sample_rows()).unwrap();

        let err = WorkbookFile::new(&path, "Sheet1").read_rows().unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn too_many_columns_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wide.xlsx");
        let store = WorkbookFile::new(&path, "Sheet1");

        // Past both the xlsx column limit and the u16 column index range.
        let mut row = vec![Cell::Empty; 70_000];
        row.push(Cell::text("overflow"));

        let err = store.write_rows(&[row]).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        let store = WorkbookFile::new(temp.path().join("no/such/dir/out.xlsx"), "Sheet1");

        let err = store.write_rows(&sample_rows()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
