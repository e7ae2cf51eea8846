//! Sheet storage trait.

use crate::error::Result;
use crate::roster::cell::Cell;

/// A single worksheet that rows can be read from or written to.
pub trait SheetStore {
    /// Read every row of the sheet, header included.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be opened or parsed.
    fn read_rows(&self) -> Result<Vec<Vec<Cell>>>;

    /// Replace the sheet contents with `rows`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be written.
    fn write_rows(&self, rows: &[Vec<Cell>]) -> Result<()>;
}
