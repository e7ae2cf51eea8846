//! Roster loading and persistence.

pub mod cell;
pub mod memory;
pub mod naming;
pub mod rows;
pub mod traits;
pub mod workbook;

pub use cell::{Cell, CellParseError};
pub use memory::MemorySheet;
pub use naming::adjusted_path;
pub use traits::SheetStore;
pub use workbook::WorkbookFile;

use crate::config::CellPolicy;
use crate::core::Roster;
use crate::error::Result;

/// Load a roster from `store`.
///
/// # Errors
///
/// Returns an error if the sheet cannot be read, or if a numeric cell is
/// malformed under [`CellPolicy::Reject`].
pub fn load(store: &dyn SheetStore, policy: CellPolicy) -> Result<Roster> {
    let rows = store.read_rows()?;
    rows::records_from_rows(&rows, policy)
}

/// Write `roster` to `store`, header first, in roster order.
///
/// # Errors
///
/// Returns an error if the sheet cannot be written.
pub fn persist(store: &dyn SheetStore, roster: &Roster) -> Result<()> {
    store.write_rows(&rows::rows_from_roster(roster))
}
