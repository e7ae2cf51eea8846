//! Backend-neutral spreadsheet cell.

use std::fmt;

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

/// A numeric cell that held something other than a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellParseError {
    /// Cell contents as text.
    pub raw: String,
}

impl Cell {
    /// Create a text cell.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Read the cell as a number.
    ///
    /// Text must be a bare number; surrounding whitespace is not accepted.
    /// Empty cells are an error, the caller decides what a missing number
    /// means.
    ///
    /// # Errors
    ///
    /// Returns a [`CellParseError`] if the cell does not hold a number.
    pub fn as_number(&self) -> Result<f64, CellParseError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.parse().map_err(|_| CellParseError { raw: s.clone() }),
            Self::Empty => Err(CellParseError { raw: String::new() }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Number of cells up to and including the last non-empty one.
#[must_use]
pub fn populated_width(row: &[Cell]) -> usize {
    row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1)
}
