//! Score adjustment logic.

pub mod adjust;
pub mod quantile;
pub mod record;
pub mod stats;

pub use adjust::{Adjustment, adjust};
pub use quantile::quantile;
pub use record::{Roster, StudentRecord};
pub use stats::{Summary, summarize};
