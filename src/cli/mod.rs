//! CLI command implementations.

pub mod adjust;
pub mod report;
