//! Run summary rendering.

use crate::core::Summary;

/// Everything printed after a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Final-score statistics of the adjusted roster.
    pub summary: Summary,
    /// Records raised by the passing floor.
    pub floor_raised: usize,
    /// Records raised toward the target distribution.
    pub curve_raised: usize,
}

/// Render the statistics block.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let s = &report.summary;
    let mut out = String::new();

    out.push_str("\nStatistics:\n");
    out.push_str(&format!("  Students:  {}\n", s.count));
    out.push_str(&format!("  Mean:      {:.2}\n", s.mean));
    out.push_str(&format!("  Std dev:   {:.2}\n", s.std_dev));
    out.push_str(&format!("  Min:       {:.2}\n", s.min));
    out.push_str(&format!("  Max:       {:.2}\n", s.max));
    out.push_str(&format!(
        "  Raised:    {} to passing, {} toward curve\n",
        report.floor_raised, report.curve_raised
    ));
    out
}
