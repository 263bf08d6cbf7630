use anyhow::{Context, Result};
use std::io::Write;

use crate::statistics::EnzymeReport;

pub const REPORT_HEADER: [&str; 5] = [
    "enzyme",
    "#size_selected_frags",
    "rad_sites_length_(bp)",
    "#rad_sites",
    "%genome_in_rad_sites",
];

/// Writes the reports as a tab-separated table. The header row is written even
/// when there are no reports.
pub fn write_report<W: Write>(writer: W, reports: &[EnzymeReport]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REPORT_HEADER)?;

    for report in reports {
        wtr.serialize(report)
            .with_context(|| format!("Failed to write report row for {}", report.enzyme))?;
    }
    wtr.flush()?;

    Ok(())
}
