//! Fixed-column projection of issues into report rows.

use std::io::Write;

use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::types::Issue;

pub const HEADER: [&str; 6] = ["summary", "status", "created_at", "link", "lat", "lng"];

/// One data row of the report, one field per header column.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub summary: String,
    pub status: String,
    pub created_at: String,
    pub link: String,
    pub lat: String,
    pub lng: String,
}

impl ReportRow {
    /// Latitude comes from coordinate index 1 and longitude from index 0.
    pub fn from_issue(issue: &Issue) -> Result<Self> {
        let coords = issue.coordinates();
        let [lng, lat, ..] = coords else {
            return Err(ReportError::MalformedCoordinates {
                id: issue.id,
                len: coords.len(),
            });
        };

        Ok(Self {
            summary: issue.summary.clone(),
            status: issue.status.clone(),
            created_at: issue.created_at.clone(),
            link: issue.html_url.clone(),
            lat: format_coordinate(*lat),
            lng: format_coordinate(*lng),
        })
    }

    pub fn cells(&self) -> [&str; 6] {
        [
            self.summary.as_str(),
            self.status.as_str(),
            self.created_at.as_str(),
            self.link.as_str(),
            self.lat.as_str(),
            self.lng.as_str(),
        ]
    }
}

fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

/// Header plus one row per issue.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<ReportRow>,
}

impl Table {
    /// All rows as string cells, header first.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut records: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        records.push(HEADER.iter().map(|h| h.to_string()).collect());
        for row in &self.rows {
            records.push(row.cells().iter().map(|c| c.to_string()).collect());
        }
        records
    }
}

/// Project issues into a report table. A single issue without a usable
/// point fails the whole projection.
pub fn to_csv(issues: &[Issue]) -> Result<Table> {
    let rows = issues
        .iter()
        .map(ReportRow::from_issue)
        .collect::<Result<Vec<_>>>()?;

    Ok(Table { rows })
}

/// Write the table as RFC 4180 CSV.
pub fn write_csv<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in table.records() {
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;

    Ok(())
}
