use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use tabled::{settings::Style, Table as TabledTable, Tabled};

use crate::error::Result;
use crate::projection::{self, ReportRow, Table};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Human-readable table
    Table,
    /// JSON array of objects keyed by column name
    Json,
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Lat")]
    lat: String,
    #[tabled(rename = "Lng")]
    lng: String,
}

impl From<&ReportRow> for DisplayRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            summary: truncate(&row.summary, 50),
            status: status_colored(&row.status),
            created_at: format_date(&row.created_at),
            link: row.link.clone(),
            lat: row.lat.clone(),
            lng: row.lng.clone(),
        }
    }
}

/// Render a projected report in the requested format.
pub fn write_report<W: Write>(mut writer: W, format: OutputFormat, table: &Table) -> Result<()> {
    match format {
        OutputFormat::Csv => projection::write_csv(writer, table)?,
        OutputFormat::Table => {
            let rows: Vec<DisplayRow> = table.rows.iter().map(DisplayRow::from).collect();
            let rendered = TabledTable::new(rows).with(Style::rounded()).to_string();
            writeln!(writer, "{rendered}")?;
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &table.rows)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Format status with color based on its name
pub fn status_colored(status: &str) -> String {
    let lower = status.to_lowercase();
    if lower.contains("closed") {
        status.green().to_string()
    } else if lower.contains("acknowledged") {
        status.blue().to_string()
    } else if lower.contains("open") {
        status.yellow().to_string()
    } else if lower.contains("archived") {
        status.bright_black().to_string()
    } else {
        status.to_string()
    }
}

/// Format a date string nicely using chrono
pub fn format_date(iso: &str) -> String {
    use chrono::{DateTime, Local, Utc};

    if let Ok(dt) = iso.parse::<DateTime<Utc>>() {
        let local: DateTime<Local> = dt.into();
        local.format("%Y-%m-%d %H:%M").to_string()
    } else {
        // Fallback: just extract date portion
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table {
            rows: vec![ReportRow {
                summary: "Fallen tree".to_string(),
                status: "Open".to_string(),
                created_at: "2021-05-01T00:00:00Z".to_string(),
                link: "https://x/y/1".to_string(),
                lat: "40.718400".to_string(),
                lng: "-74.043100".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_rows_are_keyed_by_header() {
        let mut out = Vec::new();
        write_report(&mut out, OutputFormat::Json, &table()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let row = &value[0];
        for column in projection::HEADER {
            assert!(row.get(column).is_some(), "missing column {column}");
        }
        assert_eq!(row["lat"], "40.718400");
    }

    #[test]
    fn test_csv_format_writes_header_first() {
        let mut out = Vec::new();
        write_report(&mut out, OutputFormat::Csv, &table()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("summary,status,created_at,link,lat,lng"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_table_format_contains_link() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_report(&mut out, OutputFormat::Table, &table()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("https://x/y/1"));
        assert!(text.contains("Fallen tree"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long summary", 10), "a very ...");
    }

    #[test]
    fn test_format_date_falls_back_to_date_portion() {
        assert_eq!(format_date("2021-05-01Tgarbage"), "2021-05-01");
    }
}
