use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Duration;

use tracing::info;

use crate::cli::ReportArgs;
use crate::client::IssueSource;
use crate::error::Result;
use crate::fetch::{fetch_all_issues, Throttle};
use crate::filter::{filter_by_organization, resolve_category};
use crate::output::write_report;
use crate::projection::{to_csv, Table};

/// Fetch, filter and project. Nothing is written unless every stage
/// succeeds.
pub async fn build_report<S, T>(
    source: &S,
    throttle: &T,
    place: &str,
    category: &str,
    delay: Duration,
) -> Result<Table>
where
    S: IssueSource + ?Sized,
    T: Throttle + ?Sized,
{
    let label = resolve_category(category)?;

    let issues = fetch_all_issues(source, throttle, place, delay).await?;
    let fetched = issues.len();

    let issues = filter_by_organization(issues, label);
    info!(
        fetched,
        kept = issues.len(),
        organization = label,
        "filtered issues"
    );

    to_csv(&issues)
}

pub async fn run<S, T>(
    source: &S,
    throttle: &T,
    place: &str,
    delay: Duration,
    args: ReportArgs,
) -> Result<()>
where
    S: IssueSource + ?Sized,
    T: Throttle + ?Sized,
{
    let table = build_report(source, throttle, place, &args.category, delay).await?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_report(BufWriter::new(file), args.format, &table)?;
            info!(path = %path.display(), rows = table.rows.len(), "report written");
        }
        None => {
            let stdout = io::stdout();
            write_report(stdout.lock(), args.format, &table)?;
        }
    }

    Ok(())
}
