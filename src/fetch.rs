//! Exhaustive, rate-limited pagination of the issues endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::client::IssueSource;
use crate::error::Result;
use crate::types::Issue;

/// Waits between page requests.
#[async_trait]
pub trait Throttle {
    async fn pause(&self, delay: Duration);
}

/// Real wall-clock throttle.
pub struct TokioThrottle;

#[async_trait]
impl Throttle for TokioThrottle {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Fetch every page of issues for `place`, starting at page 1.
///
/// Pages are requested one at a time, with `delay` between consecutive
/// requests, until a page reports no `next_page`. Any failed page aborts
/// the whole fetch and nothing gathered so far is returned.
pub async fn fetch_all_issues<S, T>(
    source: &S,
    throttle: &T,
    place: &str,
    delay: Duration,
) -> Result<Vec<Issue>>
where
    S: IssueSource + ?Sized,
    T: Throttle + ?Sized,
{
    let mut issues = Vec::new();
    let mut page_num: u32 = 1;

    loop {
        let page = source.fetch_page(place, page_num).await?;
        let count = page.issues.len();
        let next = page.next_page();
        issues.extend(page.issues);

        info!(
            page = page_num,
            count,
            total = issues.len(),
            "received issues page"
        );

        let Some(next) = next else {
            break;
        };

        if next != page_num + 1 {
            warn!(
                page = page_num,
                next_page = next,
                "server reported unexpected next page, requesting {}",
                page_num + 1
            );
        }

        info!(delay_secs = delay.as_secs_f64(), "pausing for rate limit");
        throttle.pause(delay).await;
        page_num += 1;
    }

    Ok(issues)
}
