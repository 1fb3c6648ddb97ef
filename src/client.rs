use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{ReportError, Result};
use crate::types::IssuesPage;

const USER_AGENT: &str = concat!("seeclickfix-report/", env!("CARGO_PKG_VERSION"));

/// Anything that can return one page of issues for a place.
#[async_trait]
pub trait IssueSource {
    async fn fetch_page(&self, place: &str, page: u32) -> Result<IssuesPage>;
}

pub struct SeeClickFixClient {
    http: Client,
    endpoint: Url,
}

impl SeeClickFixClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    fn page_url(&self, place: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("place_url", place)
            .append_pair("page", &page.to_string());
        url
    }
}

#[async_trait]
impl IssueSource for SeeClickFixClient {
    async fn fetch_page(&self, place: &str, page: u32) -> Result<IssuesPage> {
        let url = self.page_url(place, page);
        debug!(%url, "requesting issues page");

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ReportError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.bytes().await?;
        parse_page(page, &body)
    }
}

/// Decode one page body. Invalid JSON is a malformed response.
pub fn parse_page(page: u32, body: &[u8]) -> Result<IssuesPage> {
    serde_json::from_slice(body).map_err(|source| ReportError::MalformedResponse { page, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_carries_place_and_page() {
        let client = SeeClickFixClient::new(
            Url::parse("https://seeclickfix.com/api/v2/issues").unwrap(),
            Duration::from_secs(30),
        )
        .unwrap();

        let url = client.page_url("jersey-city", 3);
        assert_eq!(
            url.as_str(),
            "https://seeclickfix.com/api/v2/issues?place_url=jersey-city&page=3"
        );
    }

    #[test]
    fn test_page_url_encodes_place() {
        let client = SeeClickFixClient::new(
            Url::parse("https://seeclickfix.com/api/v2/issues").unwrap(),
            Duration::from_secs(30),
        )
        .unwrap();

        let url = client.page_url("new haven&x", 1);
        assert_eq!(url.query(), Some("place_url=new+haven%26x&page=1"));
    }

    #[test]
    fn test_parse_page_rejects_truncated_json() {
        let result = parse_page(4, br#"{"issues": [{"id": 1, "summ"#);

        assert!(matches!(
            result,
            Err(ReportError::MalformedResponse { page: 4, .. })
        ));
    }

    #[test]
    fn test_parse_page_decodes_envelope() {
        let page = parse_page(
            1,
            br#"{"issues": [], "metadata": {"pagination": {"page": 1, "next_page": 2}}}"#,
        )
        .unwrap();

        assert!(page.issues.is_empty());
        assert_eq!(page.next_page(), Some(2));
    }
}
