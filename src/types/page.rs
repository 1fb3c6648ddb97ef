use serde::{Deserialize, Serialize};

use super::Issue;

/// One page of the issues endpoint.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IssuesPage {
    pub issues: Vec<Issue>,
    pub metadata: Metadata,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Metadata {
    pub pagination: Pagination,
}

/// Page-number pagination. `next_page` is null on the last page.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Pagination {
    #[serde(default)]
    pub entries: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub pages: u32,
    pub next_page: Option<u32>,
    pub next_page_url: Option<String>,
    pub previous_page: Option<u32>,
    pub previous_page_url: Option<String>,
}

impl IssuesPage {
    pub fn next_page(&self) -> Option<u32> {
        self.metadata.pagination.next_page
    }
}
