use crate::error::Result;
use crate::types::{Category, Issue};

/// Look up the organization label for a category token.
pub fn resolve_category(name: &str) -> Result<&'static str> {
    Category::from_token(name).map(Category::organization)
}

/// Keep issues whose `request_type.organization` equals `label` exactly,
/// in arrival order.
pub fn filter_by_organization(issues: Vec<Issue>, label: &str) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| issue.request_type.organization == label)
        .collect()
}
