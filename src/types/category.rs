use std::fmt;

use crate::error::{ReportError, Result};

/// Issue categories the report can be filtered by.
///
/// Each category maps a user-facing token to the organization label the
/// API stores on `request_type.organization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Trees,
}

impl Category {
    pub const ALL: &'static [Category] = &[Category::Trees];

    /// Token accepted on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Category::Trees => "trees",
        }
    }

    /// Organization label as sent by the API.
    pub fn organization(self) -> &'static str {
        match self {
            Category::Trees => "Trees",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.token() == token)
            .ok_or_else(|| ReportError::UnsupportedCategory(token.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
