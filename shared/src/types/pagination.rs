//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page", alias = "limit")]
    pub per_page: u32,

    /// Raw row offset; takes precedence over `page` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            skip: None,
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE),
            skip: None,
        }
    }

    /// Window of `limit` rows starting exactly at row `skip`
    pub fn from_skip(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            ..Self::new(DEFAULT_PAGE, limit)
        }
    }

    /// Calculate the offset for database queries
    ///
    /// Saturates instead of overflowing for huge page numbers.
    pub fn offset(&self) -> u32 {
        match self.skip {
            Some(skip) => skip,
            None => self.page.saturating_sub(1).saturating_mul(self.per_page),
        }
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(self) -> Self {
        Self {
            skip: self.skip,
            ..Self::new(self.page, self.per_page)
        }
    }
}

// Constants
const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 50;
const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}
