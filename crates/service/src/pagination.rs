//! Pagination utilities for service layer
//!
//! Provides a simple `Page` struct and helpers to normalize inputs.

use serde::Deserialize;

/// Windowing parameters for list operations.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Page {
    /// maximum records returned; defaults to 10
    #[serde(default)]
    pub limit: Option<u64>,
    /// records skipped from the start; defaults to 0
    #[serde(default)]
    pub offset: Option<u64>,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Apply defaults and clamp the limit to `1..=max_limit`.
    pub fn normalize(self, max_limit: u64) -> (u64, u64) {
        let limit = self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, max_limit.max(1));
        let offset = self.offset.unwrap_or(0);
        (offset, limit)
    }
}
