//! Pagination window metadata
//!
//! Carried in `x-paging-start`, `x-paging-limit` and `x-paging-total`.

use serde::{Deserialize, Serialize};

use crate::truthy;

/// Pagination window (start offset, page size, total count)
///
/// A field is `None` when its header was missing or did not start with an
/// integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Offset of the first item
    pub start: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
    /// Total number of items
    pub total: Option<i64>,
}

impl Paging {
    /// Create a fully populated paging window
    #[must_use]
    pub const fn new(start: i64, limit: i64, total: i64) -> Self {
        Self {
            start: Some(start),
            limit: Some(limit),
            total: Some(total),
        }
    }

    /// Whether any field is non-zero
    #[must_use]
    pub const fn has_truthy_field(&self) -> bool {
        truthy::int_is_truthy(self.start)
            || truthy::int_is_truthy(self.limit)
            || truthy::int_is_truthy(self.total)
    }

    /// Whether any field parsed to an integer, zero included
    #[must_use]
    pub const fn has_any_field(&self) -> bool {
        self.start.is_some() || self.limit.is_some() || self.total.is_some()
    }

    /// Whether more items follow this page
    ///
    /// Returns `None` when the window is incomplete.
    #[must_use]
    pub fn has_more(&self) -> Option<bool> {
        let (start, limit, total) = (self.start?, self.limit?, self.total?);
        Some(start.saturating_add(limit) < total)
    }
}

impl std::fmt::Display for Paging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |value: Option<i64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
        write!(
            f,
            "start={} limit={} total={}",
            show(self.start),
            show(self.limit),
            show(self.total)
        )
    }
}
