// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// A request for a single page of a remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// The page the collection starts out with.
    Initial { limit: u32 },
    /// The page following `cursor` in raw order.
    After { cursor: String, limit: u32 },
    /// The page preceding `cursor` in raw order.
    Before { cursor: String, limit: u32 },
}

impl PageRequest {
    pub fn limit(&self) -> u32 {
        match self {
            PageRequest::Initial { limit }
            | PageRequest::After { limit, .. }
            | PageRequest::Before { limit, .. } => *limit,
        }
    }
}

/// A page of items in raw order together with the cursors to reach its neighbours. A missing
/// cursor means there are no more items in that direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub previous_cursor: Option<String>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            previous_cursor: None,
            next_cursor: None,
        }
    }

    pub fn with_previous_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.previous_cursor = Some(cursor.into());
        self
    }

    pub fn with_next_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.next_cursor = Some(cursor.into());
        self
    }
}
