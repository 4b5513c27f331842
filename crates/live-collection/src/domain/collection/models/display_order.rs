// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use super::PageDirection;

/// The order in which a UI list presents the items of a collection relative to the order the
/// collection stores them in (raw order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayOrder {
    /// Display row `r` shows raw item `r`.
    #[default]
    Forward,
    /// Display row `0` shows the last raw item. Used to show chat history newest-first while the
    /// collection is stored oldest-first (or vice versa).
    Reversed,
}

impl DisplayOrder {
    pub fn is_reversed(&self) -> bool {
        matches!(self, DisplayOrder::Reversed)
    }

    /// Maps a display row to the raw index of a collection containing `count` items. Returns
    /// `None` if `row` is out of range.
    pub fn raw_index(&self, row: usize, count: usize) -> Option<usize> {
        if row >= count {
            return None;
        }

        match self {
            DisplayOrder::Forward => Some(row),
            DisplayOrder::Reversed => Some(count - 1 - row),
        }
    }

    /// The direction in which the collection needs to grow to extend what is displayed past the
    /// end of the list.
    pub fn load_direction(&self) -> PageDirection {
        match self {
            DisplayOrder::Forward => PageDirection::Next,
            DisplayOrder::Reversed => PageDirection::Previous,
        }
    }
}

impl From<bool> for DisplayOrder {
    fn from(reversed: bool) -> Self {
        if reversed {
            DisplayOrder::Reversed
        } else {
            DisplayOrder::Forward
        }
    }
}
