// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// Towards the end of the collection in raw order.
    Next,
    /// Towards the start of the collection in raw order.
    Previous,
}

impl Display for PageDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageDirection::Next => write!(f, "next"),
            PageDirection::Previous => write!(f, "previous"),
        }
    }
}
