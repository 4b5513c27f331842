// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::collection::models::DisplayOrder;
use crate::domain::preferences::CollectionPreferences;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionAdapterConfig {
    pub display_order: DisplayOrder,
}

impl CollectionAdapterConfig {
    pub fn forward() -> Self {
        DisplayOrder::Forward.into()
    }

    pub fn reversed() -> Self {
        DisplayOrder::Reversed.into()
    }
}

impl From<DisplayOrder> for CollectionAdapterConfig {
    fn from(display_order: DisplayOrder) -> Self {
        Self { display_order }
    }
}

impl From<&CollectionPreferences> for CollectionAdapterConfig {
    fn from(preferences: &CollectionPreferences) -> Self {
        Self {
            display_order: preferences.display_order,
        }
    }
}
