// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use live_collection_utils::id_string;

use crate::domain::collection::models::DisplayOrder;

id_string!(
    /// Identifies the query a collection was created for, e.g. the messages of a channel.
    CollectionId
);

/// Locally stored, per-collection presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionPreferences {
    pub display_order: DisplayOrder,
}
