// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use live_collection::LiveCollection;
pub use live_collection_config::{
    LiveCollectionConfig, LiveCollectionConfigError, DEFAULT_PAGE_SIZE,
};

mod live_collection;
mod live_collection_config;
