// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg(feature = "test")]
pub use change_notifier::MockCollectionListener;
pub use change_notifier::{ChangeNotifier, CollectionListener};
pub use collection_adapter::CollectionAdapter;
pub use collection_adapter_config::CollectionAdapterConfig;
pub use scroll_edge::should_load_more;

mod change_notifier;
mod collection_adapter;
mod collection_adapter_config;
mod scroll_edge;
