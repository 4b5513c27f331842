// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Reactive, paginated views over remote live collections.
//!
//! A `RemoteCollectionHandle` is provided by some data source (a REST endpoint, a push based
//! sync engine, a local cache…). A `CollectionAdapter` presents it in display order, drives its
//! pagination and tells a single `CollectionListener` when to redraw.

pub use app::{
    should_load_more, ChangeNotifier, CollectionAdapter, CollectionAdapterConfig,
    CollectionListener,
};
pub use domain::collection::models::{
    DisplayOrder, LoadingStatus, Page, PageDirection, PageRequest, ScrollMetrics,
    SubscriptionToken,
};
pub use domain::collection::{ChangeCallback, PageSource, RemoteCollectionHandle};
pub use domain::preferences::{CollectionId, CollectionPreferences, DisplayPreferencesRepository};
pub use infra::collection::{LiveCollection, LiveCollectionConfig, LiveCollectionConfigError};
pub use infra::preferences::{
    InMemoryDisplayPreferencesRepository, JsonFileDisplayPreferencesRepository, PreferencesError,
};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
pub mod domain;
pub mod infra;

pub(crate) mod util;
