// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use live_collection_utils::{SendUnlessWasm, SyncUnlessWasm};

use super::models::{CollectionId, CollectionPreferences};

type UpdateHandler = Box<dyn for<'a> FnOnce(&'a mut CollectionPreferences) + Send>;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait DisplayPreferencesRepository: SendUnlessWasm + SyncUnlessWasm {
    /// Returns the stored preferences for `collection_id` or the defaults if none were stored.
    fn get(&self, collection_id: &CollectionId) -> Result<CollectionPreferences>;
    fn update(&self, collection_id: &CollectionId, block: UpdateHandler) -> Result<()>;
    fn clear(&self, collection_id: &CollectionId) -> Result<()>;
}
