// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::preferences::{
    CollectionId, CollectionPreferences, DisplayPreferencesRepository,
};

type UpdateHandler = Box<dyn for<'a> FnOnce(&'a mut CollectionPreferences) + Send>;

#[derive(Default)]
pub struct InMemoryDisplayPreferencesRepository {
    preferences: RwLock<HashMap<CollectionId, CollectionPreferences>>,
}

impl InMemoryDisplayPreferencesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayPreferencesRepository for InMemoryDisplayPreferencesRepository {
    fn get(&self, collection_id: &CollectionId) -> Result<CollectionPreferences> {
        Ok(self
            .preferences
            .read()
            .get(collection_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update(&self, collection_id: &CollectionId, block: UpdateHandler) -> Result<()> {
        let mut preferences = self.preferences.write();
        block(preferences.entry(collection_id.clone()).or_default());
        Ok(())
    }

    fn clear(&self, collection_id: &CollectionId) -> Result<()> {
        self.preferences.write().remove(collection_id);
        Ok(())
    }
}
