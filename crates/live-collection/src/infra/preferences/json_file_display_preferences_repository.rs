// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::preferences::{
    CollectionId, CollectionPreferences, DisplayPreferencesRepository,
};

type UpdateHandler = Box<dyn for<'a> FnOnce(&'a mut CollectionPreferences) + Send>;
type Document = BTreeMap<CollectionId, CollectionPreferences>;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

/// Stores the preferences of all collections in a single JSON document. The document is read
/// once when the repository is opened and rewritten on every change.
pub struct JsonFileDisplayPreferencesRepository {
    path: PathBuf,
    document: Mutex<Document>,
}

impl JsonFileDisplayPreferencesRepository {
    /// Opens the document at `path`. A missing file is treated like an empty document and only
    /// created on the first change.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref().to_path_buf();

        let document = match fs::read(&path) {
            Ok(data) => serde_json::from_slice::<Document>(&data)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No preferences found at {}.", path.display());
                Document::new()
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            "Opened preferences at {} with {} entries.",
            path.display(),
            document.len()
        );

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, document: &Document) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(document)?)?;
        Ok(())
    }
}

impl DisplayPreferencesRepository for JsonFileDisplayPreferencesRepository {
    fn get(&self, collection_id: &CollectionId) -> Result<CollectionPreferences> {
        Ok(self
            .document
            .lock()
            .get(collection_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update(&self, collection_id: &CollectionId, block: UpdateHandler) -> Result<()> {
        let mut document = self.document.lock();

        let mut updated_document = document.clone();
        block(updated_document.entry(collection_id.clone()).or_default());

        // The in-memory document only changes once it has been written.
        self.write(&updated_document)?;
        *document = updated_document;
        Ok(())
    }

    fn clear(&self, collection_id: &CollectionId) -> Result<()> {
        let mut document = self.document.lock();
        if !document.contains_key(collection_id) {
            return Ok(());
        }

        let mut updated_document = document.clone();
        updated_document.remove(collection_id);

        self.write(&updated_document)?;
        *document = updated_document;
        Ok(())
    }
}
