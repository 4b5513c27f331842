// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use models::{CollectionId, CollectionPreferences};
#[cfg(feature = "test")]
pub use repos::MockDisplayPreferencesRepository;
pub use repos::DisplayPreferencesRepository;

mod models;
mod repos;
