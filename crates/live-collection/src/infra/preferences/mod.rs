// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_display_preferences_repository::InMemoryDisplayPreferencesRepository;
pub use json_file_display_preferences_repository::{
    JsonFileDisplayPreferencesRepository, PreferencesError,
};

mod in_memory_display_preferences_repository;
mod json_file_display_preferences_repository;
