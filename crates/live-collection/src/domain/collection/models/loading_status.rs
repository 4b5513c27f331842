// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    #[default]
    NotLoading,
    Loading,
    Loaded,
    /// The last page request failed. The items loaded before are still available.
    Error,
}

impl LoadingStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingStatus::Loading)
    }
}
