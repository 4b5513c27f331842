// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCollectionConfig {
    /// The maximum number of items requested per page.
    pub page_size: u32,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LiveCollectionConfigError {
    #[error("Page size must be greater than zero.")]
    InvalidPageSize,
}

impl LiveCollectionConfig {
    pub fn with_page_size(page_size: u32) -> Self {
        Self { page_size }
    }

    pub fn validate(&self) -> Result<(), LiveCollectionConfigError> {
        if self.page_size == 0 {
            return Err(LiveCollectionConfigError::InvalidPageSize);
        }
        Ok(())
    }
}

impl Default for LiveCollectionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
