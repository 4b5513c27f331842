// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use live_collection_utils::{SendUnlessWasm, SyncUnlessWasm};

use super::models::{Page, PageRequest};

/// Fetches pages of a remote collection, e.g. from a REST endpoint or a local cache.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait PageSource: SendUnlessWasm + SyncUnlessWasm {
    type Item;

    async fn load_page(&self, request: PageRequest) -> Result<Page<Self::Item>>;
}
