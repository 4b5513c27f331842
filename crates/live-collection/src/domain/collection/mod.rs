// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use page_source::PageSource;
#[cfg(feature = "test")]
pub use remote_collection_handle::MockRemoteCollectionHandle;
pub use remote_collection_handle::{ChangeCallback, RemoteCollectionHandle};

pub mod models;
mod page_source;
mod remote_collection_handle;
