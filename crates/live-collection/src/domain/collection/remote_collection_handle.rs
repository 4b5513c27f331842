// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use live_collection_utils::{SendUnlessWasm, SyncUnlessWasm};

use super::models::SubscriptionToken;

#[cfg(not(target_arch = "wasm32"))]
pub type ChangeCallback = Box<dyn Fn() + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type ChangeCallback = Box<dyn Fn()>;

/// A server-backed, ordered collection owned by some data provider.
///
/// Indexes passed to and returned from a handle are always in raw (server) order. Page requests
/// are fire-and-forget; their outcome is only observable through the callbacks registered via
/// `subscribe`. A failed request does not invoke any callback.
///
/// A handle may be shared by any number of consumers.
#[cfg_attr(feature = "test", mockall::automock(type Item = String;))]
pub trait RemoteCollectionHandle: SendUnlessWasm + SyncUnlessWasm {
    type Item;

    fn count(&self) -> usize;
    fn is_loading(&self) -> bool;
    fn has_next(&self) -> bool;
    fn has_previous(&self) -> bool;

    fn item_at(&self, raw_index: usize) -> Option<Self::Item>;

    fn request_next_page(&self);
    fn request_previous_page(&self);

    /// Registers `callback` to be invoked every time the collection changed.
    fn subscribe(&self, callback: ChangeCallback) -> SubscriptionToken;
    /// Removes the callback registered for `token`. Unknown tokens are ignored.
    fn unsubscribe(&self, token: SubscriptionToken);
}
