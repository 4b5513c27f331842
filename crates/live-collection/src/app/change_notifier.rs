// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Weak;

use parking_lot::Mutex;
use tracing::trace;

use live_collection_utils::{SendUnlessWasm, SyncUnlessWasm};

/// Implemented by the consumer of a `CollectionAdapter`, typically a list view. On receiving
/// `on_collection_changed` the consumer is expected to re-query the number of items and every
/// row it displays.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait CollectionListener: SendUnlessWasm + SyncUnlessWasm {
    fn on_collection_changed(&self);
}

/// Holds at most one listener without keeping it alive.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Mutex<Option<Weak<dyn CollectionListener>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current listener. Passing `None` detaches it.
    pub fn set_listener(&self, listener: Option<Weak<dyn CollectionListener>>) {
        *self.listener.lock() = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.listener
            .lock()
            .as_ref()
            .map(|listener| listener.strong_count() > 0)
            .unwrap_or(false)
    }

    pub fn notify(&self) {
        let listener = {
            let mut slot = self.listener.lock();
            let Some(listener) = slot.as_ref() else {
                return;
            };

            match listener.upgrade() {
                Some(listener) => listener,
                None => {
                    trace!("Listener was released. Clearing slot.");
                    *slot = None;
                    return;
                }
            }
        };

        // The lock is released at this point so that the listener may call back into us.
        listener.on_collection_changed();
    }
}
