// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::app::scroll_edge::should_load_more;
use crate::app::{ChangeNotifier, CollectionAdapterConfig, CollectionListener};
use crate::domain::collection::models::{
    DisplayOrder, PageDirection, ScrollMetrics, SubscriptionToken,
};
use crate::domain::collection::RemoteCollectionHandle;

type DynHandle<T> = dyn RemoteCollectionHandle<Item = T>;

/// Presents a `RemoteCollectionHandle` in display order and drives its pagination.
///
/// The adapter only keeps a weak reference to its handle. Once the handle is gone the adapter
/// behaves like an empty collection. Dropping the adapter unsubscribes it from the handle.
pub struct CollectionAdapter<T: 'static> {
    handle: Weak<DynHandle<T>>,
    display_order: DisplayOrder,
    notifier: Arc<ChangeNotifier>,
    subscription: Mutex<Option<SubscriptionToken>>,
}

impl<T: 'static> CollectionAdapter<T> {
    /// Subscribes to `handle` right away. No page is requested; the handle is expected to be
    /// positioned at its initial page already.
    pub fn new<H>(handle: &Arc<H>, config: CollectionAdapterConfig) -> Self
    where
        H: RemoteCollectionHandle<Item = T> + 'static,
    {
        let notifier = Arc::new(ChangeNotifier::new());

        let token = {
            let notifier = Arc::downgrade(&notifier);
            handle.subscribe(Box::new(move || {
                let Some(notifier) = notifier.upgrade() else {
                    return;
                };
                trace!("Collection changed.");
                notifier.notify();
            }))
        };

        debug!(
            "Observing collection ({token}) in {:?} order.",
            config.display_order
        );

        let handle: Arc<DynHandle<T>> = handle.clone();

        Self {
            handle: Arc::downgrade(&handle),
            display_order: config.display_order,
            notifier,
            subscription: Mutex::new(Some(token)),
        }
    }

    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// The number of items in the underlying collection.
    pub fn count(&self) -> usize {
        self.handle
            .upgrade()
            .map(|handle| handle.count())
            .unwrap_or(0)
    }

    /// Returns the item displayed at `row` or `None` if `row` is out of range. Rows may become
    /// out of range between two calls when the collection shrinks.
    pub fn item(&self, row: usize) -> Option<T> {
        let handle = self.handle.upgrade()?;
        let raw_index = self.display_order.raw_index(row, handle.count())?;
        handle.item_at(raw_index)
    }

    /// Requests the page that extends the list past its last display row. Returns `true` if a
    /// request was issued.
    ///
    /// Nothing is requested if the handle reports that there are no more items in that direction
    /// or that it is loading already. The new items become available once the listener received
    /// a change notification; a failed request never produces one.
    pub fn load_more(&self) -> bool {
        if self.is_torn_down() {
            return false;
        }

        let Some(handle) = self.handle.upgrade() else {
            return false;
        };

        let direction = self.display_order.load_direction();
        let has_more = match direction {
            PageDirection::Next => handle.has_next(),
            PageDirection::Previous => handle.has_previous(),
        };

        if !has_more {
            debug!("No {direction} page available.");
            return false;
        }

        if handle.is_loading() {
            debug!("Skipping {direction} page request. Collection is loading already.");
            return false;
        }

        debug!("Requesting {direction} page.");

        match direction {
            PageDirection::Next => handle.request_next_page(),
            PageDirection::Previous => handle.request_previous_page(),
        }

        true
    }

    /// Calls `load_more` if a scroll gesture came to rest at the loading edge of the list.
    pub fn load_more_if_needed(&self, metrics: &ScrollMetrics) -> bool {
        if !should_load_more(self.display_order, metrics) {
            return false;
        }
        self.load_more()
    }

    /// Sets the listener that is informed about changes. The adapter doesn't keep `listener`
    /// alive. Replaces any previously set listener.
    pub fn set_listener<L>(&self, listener: &Arc<L>)
    where
        L: CollectionListener + 'static,
    {
        let listener = Arc::downgrade(listener);
        let listener: Weak<dyn CollectionListener> = listener;
        self.notifier.set_listener(Some(listener));
    }

    pub fn clear_listener(&self) {
        self.notifier.set_listener(None);
    }

    pub fn has_listener(&self) -> bool {
        self.notifier.has_listener()
    }

    /// Unsubscribes from the handle and detaches the listener. Page requests that are in flight
    /// are not cancelled, but their results won't reach the listener anymore. Calling `teardown`
    /// more than once has no further effect.
    pub fn teardown(&self) {
        let Some(token) = self.subscription.lock().take() else {
            return;
        };

        self.notifier.set_listener(None);

        if let Some(handle) = self.handle.upgrade() {
            handle.unsubscribe(token);
        }

        debug!("Stopped observing collection ({token}).");
    }

    pub fn is_torn_down(&self) -> bool {
        self.subscription.lock().is_none()
    }
}

impl<T: 'static> Drop for CollectionAdapter<T> {
    fn drop(&mut self) {
        self.teardown()
    }
}
