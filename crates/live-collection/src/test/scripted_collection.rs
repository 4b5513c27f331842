// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::domain::collection::models::SubscriptionToken;
use crate::domain::collection::{ChangeCallback, RemoteCollectionHandle};
use crate::util::ChangeSubscribers;

/// A `RemoteCollectionHandle` driven by hand. It records page requests instead of loading
/// anything and only notifies its subscribers when `emit_change` is called.
pub struct ScriptedCollection<T> {
    items: RwLock<Vec<T>>,
    has_next: AtomicBool,
    has_previous: AtomicBool,
    is_loading: AtomicBool,
    next_page_requests: AtomicUsize,
    previous_page_requests: AtomicUsize,
    unsubscribe_calls: AtomicUsize,
    subscribers: ChangeSubscribers,
}

impl<T> ScriptedCollection<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().collect()),
            has_next: AtomicBool::new(true),
            has_previous: AtomicBool::new(true),
            is_loading: AtomicBool::new(false),
            next_page_requests: AtomicUsize::new(0),
            previous_page_requests: AtomicUsize::new(0),
            unsubscribe_calls: AtomicUsize::new(0),
            subscribers: ChangeSubscribers::new(),
        }
    }

    pub fn set_items(&self, items: impl IntoIterator<Item = T>) {
        *self.items.write() = items.into_iter().collect();
    }

    pub fn push(&self, item: T) {
        self.items.write().push(item);
    }

    pub fn set_has_next(&self, has_next: bool) {
        self.has_next.store(has_next, Ordering::SeqCst);
    }

    pub fn set_has_previous(&self, has_previous: bool) {
        self.has_previous.store(has_previous, Ordering::SeqCst);
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.is_loading.store(is_loading, Ordering::SeqCst);
    }

    /// Notifies all subscribers as if the collection had changed.
    pub fn emit_change(&self) {
        self.subscribers.notify_all();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn next_page_requests(&self) -> usize {
        self.next_page_requests.load(Ordering::SeqCst)
    }

    pub fn previous_page_requests(&self) -> usize {
        self.previous_page_requests.load(Ordering::SeqCst)
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.load(Ordering::SeqCst)
    }
}

impl<T> RemoteCollectionHandle for ScriptedCollection<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    fn has_next(&self) -> bool {
        self.has_next.load(Ordering::SeqCst)
    }

    fn has_previous(&self) -> bool {
        self.has_previous.load(Ordering::SeqCst)
    }

    fn item_at(&self, raw_index: usize) -> Option<T> {
        self.items.read().get(raw_index).cloned()
    }

    fn request_next_page(&self) {
        self.next_page_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn request_previous_page(&self) {
        self.previous_page_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn subscribe(&self, callback: ChangeCallback) -> SubscriptionToken {
        self.subscribers.subscribe(callback)
    }

    fn unsubscribe(&self, token: SubscriptionToken) {
        self.unsubscribe_calls.fetch_add(1, Ordering::SeqCst);
        self.subscribers.unsubscribe(token);
    }
}
