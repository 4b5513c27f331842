// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::RwLock;
use tracing::{debug, error, info};

use live_collection_utils::{spawn, SendUnlessWasm, SyncUnlessWasm};

use crate::domain::collection::models::{
    LoadingStatus, Page, PageDirection, PageRequest, SubscriptionToken,
};
use crate::domain::collection::{ChangeCallback, PageSource, RemoteCollectionHandle};
use crate::util::ChangeSubscribers;

use super::{LiveCollectionConfig, LiveCollectionConfigError};

/// A `RemoteCollectionHandle` that keeps the pages fetched from a `PageSource` in memory.
///
/// Page requests run in the background and only one of them counts at any time; requests made
/// while loading are dropped. Reloading the first page supersedes a pending request, whose
/// page is then discarded. Subscribers are notified after every successfully loaded page.
pub struct LiveCollection<T: 'static> {
    inner: Arc<LiveCollectionInner<T>>,
}

struct LiveCollectionInner<T: 'static> {
    source: Arc<dyn PageSource<Item = T>>,
    config: LiveCollectionConfig,
    state: RwLock<State<T>>,
    subscribers: ChangeSubscribers,
}

struct State<T> {
    items: VecDeque<T>,
    previous_cursor: Option<String>,
    next_cursor: Option<String>,
    status: LoadingStatus,
    /// Bumped whenever the contents are replaced. Pages requested for an older generation are
    /// discarded.
    generation: u64,
}

impl<T: 'static> Clone for LiveCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> LiveCollection<T>
where
    T: Clone + SendUnlessWasm + SyncUnlessWasm + 'static,
{
    pub fn new<S>(source: S, config: LiveCollectionConfig) -> Result<Self, LiveCollectionConfigError>
    where
        S: PageSource<Item = T> + 'static,
    {
        config.validate()?;

        Ok(Self {
            inner: Arc::new(LiveCollectionInner {
                source: Arc::new(source),
                config,
                state: RwLock::new(State {
                    items: Default::default(),
                    previous_cursor: None,
                    next_cursor: None,
                    status: LoadingStatus::NotLoading,
                    generation: 0,
                }),
                subscribers: ChangeSubscribers::new(),
            }),
        })
    }

    /// Replaces the contents of the collection with its initial page.
    pub async fn load_first_page(&self) -> Result<()> {
        let generation = {
            let mut state = self.inner.state.write();
            state.generation += 1;
            state.status = LoadingStatus::Loading;
            state.generation
        };

        let request = PageRequest::Initial {
            limit: self.inner.config.page_size,
        };

        let page = match self.inner.source.load_page(request).await {
            Ok(page) => page,
            Err(err) => {
                let mut state = self.inner.state.write();
                if state.generation == generation {
                    state.status = LoadingStatus::Error;
                }
                return Err(err);
            }
        };

        {
            let mut state = self.inner.state.write();
            if state.generation != generation {
                debug!("Discarding first page. The collection was reloaded in the meantime.");
                return Ok(());
            }

            info!("Loaded first page with {} items.", page.items.len());

            state.items = page.items.into();
            state.previous_cursor = page.previous_cursor;
            state.next_cursor = page.next_cursor;
            state.status = LoadingStatus::Loaded;
        }

        self.inner.subscribers.notify_all();
        Ok(())
    }

    pub fn loading_status(&self) -> LoadingStatus {
        self.inner.state.read().status
    }

    pub fn config(&self) -> &LiveCollectionConfig {
        &self.inner.config
    }

    /// A snapshot of all loaded items in raw order.
    pub fn items(&self) -> Vec<T> {
        self.inner.state.read().items.iter().cloned().collect()
    }

    fn request_page(&self, direction: PageDirection) {
        let (generation, request) = {
            let mut state = self.inner.state.write();

            if state.status.is_loading() {
                debug!("Ignoring {direction} page request while loading.");
                return;
            }

            let cursor = match direction {
                PageDirection::Next => state.next_cursor.clone(),
                PageDirection::Previous => state.previous_cursor.clone(),
            };

            let Some(cursor) = cursor else {
                debug!("Ignoring {direction} page request. Reached the end of the collection.");
                return;
            };

            state.status = LoadingStatus::Loading;

            let limit = self.inner.config.page_size;
            let request = match direction {
                PageDirection::Next => PageRequest::After { cursor, limit },
                PageDirection::Previous => PageRequest::Before { cursor, limit },
            };
            (state.generation, request)
        };

        let inner = self.inner.clone();
        spawn(async move { inner.load_page(generation, direction, request).await });
    }
}

impl<T> LiveCollectionInner<T>
where
    T: SendUnlessWasm + SyncUnlessWasm + 'static,
{
    async fn load_page(&self, generation: u64, direction: PageDirection, request: PageRequest) {
        let result = self.source.load_page(request).await;

        {
            let mut state = self.state.write();

            if state.generation != generation {
                debug!("Discarding {direction} page. The collection was reloaded in the meantime.");
                return;
            }

            match result {
                Ok(page) => {
                    info!("Loaded {direction} page with {} items.", page.items.len());
                    state.apply(direction, page);
                }
                Err(err) => {
                    state.status = LoadingStatus::Error;
                    error!("Failed to load {direction} page. {}", err.to_string());
                    return;
                }
            }
        }

        self.subscribers.notify_all();
    }
}

impl<T> State<T> {
    fn apply(&mut self, direction: PageDirection, page: Page<T>) {
        match direction {
            PageDirection::Next => {
                self.items.extend(page.items);
                self.next_cursor = page.next_cursor;
            }
            PageDirection::Previous => {
                for item in page.items.into_iter().rev() {
                    self.items.push_front(item);
                }
                self.previous_cursor = page.previous_cursor;
            }
        }
        self.status = LoadingStatus::Loaded;
    }
}

impl<T> RemoteCollectionHandle for LiveCollection<T>
where
    T: Clone + SendUnlessWasm + SyncUnlessWasm + 'static,
{
    type Item = T;

    fn count(&self) -> usize {
        self.inner.state.read().items.len()
    }

    fn is_loading(&self) -> bool {
        self.inner.state.read().status.is_loading()
    }

    fn has_next(&self) -> bool {
        self.inner.state.read().next_cursor.is_some()
    }

    fn has_previous(&self) -> bool {
        self.inner.state.read().previous_cursor.is_some()
    }

    fn item_at(&self, raw_index: usize) -> Option<T> {
        self.inner.state.read().items.get(raw_index).cloned()
    }

    fn request_next_page(&self) {
        self.request_page(PageDirection::Next)
    }

    fn request_previous_page(&self) {
        self.request_page(PageDirection::Previous)
    }

    fn subscribe(&self, callback: ChangeCallback) -> SubscriptionToken {
        let token = self.inner.subscribers.subscribe(callback);
        debug!(
            "Added subscriber ({token}). {} subscriber(s) now.",
            self.inner.subscribers.len()
        );
        token
    }

    fn unsubscribe(&self, token: SubscriptionToken) {
        if self.inner.subscribers.unsubscribe(token) {
            debug!(
                "Removed subscriber ({token}). {} subscriber(s) left.",
                self.inner.subscribers.len()
            );
        }
    }
}
