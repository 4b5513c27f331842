// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::collection::models::{SubscriptionToken, SubscriptionTokenGenerator};
use crate::domain::collection::ChangeCallback;

/// The callbacks registered on a collection handle, called in subscription order.
#[derive(Default)]
pub struct ChangeSubscribers {
    callbacks: Mutex<BTreeMap<SubscriptionToken, Arc<ChangeCallback>>>,
    token_generator: SubscriptionTokenGenerator,
}

impl ChangeSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: ChangeCallback) -> SubscriptionToken {
        let token = self.token_generator.next_token();
        self.callbacks.lock().insert(token, Arc::new(callback));
        token
    }

    /// Returns `true` if a callback was registered for `token`.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        self.callbacks.lock().remove(&token).is_some()
    }

    pub fn len(&self) -> usize {
        self.callbacks.lock().len()
    }

    /// Invokes every registered callback once. Callbacks run without the lock being held, so
    /// they're free to subscribe or unsubscribe.
    pub fn notify_all(&self) {
        let callbacks = self.callbacks.lock().values().cloned().collect::<Vec<_>>();
        for callback in callbacks {
            callback()
        }
    }
}
