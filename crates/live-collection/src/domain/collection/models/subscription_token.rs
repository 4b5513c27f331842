// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a change subscription on a `RemoteCollectionHandle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for SubscriptionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Hands out unique, increasing tokens.
#[derive(Debug, Default)]
pub struct SubscriptionTokenGenerator {
    last_value: AtomicU64,
}

impl SubscriptionTokenGenerator {
    pub fn next_token(&self) -> SubscriptionToken {
        SubscriptionToken(self.last_value.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
