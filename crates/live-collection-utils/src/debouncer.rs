// live-collection/live-collection-utils
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::trace;

use crate::{sleep, spawn};

#[cfg(not(target_arch = "wasm32"))]
pub type DebouncerCallback = Box<dyn Fn() + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type DebouncerCallback = Box<dyn Fn()>;

/// Delays invoking its callback until `delay` has passed without another call to `call`.
///
/// Meant for noisy inputs like search fields. Each `call` supersedes the pending one, so a burst
/// of calls results in a single invocation `delay` after the last call of the burst.
pub struct Debouncer {
    delay: Duration,
    inner: Arc<DebouncerInner>,
}

struct DebouncerInner {
    callback: Mutex<Option<Arc<DebouncerCallback>>>,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: Arc::new(DebouncerInner {
                callback: Default::default(),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the delay for subsequent calls. A call that is already pending keeps its delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay
    }

    pub fn set_callback(&self, callback: Option<DebouncerCallback>) {
        *self.inner.callback.lock() = callback.map(Arc::new);
    }

    /// Schedules the callback, cancelling a previously scheduled but not yet fired invocation.
    pub fn call(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::downgrade(&self.inner);
        let delay = self.delay;

        spawn(async move {
            sleep(delay).await;
            fire_if_current(inner, generation);
        });
    }

    /// Invokes the callback immediately.
    pub fn fire(&self) {
        self.inner.fire();
    }

    /// Drops a pending invocation without firing it.
    pub fn cancel(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel()
    }
}

impl DebouncerInner {
    fn fire(&self) {
        let Some(callback) = self.callback.lock().clone() else {
            return;
        };
        callback();
    }
}

fn fire_if_current(inner: Weak<DebouncerInner>, generation: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    if inner.generation.load(Ordering::SeqCst) != generation {
        trace!("Skipping superseded debouncer call.");
        return;
    }

    inner.fire();
}
