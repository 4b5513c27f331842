// live-collection/live-collection
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing_subscriber::EnvFilter;

pub use counting_listener::CountingListener;
pub use scripted_collection::ScriptedCollection;

mod scripted_collection;

/// Routes `tracing` output through the test harness. Honors `RUST_LOG`. Safe to call from
/// every test.
pub fn init_test_logging() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
