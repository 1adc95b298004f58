//! Tokio Runtime Bridge
//!
//! The application loop is single-threaded and never awaits. Backend requests
//! and their timeout timers run on a shared tokio runtime and report back over
//! the event channel.
//!
//! ## Pattern
//!
//! ```text
//! Application loop (sync)
//!       │
//!       ▼
//! spawn_named_in_tokio(name, async { ... tx.send(AppEvent) })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! AppEvent drained by the loop
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("night-lights-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Spawn a detached, named task in the tokio runtime
///
/// The task reports its outcome through a channel; its join handle is dropped.
pub fn spawn_named_in_tokio<F>(name: String, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::trace!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::trace!("Tokio task completed: {}", name);
    });
}
