//! Minimal serialized store
//!
//! The engine requires single-writer dispatch; this store demonstrates the
//! sanctioned pattern by taking one lock per message. It is harness glue
//! for exercising the engine end-to-end, not a general-purpose state
//! container.

use parking_lot::Mutex;

use presage_core::{Message, PresageResult};
use presage_engine::{EngineConfig, ReconciliationEngine, Reducer};

/// In-memory store: engine plus current state behind a dispatch lock
///
/// Shareable via `Arc` across threads and tasks; resolutions produced on
/// other execution contexts funnel back through [`dispatch`](Self::dispatch)
/// one at a time.
pub struct MemoryStore<S, A, R> {
    inner: Mutex<Inner<S, A, R>>,
}

struct Inner<S, A, R> {
    engine: ReconciliationEngine<S, A, R>,
    state: S,
}

impl<S, A, R> MemoryStore<S, A, R>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A>,
{
    /// Create a store with the default engine configuration
    pub fn new(delegate: R, initial: S) -> Self {
        Self::with_config(delegate, initial, EngineConfig::default())
    }

    /// Create a store with a custom engine configuration
    pub fn with_config(delegate: R, initial: S, config: EngineConfig) -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                engine: ReconciliationEngine::with_config(delegate, config),
                state: initial,
            }),
        }
    }

    /// Route one message through the engine and store the result
    pub fn dispatch(&self, message: Message<A>) -> PresageResult<S> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let next = inner.engine.reduce(inner.state.clone(), message)?;
        inner.state = next.clone();
        Ok(next)
    }

    /// Current stored state
    pub fn state(&self) -> S {
        self.inner.lock().state.clone()
    }

    /// Number of in-flight optimistic actions
    pub fn pending_len(&self) -> usize {
        self.inner.lock().engine.pending_len()
    }
}
