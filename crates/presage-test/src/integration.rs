//! Store-level integration scenarios
//!
//! End-to-end runs of the full optimistic pipeline: store dispatch,
//! asynchronous delayed resolution, reconciliation. The counter domain
//! keeps the arithmetic obvious; the schedules run on tokio's paused test
//! clock so they are deterministic.

use std::sync::Arc;

use crate::{counter_reducer, CounterAction, CounterState, MemoryStore};

/// Reducer function type for the counter domain
pub type CounterReducer = fn(CounterState, &CounterAction) -> CounterState;

/// Store over the counter domain
pub type CounterStore = MemoryStore<CounterState, CounterAction, CounterReducer>;

/// Shared counter store starting from zero
pub fn counter_store() -> Arc<CounterStore> {
    Arc::new(MemoryStore::new(
        counter_reducer as CounterReducer,
        CounterState::default(),
    ))
}
