//! Delayed asynchronous resolution driver
//!
//! Optimistic actions resolve from outside the dispatch loop: timers,
//! network callbacks, other tasks. This driver reproduces that shape on
//! the tokio clock — each submitted action is dispatched optimistically,
//! then a spawned task sleeps, applies the verdict, and routes the
//! resolution message back through the store. Under tokio's paused test
//! clock the whole schedule is deterministic.

use std::sync::Arc;
use std::time::Duration;

use presage_core::{ActionEnvelope, Message, PresageResult};
use presage_engine::Reducer;

use crate::MemoryStore;

/// Verdict of the simulated asynchronous operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Confirm,
    Reject,
}

/// Resolver configuration
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Simulated operation latency
    pub delay: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            delay: Duration::from_millis(50),
        }
    }
}

/// Drives submitted actions to resolution on the tokio clock
pub struct DelayedResolver<S, A, R, F> {
    store: Arc<MemoryStore<S, A, R>>,
    decide: F,
    config: ResolverConfig,
}

impl<S, A, R, F> DelayedResolver<S, A, R, F>
where
    S: Clone + Send + 'static,
    A: Clone + Send + 'static,
    R: Reducer<S, A> + Send + 'static,
    F: Fn(&A) -> Outcome,
{
    /// Create a resolver with the default latency
    pub fn new(store: Arc<MemoryStore<S, A, R>>, decide: F) -> Self {
        Self::with_config(store, decide, ResolverConfig::default())
    }

    /// Create a resolver with custom latency
    pub fn with_config(store: Arc<MemoryStore<S, A, R>>, decide: F, config: ResolverConfig) -> Self {
        DelayedResolver {
            store,
            decide,
            config,
        }
    }

    /// Dispatch an optimistic action and schedule its resolution
    ///
    /// Returns the optimistic projection. Must be called from within a
    /// tokio runtime; the resolution task fires after the configured
    /// delay.
    pub fn submit(&self, payload: A) -> PresageResult<S> {
        let envelope = ActionEnvelope::new(payload);
        let outcome = (self.decide)(envelope.payload());

        let next = self.store.dispatch(Message::Optimistic(envelope.clone()))?;

        let store = Arc::clone(&self.store);
        let delay = self.config.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match outcome {
                Outcome::Confirm => envelope.resolve_success(),
                Outcome::Reject => envelope.resolve_failure(),
            };
            if let Err(e) = store.dispatch(Message::Optimistic(envelope)) {
                tracing::warn!("resolution dispatch failed: {}", e);
            }
        });

        Ok(next)
    }
}
