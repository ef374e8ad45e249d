//! Optimistic reconciliation pipeline

use presage_core::{
    ActionEnvelope, ActionStatus, Message, PresageError, PresageResult,
};

use crate::{EngineConfig, OrphanPolicy, PendingQueue, Reducer};

/// Optimistic state reconciliation engine
///
/// Wraps a caller-supplied pure reducer and reconciles optimistically
/// applied actions against their eventual success or failure. The host
/// store routes every dispatched message through [`reduce`](Self::reduce)
/// and stores the returned state.
///
/// While optimism is outstanding, the engine keeps two things: the FIFO
/// queue of in-flight envelopes and a snapshot of the last confirmed state
/// (the baseline). The baseline exists exactly as long as the queue is
/// non-empty. The state handed back to the host is always the optimistic
/// projection; on failure it is recomputed as baseline plus the surviving
/// pending actions.
pub struct ReconciliationEngine<S, A, R> {
    /// Delegate reducer
    delegate: R,
    /// In-flight optimistic actions, FIFO by dispatch order
    queue: PendingQueue<A>,
    /// Confirmed state snapshot; present iff the queue is non-empty
    baseline: Option<S>,
    /// Policy knobs
    config: EngineConfig,
}

impl<S, A, R> ReconciliationEngine<S, A, R>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A>,
{
    /// Create an engine with the default configuration
    pub fn new(delegate: R) -> Self {
        Self::with_config(delegate, EngineConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(delegate: R, config: EngineConfig) -> Self {
        ReconciliationEngine {
            delegate,
            queue: PendingQueue::new(),
            baseline: None,
            config,
        }
    }

    /// Number of in-flight optimistic actions
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// True when no optimism is outstanding
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Confirmed state snapshot, present while optimism is outstanding
    pub fn baseline(&self) -> Option<&S> {
        self.baseline.as_ref()
    }

    /// Reduce one dispatched message into the next state
    ///
    /// Must be called one message at a time relative to this engine's
    /// queue and baseline; `&mut self` makes unsynchronized concurrent
    /// dispatch unrepresentable, and the owning store is responsible for
    /// the serialization. The error arm is reachable only under
    /// [`OrphanPolicy::Reject`].
    pub fn reduce(&mut self, state: S, message: Message<A>) -> PresageResult<S> {
        match message {
            Message::Plain(action) => Ok(self.delegate.reduce(state, &action)),
            Message::Optimistic(envelope) => match envelope.status() {
                ActionStatus::Pending => Ok(self.reduce_pending(state, envelope)),
                ActionStatus::Success => self.reduce_success(state, &envelope),
                ActionStatus::Failure => self.reduce_failure(state, &envelope),
                ActionStatus::Resolved => Ok(self.delegate.reduce(state, envelope.payload())),
            },
        }
    }

    /// First pass of an optimistic action: snapshot, enqueue, project
    fn reduce_pending(&mut self, state: S, envelope: ActionEnvelope<A>) -> S {
        // The confirmed state just before optimism begins
        if self.queue.is_empty() {
            self.baseline = Some(state.clone());
        }
        tracing::debug!(
            "enqueue optimistic action {} ({} in flight)",
            envelope.id(),
            self.queue.len() + 1
        );
        let next = self.delegate.reduce(state, envelope.payload());
        self.queue.push(envelope);
        next
    }

    /// A confirmed action: fold the resolvable prefix into the baseline
    fn reduce_success(&mut self, state: S, envelope: &ActionEnvelope<A>) -> PresageResult<S> {
        let id = envelope.id();
        let Some(mut base) = self.baseline.take() else {
            return self.orphan(state, PresageError::OrphanSuccess(id));
        };

        if !self.queue.resolve(id) {
            tracing::warn!("success resolution for unknown action {}", id);
        }

        // An action folds only once everything dispatched before it has
        // resolved too; later resolutions wait in the queue.
        let prefix = self.queue.take_resolved_prefix();
        if !prefix.is_empty() {
            for entry in &prefix {
                base = self.delegate.reduce(base, entry.payload());
            }
            tracing::debug!(
                "folded {} confirmed action(s), {} still in flight",
                prefix.len(),
                self.queue.len()
            );
        }
        self.baseline = if self.queue.is_empty() { None } else { Some(base) };

        // The optimistic state already reflects the confirmed effect
        Ok(state)
    }

    /// A rejected action: discard it and recompute from the baseline
    fn reduce_failure(&mut self, state: S, envelope: &ActionEnvelope<A>) -> PresageResult<S> {
        let id = envelope.id();
        let Some(mut base) = self.baseline.take() else {
            return self.orphan(state, PresageError::OrphanFailure(id));
        };

        // The predicted effect is retracted outright, never folded
        if self.queue.remove(id).is_none() {
            tracing::warn!("failure resolution for unknown action {}", id);
        }

        for entry in self.queue.take_resolved_prefix() {
            base = self.delegate.reduce(base, entry.payload());
        }

        // The optimistic state was built on top of the discarded effect;
        // only baseline + surviving pending actions are trustworthy.
        let mut next = base.clone();
        for entry in self.queue.iter() {
            next = self.delegate.reduce(next, entry.payload());
        }

        tracing::debug!(
            "rolled back action {}, replayed {} pending action(s)",
            id,
            self.queue.len()
        );
        self.baseline = if self.queue.is_empty() { None } else { Some(base) };

        Ok(next)
    }

    fn orphan(&self, state: S, error: PresageError) -> PresageResult<S> {
        match self.config.orphan_policy {
            OrphanPolicy::Ignore => {
                tracing::warn!("ignoring {}", error);
                Ok(state)
            }
            OrphanPolicy::Reject => Err(error),
        }
    }
}
