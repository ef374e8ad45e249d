//! Optimistic action envelopes
//!
//! An envelope wraps a caller-defined action payload with an identity and
//! a shared status cell. The payload is opaque to Presage; it is only ever
//! handed back to the caller's reducer.

use std::sync::Arc;

use crate::{ActionId, ActionStatus, StatusCell};

/// An optimistic action in flight
///
/// Clones share the status cell: resolving through any clone is visible to
/// every other clone, including the copy the engine holds in its queue. The
/// id and payload are immutable after creation.
#[derive(Clone, Debug)]
pub struct ActionEnvelope<A> {
    id: ActionId,
    status: Arc<StatusCell>,
    payload: A,
}

impl<A> ActionEnvelope<A> {
    /// Wrap a payload in a fresh Pending envelope
    pub fn new(payload: A) -> Self {
        ActionEnvelope {
            id: ActionId::fresh(),
            status: Arc::new(StatusCell::new()),
            payload,
        }
    }

    /// Wrap a payload under a caller-managed identity
    pub fn with_id(id: ActionId, payload: A) -> Self {
        ActionEnvelope {
            id,
            status: Arc::new(StatusCell::new()),
            payload,
        }
    }

    #[inline]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// One-time status snapshot
    #[inline]
    pub fn status(&self) -> ActionStatus {
        self.status.load()
    }

    #[inline]
    pub fn payload(&self) -> &A {
        &self.payload
    }

    /// Report the asynchronous operation as confirmed
    ///
    /// Safe to call from any thread; idempotent once the envelope is past
    /// Pending. The verdict only takes effect on the engine's state after
    /// the envelope is re-dispatched through the reduce pipeline.
    pub fn resolve_success(&self) -> bool {
        self.status.resolve_success()
    }

    /// Report the asynchronous operation as rejected
    ///
    /// Same contract as [`resolve_success`](Self::resolve_success).
    pub fn resolve_failure(&self) -> bool {
        self.status.resolve_failure()
    }

    /// Advance `Success -> Resolved` once the effect has been folded
    ///
    /// Engine-side operation; producers have no reason to call it.
    pub fn mark_resolved(&self) -> bool {
        self.status.mark_resolved()
    }
}
