//! Action status state machine
//!
//! Every optimistic action moves through a fixed lifecycle:
//!
//! ```text
//! Pending ──► Success ──► Resolved
//!    │
//!    └──────► Failure        (discarded, never Resolved)
//! ```
//!
//! `Pending -> Success` and `Pending -> Failure` are driven by external
//! resolvers, possibly from other threads. `Success -> Resolved` is driven
//! by the engine once the action's effect has been folded into the
//! baseline. Every other transition attempt is an idempotent no-op.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle status of an optimistic action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActionStatus {
    /// Dispatched optimistically, awaiting resolution
    Pending = 0,
    /// Confirmed by the resolver, not yet folded into the baseline
    Success = 1,
    /// Rejected by the resolver; the predicted effect must be retracted
    Failure = 2,
    /// Folded into the baseline (terminal)
    Resolved = 3,
}

impl ActionStatus {
    /// Has this action reached a resolver verdict (or beyond)?
    #[inline]
    pub fn is_settled(self) -> bool {
        self != ActionStatus::Pending
    }
}

// The cell below is the only writer, and it only ever stores discriminant
// values, so the fallback arm is unreachable in practice.
fn decode(byte: u8) -> ActionStatus {
    match byte {
        0 => ActionStatus::Pending,
        1 => ActionStatus::Success,
        2 => ActionStatus::Failure,
        _ => ActionStatus::Resolved,
    }
}

/// Atomic status cell, shared by every clone of an envelope
///
/// Resolution can arrive on a different thread than dispatch, so all status
/// reads and writes go through this cell. Transitions are compare-exchange
/// operations: each legal edge can be taken exactly once, and losers of a
/// race observe a no-op.
#[derive(Debug)]
pub struct StatusCell(AtomicU8);

impl StatusCell {
    pub fn new() -> Self {
        StatusCell(AtomicU8::new(ActionStatus::Pending as u8))
    }

    /// Current status snapshot
    #[inline]
    pub fn load(&self) -> ActionStatus {
        decode(self.0.load(Ordering::Acquire))
    }

    /// `Pending -> Success`. Returns whether this call won the transition.
    pub fn resolve_success(&self) -> bool {
        self.transition(ActionStatus::Pending, ActionStatus::Success)
    }

    /// `Pending -> Failure`. Returns whether this call won the transition.
    pub fn resolve_failure(&self) -> bool {
        self.transition(ActionStatus::Pending, ActionStatus::Failure)
    }

    /// `Success -> Resolved`, engine-side, once the action has been folded
    pub fn mark_resolved(&self) -> bool {
        self.transition(ActionStatus::Success, ActionStatus::Resolved)
    }

    fn transition(&self, from: ActionStatus, to: ActionStatus) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        StatusCell::new()
    }
}
