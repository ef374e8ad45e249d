//! Identity types for Presage
//!
//! Action identities are 64-bit: cheap to copy and compare, with enough
//! room that a process-wide counter never wraps in practice.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ACTION_ID: AtomicU64 = AtomicU64::new(1);

/// Action identity - unique per optimistic action, assigned at creation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionId(pub u64);

impl ActionId {
    pub const ZERO: ActionId = ActionId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        ActionId(id)
    }

    /// Allocate a fresh process-unique identity
    pub fn fresh() -> Self {
        ActionId(NEXT_ACTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({:016x})", self.0)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
