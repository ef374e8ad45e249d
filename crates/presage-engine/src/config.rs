//! Engine configuration

/// Policy for resolutions that arrive with no pending optimism
///
/// A success or failure message with an empty queue usually means duplicate
/// or late delivery from the resolver side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Leave the state untouched and log the resolution
    Ignore,
    /// Surface the resolution as an error
    Reject,
}

/// Reconciliation engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// How to handle success/failure messages with no pending optimism
    pub orphan_policy: OrphanPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            orphan_policy: OrphanPolicy::Ignore,
        }
    }
}

impl EngineConfig {
    /// Configuration that rejects orphan resolutions instead of ignoring
    /// them
    pub fn rejecting() -> Self {
        EngineConfig {
            orphan_policy: OrphanPolicy::Reject,
        }
    }
}
