//! Presage Engine - Optimistic state reconciliation
//!
//! This crate implements the reconciliation engine:
//! - The delegate reducer seam
//! - The pending-action queue
//! - Baseline snapshot management
//! - Fold/replay reconciliation on success and failure

pub mod config;
pub mod engine;
pub mod queue;
pub mod reducer;

pub use config::*;
pub use engine::*;
pub use queue::*;
pub use reducer::*;
