//! Presage Test Harness - Stores, resolvers, and interleaving fuzzers
//!
//! This crate provides:
//! - A minimal serialized store for end-to-end engine runs
//! - A delayed asynchronous resolution driver
//! - Seeded interleaving fuzzing against a model oracle
//! - Store-level integration scenarios
//! - A small counter domain shared by scenarios and demos

pub mod counter;
pub mod store;
pub mod resolver;
pub mod interleave;
pub mod integration;

pub use counter::*;
pub use store::*;
pub use resolver::*;
pub use interleave::*;
pub use integration::*;
