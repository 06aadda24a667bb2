//! Shared module - Common types and utilities
//!
//! Containers and worker-pool helpers used by more than one check.
//! Nothing here knows about files or scores.

pub mod containers;
pub mod worker_pool;

pub use containers::{ChainedHashMap, CollisionPolicy, LinkedList};
pub use worker_pool::{build_pool, resolve_workers, MAX_WORKERS};
