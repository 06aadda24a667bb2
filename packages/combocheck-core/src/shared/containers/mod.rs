//! Hand-rolled containers for the keyword index
//!
//! - `ChainedHashMap`: open chaining, pluggable hash/equality, doubling resize
//! - `LinkedList`: singly linked list used as a deduplicating set

pub mod chained_map;
pub mod linked_list;

pub use chained_map::{
    djb2, index_hash, key_equal, std_hash, ChainedHashMap, CollisionPolicy, EqualFn, HashFn,
    INITIAL_BUCKETS, LOAD_FACTOR_THRESHOLD,
};
pub use linked_list::LinkedList;
