//! Tree Canonicalization Engine
//!
//! Structural isomorphism of syntax trees through canonical names; node
//! labels are never looked at.

pub mod application;
pub mod domain;

pub use application::TreeIsomorphismCheck;
pub use domain::{canonical_name, isomorphic, isomorphism_score};
