//! Edit Distance Engine
//!
//! Symbol-agnostic Levenshtein distance (`domain`) and the two checks that
//! run it over file bytes and token ids (`application`).
//!
//! # Usage
//!
//! ```rust
//! use combocheck_core::features::edit_distance::edit_distance;
//!
//! assert_eq!(edit_distance(b"abc", b"abd"), 1);
//! assert_eq!(edit_distance(&[1, 2, 3], &[3]), 2);
//! ```

pub mod application;
pub mod domain;

pub use application::{EditDistanceCheck, TokenDistanceCheck};
pub use domain::{edit_distance, edit_distance_by, try_edit_distance};
