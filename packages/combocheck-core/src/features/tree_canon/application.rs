//! Tree isomorphism check
//!
//! Preprocessing asks the provider for each file's syntax tree and keeps only
//! its canonical name; the tree itself is released right away. A tree with a
//! child it cannot produce has no name and scores as unavailable.

use super::domain::{canonical_name, isomorphism_score};
use crate::domain::Score;
use crate::errors::Result;
use crate::pipeline::check::{CheckContext, PairwiseCheck};
use crate::pipeline::harness::PhaseOutput;

pub const TREE_ISOMORPHISM_PREPROCESSING: &str = "Tree isomorphism preprocessing";
pub const TREE_ISOMORPHISM_COMPARISONS: &str = "Tree isomorphism comparisons";

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeIsomorphismCheck;

impl TreeIsomorphismCheck {
    pub fn new() -> Self {
        Self
    }
}

impl PairwiseCheck for TreeIsomorphismCheck {
    fn name(&self) -> &'static str {
        "tree_isomorphism"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>> {
        let Some(names) = ctx.preprocess(TREE_ISOMORPHISM_PREPROCESSING, |file| {
            Ok(ctx.with_tree(file, canonical_name).flatten())
        })?
        else {
            return Ok(ctx.halted_before_comparison());
        };

        ctx.compare(TREE_ISOMORPHISM_COMPARISONS, |left, right| {
            Ok(isomorphism_score(
                names[left].as_deref(),
                names[right].as_deref(),
            ))
        })
    }
}
