//! Edit-distance checks
//!
//! - `EditDistanceCheck`: Levenshtein over normalized file bytes. No
//!   preprocessing; both files are fetched per pair at comparison time.
//! - `TokenDistanceCheck`: Levenshtein over provider token ids, fetched once
//!   per file in a preprocessing phase.

use super::domain::try_edit_distance;
use crate::domain::{clamp_score, NormalizationMode, Score, UNAVAILABLE};
use crate::errors::{CombocheckError, Result};
use crate::pipeline::check::{CheckContext, PairwiseCheck};
use crate::pipeline::harness::PhaseOutput;

pub const EDIT_DISTANCE_COMPARISONS: &str = "Edit distance comparisons";
pub const TOKEN_DISTANCE_PREPROCESSING: &str = "Token distance preprocessing";
pub const TOKEN_DISTANCE_COMPARISONS: &str = "Token distance comparisons";

/// Score two sequences, turning a failed row allocation into a batch-fatal error
pub(crate) fn distance_score<T: PartialEq>(phase: &str, a: &[T], b: &[T]) -> Result<Score> {
    try_edit_distance(a, b)
        .map(clamp_score)
        .map_err(|_| CombocheckError::exhausted(phase, a.len().min(b.len()) + 1))
}

/// Score two derived sequences, or the sentinel if either is missing
pub(crate) fn optional_distance_score<T: PartialEq>(
    phase: &str,
    a: Option<&Vec<T>>,
    b: Option<&Vec<T>>,
) -> Result<Score> {
    match (a, b) {
        (Some(a), Some(b)) => distance_score(phase, a, b),
        _ => Ok(UNAVAILABLE),
    }
}

/// Levenshtein distance between normalized file contents
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceCheck {
    normalization: NormalizationMode,
}

impl EditDistanceCheck {
    pub fn new(normalization: NormalizationMode) -> Self {
        Self { normalization }
    }
}

impl PairwiseCheck for EditDistanceCheck {
    fn name(&self) -> &'static str {
        "edit_distance"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>> {
        let mode = self.normalization;
        ctx.compare(EDIT_DISTANCE_COMPARISONS, |left, right| {
            let Some(a) = ctx.bytes(left, mode) else {
                return Ok(UNAVAILABLE);
            };
            let Some(b) = ctx.bytes(right, mode) else {
                return Ok(UNAVAILABLE);
            };
            distance_score(EDIT_DISTANCE_COMPARISONS, &a, &b)
        })
    }
}

/// Levenshtein distance between token-id sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDistanceCheck;

impl TokenDistanceCheck {
    pub fn new() -> Self {
        Self
    }
}

impl PairwiseCheck for TokenDistanceCheck {
    fn name(&self) -> &'static str {
        "token_distance"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>> {
        let Some(tokens) =
            ctx.preprocess(TOKEN_DISTANCE_PREPROCESSING, |file| Ok(ctx.token_ids(file)))?
        else {
            return Ok(ctx.halted_before_comparison());
        };

        ctx.compare(TOKEN_DISTANCE_COMPARISONS, |left, right| {
            optional_distance_score(
                TOKEN_DISTANCE_COMPARISONS,
                tokens[left].as_ref(),
                tokens[right].as_ref(),
            )
        })
    }
}
