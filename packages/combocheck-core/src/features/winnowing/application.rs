//! Winnowing (MOSS-style) check
//!
//! Preprocessing fingerprints every file once; the comparison phase scores
//! each pair by the edit distance between the two fingerprints.

use super::domain::fingerprint;
use crate::domain::{NormalizationMode, Score};
use crate::errors::Result;
use crate::features::edit_distance::application::optional_distance_score;
use crate::pipeline::check::{CheckContext, PairwiseCheck};
use crate::pipeline::harness::PhaseOutput;

pub const WINNOWING_PREPROCESSING: &str = "Winnowing preprocessing";
pub const WINNOWING_COMPARISONS: &str = "Winnowing comparisons";

/// Fingerprint comparison with K-gram width `k` and window `w`
#[derive(Debug, Clone, Copy)]
pub struct WinnowingCheck {
    k: usize,
    w: usize,
    normalization: NormalizationMode,
}

impl WinnowingCheck {
    pub fn new(k: usize, w: usize, normalization: NormalizationMode) -> Self {
        Self {
            k: k.max(1),
            w: w.max(1),
            normalization,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn w(&self) -> usize {
        self.w
    }
}

impl PairwiseCheck for WinnowingCheck {
    fn name(&self) -> &'static str {
        "winnowing"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>> {
        let (k, w, mode) = (self.k, self.w, self.normalization);

        let Some(fingerprints) = ctx.preprocess(WINNOWING_PREPROCESSING, |file| {
            Ok(ctx.bytes(file, mode).map(|bytes| fingerprint(&bytes, k, w)))
        })?
        else {
            return Ok(ctx.halted_before_comparison());
        };

        ctx.compare(WINNOWING_COMPARISONS, |left, right| {
            optional_distance_score(
                WINNOWING_COMPARISONS,
                fingerprints[left].as_ref(),
                fingerprints[right].as_ref(),
            )
        })
    }
}
