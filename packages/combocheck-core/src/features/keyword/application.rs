//! Keyword similarity check
//!
//! Three phases:
//! 1. "Keyword preprocessing" (parallel): read and tokenize every file
//! 2. "Keyword indexing" (sequential): fill both inverted maps
//! 3. "Keyword comparisons" (parallel, read-only): symmetric difference size

use super::index::KeywordIndex;
use super::tokenizer::tokenize;
use crate::domain::{clamp_score, NormalizationMode, Score, UNAVAILABLE};
use crate::errors::Result;
use crate::pipeline::check::{CheckContext, PairwiseCheck};
use crate::pipeline::harness::PhaseOutput;
use tracing::debug;

pub const KEYWORD_PREPROCESSING: &str = "Keyword preprocessing";
pub const KEYWORD_INDEXING: &str = "Keyword indexing";
pub const KEYWORD_COMPARISONS: &str = "Keyword comparisons";

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCheck {
    normalization: NormalizationMode,
}

impl KeywordCheck {
    pub fn new(normalization: NormalizationMode) -> Self {
        Self { normalization }
    }
}

impl PairwiseCheck for KeywordCheck {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>> {
        let mode = self.normalization;

        let Some(mut tokens) = ctx.preprocess(KEYWORD_PREPROCESSING, |file| {
            Ok(ctx.bytes(file, mode).map(|bytes| tokenize(&bytes)))
        })?
        else {
            return Ok(ctx.halted_before_comparison());
        };

        let mut index = KeywordIndex::new();
        let halted = ctx
            .runner
            .run_sequential(KEYWORD_INDEXING, tokens.len(), |file| {
                if let Some(file_tokens) = tokens[file].take() {
                    index.add_file(file, file_tokens);
                }
                Ok(())
            })?;
        if halted {
            return Ok(ctx.halted_before_comparison());
        }
        debug!(vocabulary = index.vocabulary_size(), "keyword index built");

        let index = &index;
        ctx.compare(KEYWORD_COMPARISONS, |left, right| {
            Ok(index
                .unique_token_diff(left, right)
                .map_or(UNAVAILABLE, clamp_score))
        })
    }
}
