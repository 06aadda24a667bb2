//! Check trait and the context every check runs in
//!
//! A check is one or more preprocessing phases over files followed by a
//! comparison phase over pairs. `CheckContext` bundles what the phases share
//! and wraps provider calls so that a failing file becomes `None` plus a
//! warning instead of an error.

use super::batch::Batch;
use super::harness::{PhaseOutput, StripedRunner};
use crate::config::EngineConfig;
use crate::domain::{NormalizationMode, ProviderError, Score, SourceAnalysisProvider, TreeNode};
use crate::errors::Result;
use tracing::warn;

/// Per-file derived data of a preprocessing phase; `None` marks a file that could not be analyzed
pub type DerivedData<D> = Vec<Option<D>>;

/// Everything a check needs for one run
pub struct CheckContext<'a> {
    pub batch: &'a Batch,
    pub provider: &'a dyn SourceAnalysisProvider,
    pub runner: &'a StripedRunner,
    pub config: &'a EngineConfig,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        batch: &'a Batch,
        provider: &'a dyn SourceAnalysisProvider,
        runner: &'a StripedRunner,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            batch,
            provider,
            runner,
            config,
        }
    }

    /// Normalized bytes of file `index`, or `None` if the provider failed
    pub fn bytes(&self, index: usize, mode: NormalizationMode) -> Option<Vec<u8>> {
        let file = self.batch.file(index);
        self.provider
            .normalized_bytes(file, mode)
            .map_err(|err| report(file, &err))
            .ok()
    }

    /// Token ids of file `index`, or `None` if the provider failed
    pub fn token_ids(&self, index: usize) -> Option<Vec<i32>> {
        let file = self.batch.file(index);
        self.provider
            .token_ids(file)
            .map_err(|err| report(file, &err))
            .ok()
    }

    /// Apply `f` to the syntax tree of file `index`, or return `None` if it could not be produced
    pub fn with_tree<R>(
        &self,
        index: usize,
        f: impl FnOnce(Box<dyn TreeNode<'a> + 'a>) -> R,
    ) -> Option<R> {
        let file = self.batch.file(index);
        let provider: &'a dyn SourceAnalysisProvider = self.provider;
        match provider.syntax_tree(file) {
            Ok(tree) => Some(f(tree)),
            Err(err) => {
                report(file, &err);
                None
            }
        }
    }

    /// Run a preprocessing phase over every file of the corpus.
    ///
    /// Returns `Ok(None)` if the phase was halted before finishing.
    pub fn preprocess<D, F>(&self, phase: &str, derive: F) -> Result<Option<DerivedData<D>>>
    where
        D: Send,
        F: Fn(usize) -> Result<Option<D>> + Sync,
    {
        let output = self.runner.run(phase, self.batch.file_count(), derive)?;
        if output.halted {
            return Ok(None);
        }
        Ok(Some(output.items.into_iter().flatten().collect()))
    }

    /// Run the comparison phase: one score per pair of the batch
    pub fn compare<F>(&self, phase: &str, score: F) -> Result<PhaseOutput<Score>>
    where
        F: Fn(usize, usize) -> Result<Score> + Sync,
    {
        let batch = self.batch;
        self.runner.run(phase, batch.pair_count(), |index| {
            let pair = batch.pair(index);
            score(pair.left, pair.right)
        })
    }

    /// Output for a run stopped before its comparison phase started
    pub fn halted_before_comparison(&self) -> PhaseOutput<Score> {
        PhaseOutput {
            items: std::iter::repeat_with(|| None)
                .take(self.batch.pair_count())
                .collect(),
            halted: true,
        }
    }
}

fn report(file: &str, err: &ProviderError) {
    warn!(file, error = %err, "source analysis failed; pairs with this file score as unavailable");
}

/// A pairwise scoring algorithm run through the harness
pub trait PairwiseCheck: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Run every phase of the check over the context's batch
    fn run(&self, ctx: &CheckContext<'_>) -> Result<PhaseOutput<Score>>;
}
