//! Comparison engine
//!
//! Owns the current batch, the provider, the configuration and the progress
//! state. `run` is `&self`, so an `Arc<ComparisonEngine>` can be polled and
//! halted from other threads while a check is running.

use super::batch::Batch;
use super::check::{CheckContext, PairwiseCheck};
use super::harness::{PhaseOutput, ProgressState, StripedRunner};
use crate::config::{EngineConfig, ParallelConfig, Validatable};
use crate::domain::{Score, SourceAnalysisProvider, UNAVAILABLE};
use crate::errors::Result;
use crate::features::edit_distance::{EditDistanceCheck, TokenDistanceCheck};
use crate::features::keyword::KeywordCheck;
use crate::features::tree_canon::TreeIsomorphismCheck;
use crate::features::winnowing::WinnowingCheck;
use crate::shared::worker_pool::resolve_workers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// The built-in pairwise checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    EditDistance,
    TokenDistance,
    Winnowing,
    TreeIsomorphism,
    KeywordSimilarity,
}

impl CheckKind {
    pub const ALL: [CheckKind; 5] = [
        CheckKind::EditDistance,
        CheckKind::TokenDistance,
        CheckKind::Winnowing,
        CheckKind::TreeIsomorphism,
        CheckKind::KeywordSimilarity,
    ];

    /// Build the check with its parameters taken from `config`
    pub fn build(self, config: &EngineConfig) -> Box<dyn PairwiseCheck> {
        match self {
            CheckKind::EditDistance => {
                Box::new(EditDistanceCheck::new(config.edit_distance.normalization))
            }
            CheckKind::TokenDistance => Box::new(TokenDistanceCheck::new()),
            CheckKind::Winnowing => Box::new(WinnowingCheck::new(
                config.winnowing.k,
                config.winnowing.w,
                config.winnowing.normalization,
            )),
            CheckKind::TreeIsomorphism => Box::new(TreeIsomorphismCheck::new()),
            CheckKind::KeywordSimilarity => Box::new(KeywordCheck::new(config.keyword.normalization)),
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::EditDistance => "edit_distance",
            CheckKind::TokenDistance => "token_distance",
            CheckKind::Winnowing => "winnowing",
            CheckKind::TreeIsomorphism => "tree_isomorphism",
            CheckKind::KeywordSimilarity => "keyword_similarity",
        };
        f.write_str(name)
    }
}

/// Scores of one check run, in pair order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    scores: Vec<Option<Score>>,
    halted: bool,
}

impl ScoreSheet {
    pub fn from_output(output: PhaseOutput<Score>) -> Self {
        Self {
            scores: output.items,
            halted: output.halted,
        }
    }

    /// Was the run stopped before every pair was scored?
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of pair `index`; `None` if the pair was never processed
    pub fn get(&self, index: usize) -> Option<Score> {
        self.scores.get(index).copied().flatten()
    }

    /// Score of pair `index` unless it was never processed or is the sentinel
    pub fn available(&self, index: usize) -> Option<Score> {
        self.get(index).filter(|&score| score != UNAVAILABLE)
    }

    pub fn scores(&self) -> &[Option<Score>] {
        &self.scores
    }

    /// Plain score array, only for runs that scored every pair
    pub fn into_raw(self) -> Option<Vec<Score>> {
        if self.halted {
            return None;
        }
        self.scores.into_iter().collect()
    }
}

/// Entry point: batch state, provider, configuration and progress
pub struct ComparisonEngine {
    config: EngineConfig,
    provider: Arc<dyn SourceAnalysisProvider>,
    batch: Batch,
    progress: Arc<ProgressState>,
}

impl ComparisonEngine {
    /// Create an engine; the configuration is validated first
    pub fn new(provider: Arc<dyn SourceAnalysisProvider>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            provider,
            batch: Batch::default(),
            progress: Arc::new(ProgressState::new()),
        })
    }

    pub fn with_defaults(provider: Arc<dyn SourceAnalysisProvider>) -> Self {
        Self {
            config: EngineConfig::default(),
            provider,
            batch: Batch::default(),
            progress: Arc::new(ProgressState::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the current batch
    pub fn set_batch(&mut self, batch: Batch) {
        self.batch = batch;
    }

    /// Validate and load files plus pairs, replacing the current batch.
    ///
    /// On error the previous batch is kept.
    pub fn load_batch(
        &mut self,
        files: Vec<String>,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<()> {
        self.batch = Batch::new(files, pairs)?;
        Ok(())
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// Configured worker count; 0 means one per CPU
    pub fn worker_count(&self) -> usize {
        self.config.parallel.num_workers
    }

    /// Change the worker count used by the next run
    pub fn set_worker_count(&mut self, workers: usize) -> Result<()> {
        let parallel = ParallelConfig {
            num_workers: workers,
        };
        parallel.validate()?;
        self.config.parallel = parallel;
        Ok(())
    }

    /// Shared progress state, for polling or halting from another thread
    pub fn progress_handle(&self) -> Arc<ProgressState> {
        Arc::clone(&self.progress)
    }

    pub fn poll_progress(&self) -> (String, u32) {
        self.progress.poll_progress()
    }

    pub fn poll_phases_completed(&self) -> usize {
        self.progress.poll_phases_completed()
    }

    pub fn reset_phases_completed(&self) {
        self.progress.reset_phases_completed();
    }

    /// Ask the running check to stop after the items already in flight
    pub fn halt(&self) {
        self.progress.halt();
    }

    /// Run one of the built-in checks over the current batch
    pub fn run(&self, kind: CheckKind) -> Result<ScoreSheet> {
        let check = kind.build(&self.config);
        self.run_check(check.as_ref())
    }

    /// Run any check over the current batch.
    ///
    /// Progress and the halt flag are reset first, so a halt requested
    /// before this call has no effect on it.
    pub fn run_check(&self, check: &dyn PairwiseCheck) -> Result<ScoreSheet> {
        self.progress.reset();
        let workers = resolve_workers(self.config.parallel.num_workers);
        let runner = StripedRunner::new(workers, Arc::clone(&self.progress));
        let ctx = CheckContext::new(&self.batch, self.provider.as_ref(), &runner, &self.config);

        info!(
            check = check.name(),
            files = self.batch.file_count(),
            pairs = self.batch.pair_count(),
            workers,
            "check started"
        );
        let start = Instant::now();

        let sheet = ScoreSheet::from_output(check.run(&ctx)?);

        info!(
            check = check.name(),
            halted = sheet.is_halted(),
            phases = self.progress.poll_phases_completed(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "check finished"
        );
        Ok(sheet)
    }
}
