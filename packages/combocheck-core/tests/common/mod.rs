//! Common test utilities for combocheck-core
//!
//! Builders for in-memory corpora and engines used by the integration tests.

#![allow(dead_code)]

use combocheck_core::{
    ComparisonEngine, EngineConfig, MemoryProvider, SourceAnalysisProvider, SyntaxTree,
};
use std::sync::Arc;

/// Corpus names `f0.c`, `f1.c`, ...
pub fn file_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("f{}.c", i)).collect()
}

/// Provider holding `texts[i]` under `f{i}.c`
pub fn text_provider(texts: &[&str]) -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    for (name, text) in file_names(texts.len()).into_iter().zip(texts) {
        provider.insert_text(name, *text);
    }
    provider
}

/// Engine over `texts` with every pair `(i, j)`, `i < j`, loaded
pub fn engine_over(texts: &[&str], workers: usize) -> ComparisonEngine {
    engine_from(text_provider(texts), texts.len(), workers)
}

pub fn engine_from<P>(provider: P, files: usize, workers: usize) -> ComparisonEngine
where
    P: SourceAnalysisProvider + 'static,
{
    let config = EngineConfig::default().workers(workers);
    let mut engine = ComparisonEngine::new(Arc::new(provider), config).expect("valid config");
    let pairs: Vec<(usize, usize)> = (0..files)
        .flat_map(|i| (i + 1..files).map(move |j| (i, j)))
        .collect();
    engine
        .load_batch(file_names(files), pairs)
        .expect("valid batch");
    engine
}

/// `leaf`
pub fn leaf() -> SyntaxTree {
    SyntaxTree::leaf()
}

/// `node(children)`
pub fn node(children: Vec<SyntaxTree>) -> SyntaxTree {
    SyntaxTree::node(children)
}

/// Root with a single chain of `depth` nodes below it
pub fn path(depth: usize) -> SyntaxTree {
    let mut tree = SyntaxTree::leaf();
    for _ in 0..depth {
        tree = SyntaxTree::node(vec![tree]);
    }
    tree
}

/// Same tree with every child list reversed
pub fn mirror(tree: &SyntaxTree) -> SyntaxTree {
    SyntaxTree::node(tree.children().iter().rev().map(mirror).collect())
}
