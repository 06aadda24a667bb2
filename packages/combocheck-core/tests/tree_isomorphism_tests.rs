//! Tree isomorphism through the engine: very deep trees and trees that
//! cannot be fully navigated

mod common;

use combocheck_core::{
    CheckKind, MemoryProvider, NormalizationMode, ProviderError, SourceAnalysisProvider,
    TreeNode, UNAVAILABLE,
};
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_deep_trees_on_worker_stacks() {
    let depth = 100_000;
    let mut provider = MemoryProvider::new();
    provider.insert_tree("f0.c", path(depth));
    provider.insert_tree("f1.c", path(depth));
    provider.insert_tree("f2.c", node(vec![leaf(), path(depth - 1)]));
    let engine = engine_from(provider, 3, 2);

    let scores = engine
        .run(CheckKind::TreeIsomorphism)
        .unwrap()
        .into_raw()
        .unwrap();
    assert_eq!(scores, vec![0, 1, 1]);
}

struct Leaf;

impl<'t> TreeNode<'t> for Leaf {
    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, _index: usize) -> Option<Box<dyn TreeNode<'t> + 't>> {
        None
    }
}

/// Reports `claimed` leaf children but only produces the first `produced`
struct Partial {
    claimed: usize,
    produced: usize,
}

impl<'t> TreeNode<'t> for Partial {
    fn child_count(&self) -> usize {
        self.claimed
    }

    fn child(&self, index: usize) -> Option<Box<dyn TreeNode<'t> + 't>> {
        (index < self.produced).then(|| Box::new(Leaf) as Box<dyn TreeNode<'t> + 't>)
    }
}

/// f0 and f2 are whole two-leaf forks; f1 claims three leaves but loses one
struct PartialTrees;

impl SourceAnalysisProvider for PartialTrees {
    fn normalized_bytes(
        &self,
        file: &str,
        _mode: NormalizationMode,
    ) -> Result<Vec<u8>, ProviderError> {
        Err(ProviderError::unparsable(file, "trees only"))
    }

    fn syntax_tree(&self, file: &str) -> Result<Box<dyn TreeNode<'_> + '_>, ProviderError> {
        let tree = match file {
            "f1.c" => Partial {
                claimed: 3,
                produced: 2,
            },
            _ => Partial {
                claimed: 2,
                produced: 2,
            },
        };
        Ok(Box::new(tree))
    }
}

#[test]
fn test_unproducible_child_scores_unavailable() {
    let engine = engine_from(PartialTrees, 3, 2);

    let sheet = engine.run(CheckKind::TreeIsomorphism).unwrap();
    // pairs: (0,1) (0,2) (1,2)
    assert_eq!(sheet.get(0), Some(UNAVAILABLE));
    assert_eq!(sheet.get(1), Some(0));
    assert_eq!(sheet.get(2), Some(UNAVAILABLE));
}
