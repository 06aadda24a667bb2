//! In-memory provider
//!
//! Holds file contents, token ids and syntax trees registered up front.
//! Used by tests and by callers that already have everything in memory.

use super::text_normalizer::normalize_text;
use crate::domain::{NormalizationMode, ProviderError, SourceAnalysisProvider, TreeNode};
use std::collections::HashMap;
use std::io;

/// Owned ordered tree
///
/// Dropping and measuring walk an explicit stack, so very deep trees are fine.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    children: Vec<SyntaxTree>,
}

impl SyntaxTree {
    pub fn leaf() -> Self {
        Self::default()
    }

    pub fn node(children: Vec<SyntaxTree>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[SyntaxTree] {
        &self.children
    }

    /// Handle for navigating this tree through the `TreeNode` port
    pub fn as_node(&self) -> Box<dyn TreeNode<'_> + '_> {
        Box::new(self)
    }

    /// Total number of nodes, root included
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            count += 1;
            pending.extend(tree.children.iter());
        }
        count
    }
}

impl Drop for SyntaxTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.children);
        }
    }
}

impl<'t> TreeNode<'t> for &'t SyntaxTree {
    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<Box<dyn TreeNode<'t> + 't>> {
        let tree: &'t SyntaxTree = *self;
        tree.children
            .get(index)
            .map(|child| Box::new(child) as Box<dyn TreeNode<'t> + 't>)
    }
}

#[derive(Debug, Default)]
pub struct MemoryProvider {
    contents: HashMap<String, Vec<u8>>,
    tokens: HashMap<String, Vec<i32>>,
    trees: HashMap<String, SyntaxTree>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_text(&mut self, file: impl Into<String>, text: impl Into<String>) {
        self.contents.insert(file.into(), text.into().into_bytes());
    }

    pub fn insert_bytes(&mut self, file: impl Into<String>, bytes: Vec<u8>) {
        self.contents.insert(file.into(), bytes);
    }

    pub fn insert_tokens(&mut self, file: impl Into<String>, tokens: Vec<i32>) {
        self.tokens.insert(file.into(), tokens);
    }

    pub fn insert_tree(&mut self, file: impl Into<String>, tree: SyntaxTree) {
        self.trees.insert(file.into(), tree);
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

fn not_loaded(file: &str) -> ProviderError {
    ProviderError::Unreadable {
        file: file.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "file not loaded"),
    }
}

impl SourceAnalysisProvider for MemoryProvider {
    fn normalized_bytes(
        &self,
        file: &str,
        mode: NormalizationMode,
    ) -> Result<Vec<u8>, ProviderError> {
        let raw = self.contents.get(file).ok_or_else(|| not_loaded(file))?;
        Ok(normalize_text(raw.clone(), mode))
    }

    fn token_ids(&self, file: &str) -> Result<Vec<i32>, ProviderError> {
        self.tokens
            .get(file)
            .cloned()
            .ok_or_else(|| ProviderError::unparsable(file, "no tokens registered"))
    }

    fn syntax_tree(&self, file: &str) -> Result<Box<dyn TreeNode<'_> + '_>, ProviderError> {
        self.trees
            .get(file)
            .map(SyntaxTree::as_node)
            .ok_or_else(|| ProviderError::unparsable(file, "no tree registered"))
    }
}
