/*
 * Domain Ports - Interfaces for external dependencies
 *
 * HEXAGONAL ARCHITECTURE:
 * - Domain defines the source-analysis interface
 * - Adapters (filesystem, in-memory, language front-ends) implement it
 * - Checks only ever see bytes, integers and tree shapes
 */

use super::models::NormalizationMode;
use thiserror::Error;

/// Failure to produce derived data for one file.
///
/// Distinct from a valid empty result: an empty file yields `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The file could not be read
    #[error("cannot read '{file}': {source}")]
    Unreadable {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be analyzed (e.g. does not parse)
    #[error("cannot analyze '{file}': {reason}")]
    Unparsable { file: String, reason: String },

    /// The provider does not offer this kind of derived data
    #[error("provider does not support {what}")]
    Unsupported { what: String },
}

impl ProviderError {
    pub fn unsupported(what: impl Into<String>) -> Self {
        ProviderError::Unsupported { what: what.into() }
    }

    pub fn unparsable(file: impl Into<String>, reason: impl Into<String>) -> Self {
        ProviderError::Unparsable {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Ordered rooted tree, navigated by child index. Node labels are not exposed.
///
/// `'t` is the lifetime of the tree itself. A child handle borrows the tree,
/// not the handle it came from, so handles can be kept on an explicit stack.
pub trait TreeNode<'t> {
    fn child_count(&self) -> usize;

    /// `None` for an index in range means the child could not be produced
    fn child(&self, index: usize) -> Option<Box<dyn TreeNode<'t> + 't>>;
}

/// Port: source-analysis provider (driven port)
///
/// Called concurrently from every worker of a phase, hence `Send + Sync`.
/// Only `normalized_bytes` is mandatory; providers that cannot tokenize or
/// parse keep the defaults, which report `Unsupported`.
pub trait SourceAnalysisProvider: Send + Sync {
    /// File contents after applying `mode`
    fn normalized_bytes(&self, file: &str, mode: NormalizationMode)
        -> Result<Vec<u8>, ProviderError>;

    /// Language token ids in source order
    fn token_ids(&self, file: &str) -> Result<Vec<i32>, ProviderError> {
        let _ = file;
        Err(ProviderError::unsupported("token ids"))
    }

    /// Syntax tree of the file
    fn syntax_tree(&self, file: &str) -> Result<Box<dyn TreeNode<'_> + '_>, ProviderError> {
        let _ = file;
        Err(ProviderError::unsupported("syntax trees"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BytesOnly;

    impl SourceAnalysisProvider for BytesOnly {
        fn normalized_bytes(
            &self,
            _file: &str,
            _mode: NormalizationMode,
        ) -> Result<Vec<u8>, ProviderError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_default_methods_report_unsupported() {
        let provider = BytesOnly;
        assert!(matches!(
            provider.token_ids("a.c"),
            Err(ProviderError::Unsupported { .. })
        ));
        assert!(matches!(
            provider.syntax_tree("a.c"),
            Err(ProviderError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let provider = BytesOnly;
        let bytes = provider
            .normalized_bytes("empty.c", NormalizationMode::None)
            .unwrap();
        assert!(bytes.is_empty());
    }
}
