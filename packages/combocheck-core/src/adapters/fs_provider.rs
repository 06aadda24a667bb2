//! Filesystem provider
//!
//! Reads file identifiers as paths, relative to an optional root. Only bytes
//! are offered; token ids and syntax trees need a language front-end and
//! report `Unsupported`.

use super::text_normalizer::normalize_text;
use crate::domain::{NormalizationMode, ProviderError, SourceAnalysisProvider};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct FileSystemProvider {
    root: Option<PathBuf>,
}

impl FileSystemProvider {
    /// Resolve file identifiers as given (absolute or relative to the working directory)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative file identifiers against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, file: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(file),
            None => Path::new(file).to_path_buf(),
        }
    }
}

impl SourceAnalysisProvider for FileSystemProvider {
    fn normalized_bytes(
        &self,
        file: &str,
        mode: NormalizationMode,
    ) -> Result<Vec<u8>, ProviderError> {
        let raw = std::fs::read(self.resolve(file)).map_err(|source| ProviderError::Unreadable {
            file: file.to_string(),
            source,
        })?;
        Ok(normalize_text(raw, mode))
    }
}
