//! Batch context: corpus + pair list
//!
//! Validated once on construction and immutable afterwards. Checks borrow it
//! for the duration of a run, so no file or pair state is process-wide.

use crate::errors::{CombocheckError, Result};

/// One comparison: indices into the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilePair {
    pub left: usize,
    pub right: usize,
}

impl FilePair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl From<(usize, usize)> for FilePair {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

/// Ordered corpus of file identifiers and the pairs to score
#[derive(Debug, Clone, Default)]
pub struct Batch {
    files: Vec<String>,
    pairs: Vec<FilePair>,
}

impl Batch {
    /// Build a batch, rejecting any pair that is out of range or compares a file with itself
    pub fn new(files: Vec<String>, pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let pairs: Vec<FilePair> = pairs.into_iter().map(FilePair::from).collect();
        let file_count = files.len();

        for (index, pair) in pairs.iter().enumerate() {
            if pair.left >= file_count || pair.right >= file_count || pair.left == pair.right {
                return Err(CombocheckError::InvalidPair {
                    pair: index,
                    left: pair.left,
                    right: pair.right,
                    file_count,
                });
            }
        }

        Ok(Self { files, pairs })
    }

    /// Build a batch from a flat `[l0, r0, l1, r1, ...]` index array
    pub fn from_flat(files: Vec<String>, flat: &[u32]) -> Result<Self> {
        if flat.len() % 2 != 0 {
            return Err(CombocheckError::PairDataLength(flat.len()));
        }
        let pairs = flat
            .chunks_exact(2)
            .map(|chunk| (chunk[0] as usize, chunk[1] as usize));
        Self::new(files, pairs)
    }

    /// Every unordered pair `(i, j)` with `i < j`
    pub fn all_pairs(files: Vec<String>) -> Self {
        let n = files.len();
        let pairs = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| FilePair::new(i, j)))
            .collect();
        Self { files, pairs }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn file(&self, index: usize) -> &str {
        &self.files[index]
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn pairs(&self) -> &[FilePair] {
        &self.pairs
    }

    pub fn pair(&self, index: usize) -> FilePair {
        self.pairs[index]
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
