//! Inverted keyword indexes
//!
//! Two maps built on `ChainedHashMap`:
//! - token -> files containing it
//! - file  -> tokens it contains
//!
//! Files are keyed by corpus index, so two corpus entries with the same name
//! stay distinct. Building is single-threaded (`&mut self`); scoring only
//! reads and may run from any number of workers.

use crate::shared::containers::{djb2, index_hash, key_equal};
use crate::shared::{ChainedHashMap, CollisionPolicy, LinkedList};

pub struct KeywordIndex {
    token_files: ChainedHashMap<String, LinkedList<usize>>,
    file_tokens: ChainedHashMap<usize, LinkedList<String>>,
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self {
            token_files: ChainedHashMap::new(
                djb2::<String>,
                key_equal::<String>,
                CollisionPolicy::ReplaceInPlace,
            ),
            file_tokens: ChainedHashMap::new(
                index_hash,
                key_equal::<usize>,
                CollisionPolicy::ReplaceInPlace,
            ),
        }
    }

    /// Record the tokens of `file`; repeated tokens are stored once.
    ///
    /// Adding the same file twice merges the two token sets.
    pub fn add_file<I>(&mut self, file: usize, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        if !self.file_tokens.contains_key(&file) {
            self.file_tokens.put(file, LinkedList::new());
        }

        for token in tokens {
            let Some(own) = self.file_tokens.get_mut(&file) else {
                continue;
            };
            if own.contains(&token) {
                continue;
            }
            own.push_front(token.clone());

            if let Some(files) = self.token_files.get_mut(&token) {
                files.insert_unique(file);
            } else {
                let mut files = LinkedList::new();
                files.push_front(file);
                self.token_files.put(token, files);
            }
        }
    }

    /// Was `file` added to the index?
    pub fn contains_file(&self, file: usize) -> bool {
        self.file_tokens.contains_key(&file)
    }

    /// Distinct tokens of `file`
    pub fn tokens_of(&self, file: usize) -> Option<&LinkedList<String>> {
        self.file_tokens.get(&file)
    }

    /// Files containing `token`
    pub fn files_with(&self, token: &str) -> Option<&LinkedList<usize>> {
        self.token_files.get(&token.to_string())
    }

    /// Number of distinct tokens across the corpus
    pub fn vocabulary_size(&self) -> usize {
        self.token_files.len()
    }

    /// Size of the symmetric difference of the two files' token sets.
    ///
    /// `None` if either file was never added.
    pub fn unique_token_diff(&self, left: usize, right: usize) -> Option<usize> {
        let left_tokens = self.file_tokens.get(&left)?;
        let right_tokens = self.file_tokens.get(&right)?;

        let common = left_tokens
            .iter()
            .filter(|token| {
                self.token_files
                    .get(token)
                    .is_some_and(|files| files.contains(&right))
            })
            .count();

        Some(left_tokens.len() + right_tokens.len() - 2 * common)
    }
}
