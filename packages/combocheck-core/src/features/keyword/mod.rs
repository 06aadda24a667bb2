//! Keyword-Similarity Engine
//!
//! Tokenizes each file into identifier tokens, indexes them in two inverted
//! maps and scores a pair by the number of tokens only one side has.

pub mod application;
pub mod index;
pub mod tokenizer;

pub use application::KeywordCheck;
pub use index::KeywordIndex;
pub use tokenizer::{tokenize, unique_tokens};
