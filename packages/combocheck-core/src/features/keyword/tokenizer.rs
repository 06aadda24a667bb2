//! Identifier tokenizer
//!
//! One pass over the bytes. A token starts at `[A-Za-z_]` and runs through
//! `[A-Za-z0-9_]`; every other byte separates tokens. No language knowledge
//! is involved: keywords and identifiers are both just tokens.

use crate::shared::LinkedList;

fn starts_token(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn continues_token(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Every token in source order, duplicates included
pub fn tokenize(bytes: &[u8]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !starts_token(bytes[pos]) {
            pos += 1;
            continue;
        }
        let start = pos;
        pos += 1;
        while pos < bytes.len() && continues_token(bytes[pos]) {
            pos += 1;
        }
        // Token bytes are ASCII, so a byte-to-char map is exact
        tokens.push(bytes[start..pos].iter().map(|&b| b as char).collect());
    }

    tokens
}

/// Distinct tokens of a buffer
pub fn unique_tokens(bytes: &[u8]) -> LinkedList<String> {
    let mut set = LinkedList::new();
    for token in tokenize(bytes) {
        set.insert_unique(token);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_c_snippet() {
        let tokens = tokenize(b"int main(void) { return x_1 + 2abc; }");
        assert_eq!(
            tokens,
            vec!["int", "main", "void", "return", "x_1", "abc"]
        );
    }

    #[test]
    fn test_leading_digits_are_separators() {
        assert_eq!(tokenize(b"123 _"), vec!["_"]);
        assert!(tokenize(b"").is_empty());
        assert!(tokenize(b"(){}[];").is_empty());
    }

    #[test]
    fn test_non_ascii_bytes_split_tokens() {
        assert_eq!(tokenize("caf\u{e9}s".as_bytes()), vec!["caf", "s"]);
    }

    #[test]
    fn test_unique_tokens_collapse_duplicates() {
        let set = unique_tokens(b"a b a c b a");
        assert_eq!(set.len(), 3);
        assert!(set.contains(&"c".to_string()));
    }
}
