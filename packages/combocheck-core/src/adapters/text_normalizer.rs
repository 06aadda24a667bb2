//! Plaintext normalizer
//!
//! Language-blind fallback for providers without a real front-end. Both
//! normalizing modes drop space, tab, CR and LF and fold ASCII letters to
//! lowercase; without a parser there are no identifiers to rename, so `Full`
//! is the same as `WhitespaceOnly` here.

use crate::domain::NormalizationMode;

fn is_stripped(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Normalize raw file contents according to `mode`
pub fn normalize_text(bytes: Vec<u8>, mode: NormalizationMode) -> Vec<u8> {
    match mode {
        NormalizationMode::None => bytes,
        NormalizationMode::WhitespaceOnly | NormalizationMode::Full => bytes
            .into_iter()
            .filter(|&b| !is_stripped(b))
            .map(|b| b.to_ascii_lowercase())
            .collect(),
    }
}
