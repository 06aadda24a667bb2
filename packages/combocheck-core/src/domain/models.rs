/*
 * Domain Models - Scores and normalization modes
 *
 * Pure Rust types, no external dependencies
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pair score produced by every check
pub type Score = u32;

/// Reserved score meaning "this pair could not be scored"
pub const UNAVAILABLE: Score = Score::MAX;

/// Largest real score; distances beyond it are clamped so they never collide with `UNAVAILABLE`
pub const MAX_SCORE: Score = Score::MAX - 1;

/// Convert a raw distance into a score
pub fn clamp_score(distance: usize) -> Score {
    Score::try_from(distance).map_or(MAX_SCORE, |s| s.min(MAX_SCORE))
}

/// How the provider should normalize a file before handing back its bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Raw file contents
    #[default]
    None,
    /// Whitespace removed, everything else untouched
    WhitespaceOnly,
    /// Whitespace removed and identifiers replaced by a fixed name
    Full,
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalizationMode::None => "none",
            NormalizationMode::WhitespaceOnly => "whitespace_only",
            NormalizationMode::Full => "full",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_never_reaches_sentinel() {
        assert_eq!(clamp_score(0), 0);
        assert_eq!(clamp_score(17), 17);
        assert_eq!(clamp_score(MAX_SCORE as usize), MAX_SCORE);
        assert_eq!(clamp_score(UNAVAILABLE as usize), MAX_SCORE);
        assert_eq!(clamp_score(usize::MAX), MAX_SCORE);
    }

    #[test]
    fn test_normalization_mode_serde_names() {
        let yaml = serde_yaml::to_string(&NormalizationMode::WhitespaceOnly).unwrap();
        assert_eq!(yaml.trim(), "whitespace_only");
        let mode: NormalizationMode = serde_yaml::from_str("full").unwrap();
        assert_eq!(mode, NormalizationMode::Full);
        assert_eq!(NormalizationMode::default().to_string(), "none");
    }
}
