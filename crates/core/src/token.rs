//! Token extraction: peeling prompt decorations off a raw tag.
//!
//! Prompt tokens arrive wrapped in attention brackets and weight suffixes:
//! `(((blue_hair:1.2)))`, `[flower]`, `{smile}`. The core word is what
//! remains once every balanced enclosing pair and the trailing `: <number>`
//! weight are removed; it is what dictionaries match against, while buckets
//! keep the raw token intact.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Trailing weight annotation: a colon, then an optionally signed decimal,
/// anchored at the end of the token.
static WEIGHT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*[-+]?\d*\.?\d+\s*$").unwrap());

/// Strip enclosing bracket pairs and a trailing weight annotation.
///
/// Bracket pairs `()`, `[]`, `{}` are peeled one layer at a time while the
/// string is longer than one character and both ends match, trimming
/// whitespace after each peel. The weight suffix is then removed once.
///
/// Extraction never fails and is idempotent: an already-extracted core word
/// comes back unchanged, and empty input yields empty output.
pub fn extract_core_word(raw: &str) -> String {
    let mut part = raw.trim();
    while part.len() > 1 && is_enclosed(part) {
        part = part[1..part.len() - 1].trim();
    }
    WEIGHT_SUFFIX_RE.replace(part, "").trim().to_string()
}

/// True when the first and last bytes form a matching bracket pair.
/// Multi-byte first characters can never match, so byte slicing stays valid.
fn is_enclosed(part: &str) -> bool {
    let bytes = part.as_bytes();
    matches!(
        (bytes[0], bytes[bytes.len() - 1]),
        (b'(', b')') | (b'[', b']') | (b'{', b'}')
    )
}

/// A raw prompt token paired with its extracted core word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptToken {
    /// The trimmed token exactly as it appeared in the prompt
    pub raw: String,

    /// The decoration-free word dictionaries are matched against
    pub core: String,
}

impl PromptToken {
    /// Build a token from one comma-separated piece of a prompt.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let core = extract_core_word(&raw);
        Self { raw, core }
    }

    /// True when nothing but decoration remained after extraction.
    /// Such tokens are dropped by the classifier rather than bucketed.
    pub fn is_blank(&self) -> bool {
        self.core.is_empty()
    }
}
