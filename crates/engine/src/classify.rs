//! Prompt classification: comma-split tokens matched against dictionaries.
//!
//! The prompt splits on commas into raw tokens. Each token's core word is
//! tested against every category dictionary in configuration order; the first
//! match wins, and whatever matches nothing lands in the `Unclassified`
//! bucket. Buckets keep the raw token so reassembled prompts keep their
//! brackets and weights.

use crate::dictionary::DictionarySet;
use std::collections::HashSet;
use tagsift_core::{Bucket, BucketState, Category, PromptToken, UNCLASSIFIED};
use tracing::debug;

/// Flags steering one classification pass.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Bidirectional substring matching. Unreliable with short entries: a
    /// dictionary word like "a" claims nearly every token.
    pub fuzzy: bool,

    /// Rewrite `_` to ` ` in dictionary entries at load time.
    pub replace_underscores: bool,

    /// Drop a raw token that is already present in its target bucket.
    pub dedupe: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            fuzzy: false,
            replace_underscores: true,
            dedupe: false,
        }
    }
}

/// Classify a prompt against dictionaries freshly loaded from disk.
pub fn classify_prompt(
    text: &str,
    categories: &[Category],
    options: &ClassifyOptions,
) -> BucketState {
    let dicts = DictionarySet::load(categories, options.replace_underscores);
    classify_tokens(text, &dicts, options)
}

/// Classify a prompt against already-loaded dictionaries.
///
/// Tokens whose core word is empty (pure decoration such as `"( )"`) are
/// dropped. Every other token lands in exactly one bucket.
pub fn classify_tokens(text: &str, dicts: &DictionarySet, options: &ClassifyOptions) -> BucketState {
    let mut state =
        BucketState::for_categories(dicts.categories.iter().map(|c| c.name.clone()));

    for part in text.split(',') {
        let token = PromptToken::from_raw(part);
        if token.is_blank() {
            continue;
        }

        let target = dicts
            .categories
            .iter()
            .find(|category| matches(&category.words, &token.core, options.fuzzy))
            .map_or(UNCLASSIFIED, |category| category.name.as_str());

        if let Some(bucket) = state.get_mut(target) {
            push_token(bucket, token.raw, options.dedupe);
        }
    }

    debug!(tokens = state.total_tokens(), "Prompt classified");
    state
}

/// Exact mode: the core word is a literal dictionary entry. Fuzzy mode: the
/// core word contains, or is contained in, any entry.
fn matches(words: &HashSet<String>, core: &str, fuzzy: bool) -> bool {
    if fuzzy {
        words
            .iter()
            .any(|word| core.contains(word.as_str()) || word.contains(core))
    } else {
        words.contains(core)
    }
}

fn push_token(bucket: &mut Bucket, raw: String, dedupe: bool) {
    if dedupe && bucket.contains(&raw) {
        return;
    }
    bucket.tokens.push(raw);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::CategoryDictionary;

    fn dicts(entries: &[(&str, &[&str])]) -> DictionarySet {
        DictionarySet {
            categories: entries
                .iter()
                .map(|(name, words)| CategoryDictionary {
                    name: (*name).to_string(),
                    words: words.iter().map(|w| (*w).to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn every_token_lands_in_exactly_one_bucket() {
        let dicts = dicts(&[("Poses", &["standing"]), ("Clothes", &["red dress"])]);
        let state = classify_tokens(
            "standing, red dress, mystery, , (another:1.1)",
            &dicts,
            &ClassifyOptions::default(),
        );

        // Four non-empty tokens: the empty split piece disappears.
        assert_eq!(state.total_tokens(), 4);
        assert_eq!(state.get("Poses").unwrap().tokens, ["standing"]);
        assert_eq!(state.get("Clothes").unwrap().tokens, ["red dress"]);
        assert_eq!(
            state.unclassified().unwrap().tokens,
            ["mystery", "(another:1.1)"]
        );
    }

    #[test]
    fn buckets_keep_raw_tokens_while_matching_cores() {
        let dicts = dicts(&[("Poses", &["standing"])]);
        let state = classify_tokens("(((standing:1.3)))", &dicts, &ClassifyOptions::default());
        assert_eq!(state.get("Poses").unwrap().tokens, ["(((standing:1.3)))"]);
    }

    #[test]
    fn exact_mode_requires_a_literal_entry() {
        let dicts = dicts(&[("Eyes", &["eyes"])]);
        let state = classify_tokens("eye", &dicts, &ClassifyOptions::default());
        assert!(state.get("Eyes").unwrap().is_empty());
        assert_eq!(state.unclassified().unwrap().tokens, ["eye"]);
    }

    #[test]
    fn fuzzy_mode_matches_substrings_both_ways() {
        let dicts = dicts(&[("Eyes", &["eyes"])]);
        let options = ClassifyOptions {
            fuzzy: true,
            ..ClassifyOptions::default()
        };

        // "eye" is a substring of the entry "eyes"...
        let state = classify_tokens("eye", &dicts, &options);
        assert_eq!(state.get("Eyes").unwrap().tokens, ["eye"]);

        // ...and "blue eyes glow" contains the entry.
        let state = classify_tokens("blue eyes glow", &dicts, &options);
        assert_eq!(state.get("Eyes").unwrap().tokens, ["blue eyes glow"]);
    }

    #[test]
    fn first_matching_category_wins() {
        let dicts = dicts(&[("First", &["smile"]), ("Second", &["smile"])]);
        let state = classify_tokens("smile", &dicts, &ClassifyOptions::default());
        assert_eq!(state.get("First").unwrap().tokens, ["smile"]);
        assert!(state.get("Second").unwrap().is_empty());
    }

    #[test]
    fn dedupe_drops_repeated_raw_tokens() {
        let dicts = dicts(&[("Poses", &["standing"])]);

        let keep = classify_tokens("standing, standing", &dicts, &ClassifyOptions::default());
        assert_eq!(keep.get("Poses").unwrap().tokens.len(), 2);

        let options = ClassifyOptions {
            dedupe: true,
            ..ClassifyOptions::default()
        };
        let deduped = classify_tokens("standing, standing, (standing:1.2)", &dicts, &options);
        // Different raw forms of the same core stay distinct.
        assert_eq!(
            deduped.get("Poses").unwrap().tokens,
            ["standing", "(standing:1.2)"]
        );
    }

    #[test]
    fn decoration_only_tokens_are_dropped() {
        let dicts = dicts(&[("Poses", &["standing"])]);
        let state = classify_tokens("( ), :1.2, standing", &dicts, &ClassifyOptions::default());
        assert_eq!(state.total_tokens(), 1);
        assert!(state.unclassified().unwrap().is_empty());
    }

    #[test]
    fn empty_prompt_yields_empty_buckets() {
        let dicts = dicts(&[("Poses", &["standing"])]);
        let state = classify_tokens("", &dicts, &ClassifyOptions::default());
        assert_eq!(state.total_tokens(), 0);
        assert_eq!(state.buckets.len(), 2);
    }

    #[test]
    fn classify_prompt_reads_dictionaries_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let poses = dir.path().join("Poses");
        std::fs::create_dir(&poses).unwrap();
        std::fs::write(poses.join("words.txt"), "blue_hair\n").unwrap();
        let categories = vec![Category::new("Poses", poses.to_string_lossy())];

        // replace_underscores rewrites the entry, so the spaced token matches.
        let state = classify_prompt("blue hair", &categories, &ClassifyOptions::default());
        assert_eq!(state.get("Poses").unwrap().tokens, ["blue hair"]);

        let options = ClassifyOptions {
            replace_underscores: false,
            ..ClassifyOptions::default()
        };
        let state = classify_prompt("blue hair", &categories, &options);
        assert_eq!(state.unclassified().unwrap().tokens, ["blue hair"]);
    }
}
