//! Buckets: ordered groups of raw tokens, one per category.
//!
//! A classification pass fills one bucket per configured category plus a
//! trailing `Unclassified` bucket for everything no dictionary claimed.
//! Buckets hold raw tokens (brackets and weights intact) so a reassembled
//! prompt keeps its original emphasis.

use serde::{Deserialize, Serialize};

/// Name of the catch-all bucket that trails every classification result.
pub const UNCLASSIFIED: &str = "Unclassified";

/// One category's worth of classified tokens, in prompt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub tokens: Vec<String>,
}

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
        }
    }

    /// Comma-join the raw tokens back into prompt fragment form.
    pub fn render(&self) -> String {
        self.tokens.join(", ")
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.tokens.iter().any(|t| t == raw)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A bucket's name paired with its rendered text, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBucket {
    pub name: String,
    pub text: String,
}

/// The full outcome of classifying one prompt: every category bucket in
/// configuration order, then the `Unclassified` bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketState {
    pub buckets: Vec<Bucket>,
}

impl BucketState {
    /// Empty state with one bucket per category name, `Unclassified` last.
    pub fn for_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets: Vec<Bucket> = names.into_iter().map(Bucket::new).collect();
        buckets.push(Bucket::new(UNCLASSIFIED));
        Self { buckets }
    }

    pub fn get(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Bucket> {
        self.buckets.iter_mut().find(|b| b.name == name)
    }

    pub fn unclassified(&self) -> Option<&Bucket> {
        self.get(UNCLASSIFIED)
    }

    pub fn total_tokens(&self) -> usize {
        self.buckets.iter().map(|b| b.tokens.len()).sum()
    }

    /// Render every bucket in order, including empty ones.
    pub fn render_all(&self) -> Vec<RenderedBucket> {
        self.buckets
            .iter()
            .map(|b| RenderedBucket {
                name: b.name.clone(),
                text: b.render(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_categories_appends_unclassified_last() {
        let state = BucketState::for_categories(["Poses", "Clothes"]);
        let names: Vec<&str> = state.buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Poses", "Clothes", UNCLASSIFIED]);
    }

    #[test]
    fn render_joins_raw_tokens_with_comma_space() {
        let mut bucket = Bucket::new("Clothes");
        bucket.tokens.push("(red_dress:1.1)".to_string());
        bucket.tokens.push("[hat]".to_string());
        assert_eq!(bucket.render(), "(red_dress:1.1), [hat]");
    }

    #[test]
    fn empty_bucket_renders_empty_string() {
        assert_eq!(Bucket::new("Poses").render(), "");
    }

    #[test]
    fn get_mut_reaches_the_named_bucket() {
        let mut state = BucketState::for_categories(["Poses"]);
        state
            .get_mut("Poses")
            .expect("bucket exists")
            .tokens
            .push("standing".to_string());
        assert!(state.get("Poses").expect("bucket exists").contains("standing"));
        assert_eq!(state.total_tokens(), 1);
    }

    #[test]
    fn render_all_keeps_order_and_empty_buckets() {
        let mut state = BucketState::for_categories(["Poses", "Clothes"]);
        state
            .get_mut(UNCLASSIFIED)
            .expect("bucket exists")
            .tokens
            .push("mystery".to_string());
        let rendered = state.render_all();
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].text, "");
        assert_eq!(rendered[2].name, UNCLASSIFIED);
        assert_eq!(rendered[2].text, "mystery");
    }
}
