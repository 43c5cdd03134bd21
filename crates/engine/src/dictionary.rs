//! Dictionary loading: category word lists read from flat files.
//!
//! Each category points at a folder; every `.txt` file in that folder is a
//! newline-delimited word list, and all non-empty trimmed lines across those
//! files union into the category's dictionary. Dictionaries are rebuilt from
//! disk on every classification call, with no caching or invalidation tracking.

use std::collections::HashSet;
use std::path::Path;
use tagsift_core::Category;
use tracing::{debug, warn};

/// Read every `.txt` word list in a folder into one set.
///
/// A missing folder is an empty dictionary, not an error. Files that cannot
/// be read are skipped with a warning.
pub fn load_category_words(folder: &Path) -> HashSet<String> {
    let mut words = HashSet::new();
    if !folder.is_dir() {
        return words;
    }

    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(folder = %folder.display(), error = %e, "Skipping unreadable dictionary folder");
            return words;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                words.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(String::from),
                );
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unreadable dictionary file");
            }
        }
    }

    words
}

/// One category's dictionary.
#[derive(Debug, Clone)]
pub struct CategoryDictionary {
    pub name: String,
    pub words: HashSet<String>,
}

/// Every category's dictionary, in classification order.
#[derive(Debug, Clone)]
pub struct DictionarySet {
    pub categories: Vec<CategoryDictionary>,
}

impl DictionarySet {
    /// Load all dictionaries from disk in configuration order.
    ///
    /// With `replace_underscores`, every entry's `_` becomes ` ` at load
    /// time; input tokens are never rewritten.
    pub fn load(categories: &[Category], replace_underscores: bool) -> Self {
        let categories = categories
            .iter()
            .map(|category| {
                let mut words = load_category_words(Path::new(&category.path));
                if replace_underscores {
                    words = words.into_iter().map(|w| w.replace('_', " ")).collect();
                }
                debug!(
                    category = %category.name,
                    words = words.len(),
                    "Dictionary loaded"
                );
                CategoryDictionary {
                    name: category.name.clone(),
                    words,
                }
            })
            .collect();
        Self { categories }
    }

    pub fn total_words(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }
}
