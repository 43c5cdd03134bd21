//! Persistence: per-category output files under a fixed name prefix.
//!
//! Each category owns one newline-delimited file, `extract_<name>.txt`. Fast
//! mode appends the saved text as a new line; the default mode rewrites the
//! file as the union of its existing lines and the new entry, first-seen
//! order preserved. Writes are not locked; two sessions saving the same
//! category can race.

use std::io::Write;
use std::path::{Path, PathBuf};
use tagsift_core::{BucketState, SaveError, UNCLASSIFIED};
use tracing::debug;

/// File name prefix for every category's output file.
pub const OUTPUT_FILE_PREFIX: &str = "extract_";

/// Clean up a block of text before it is saved: fullwidth commas become
/// ASCII, runs of commas collapse to one, runs of spaces collapse to one.
pub fn normalize_save_text(text: &str) -> String {
    let mut text = text.replace('，', ",");
    while text.contains(",,") {
        text = text.replace(",,", ",");
    }
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim().to_string()
}

/// Writes classification results into per-category files inside one
/// directory, creating the directory on first save.
#[derive(Debug, Clone)]
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output file path for a category.
    pub fn file_path(&self, category_name: &str) -> PathBuf {
        self.dir
            .join(format!("{OUTPUT_FILE_PREFIX}{category_name}.txt"))
    }

    /// Save one block of text under a category.
    ///
    /// The text is normalized first; empty text is a no-op. Returns whether
    /// the file was touched. Any filesystem error fails this save and
    /// nothing else.
    pub fn save(&self, category_name: &str, text: &str, fast: bool) -> Result<bool, SaveError> {
        let entry = normalize_save_text(text);
        if entry.is_empty() {
            return Ok(false);
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| SaveError::WriteFailed {
            path: self.dir.clone(),
            reason: e.to_string(),
        })?;

        let path = self.file_path(category_name);
        if fast {
            self.append_line(&path, &entry)?;
        } else {
            self.rewrite_deduplicated(&path, &entry)?;
        }
        debug!(category = category_name, path = %path.display(), fast, "Saved");
        Ok(true)
    }

    /// Save every category bucket's rendered text; the catch-all
    /// `Unclassified` bucket is never persisted. Returns the names of the
    /// categories whose files were touched.
    pub fn save_buckets(&self, state: &BucketState, fast: bool) -> Result<Vec<String>, SaveError> {
        let mut saved = Vec::new();
        for bucket in &state.buckets {
            if bucket.name == UNCLASSIFIED {
                continue;
            }
            if self.save(&bucket.name, &bucket.render(), fast)? {
                saved.push(bucket.name.clone());
            }
        }
        Ok(saved)
    }

    /// Append the entry as a new line, creating the file when absent.
    fn append_line(&self, path: &Path, entry: &str) -> Result<(), SaveError> {
        let has_content = std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| SaveError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let line = if has_content {
            format!("\n{entry}")
        } else {
            entry.to_string()
        };
        file.write_all(line.as_bytes())
            .map_err(|e| SaveError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Rewrite the file as the union of its lines and the new entry.
    ///
    /// Existing lines keep their order (duplicates collapse onto the first
    /// occurrence); a new entry lands at the end.
    fn rewrite_deduplicated(&self, path: &Path, entry: &str) -> Result<(), SaveError> {
        let existing = if path.exists() {
            std::fs::read_to_string(path).map_err(|e| SaveError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        } else {
            String::new()
        };

        let mut lines: Vec<&str> = Vec::new();
        for line in existing.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if !lines.contains(&line) {
                lines.push(line);
            }
        }
        if !lines.contains(&entry) {
            lines.push(entry);
        }

        std::fs::write(path, lines.join("\n")).map_err(|e| SaveError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
