//! Category: a named bucket definition backed by a dictionary folder.

use serde::{Deserialize, Serialize};

/// A user-defined category.
///
/// The name is unique across the configuration; it labels the bucket in
/// classification output and names the output file (`extract_<name>.txt`).
/// The path points at the folder whose `.txt` files form the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique display name
    pub name: String,

    /// Folder containing the category's word lists
    pub path: String,
}

impl Category {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
