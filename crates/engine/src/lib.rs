//! The TagSift processing engine.
//!
//! Four components, leaf to root: dictionary loading, prompt classification,
//! bucket reassignment, and result persistence. Each handler takes explicit
//! state in and hands explicit state back; nothing here touches globals or a
//! presentation layer.

pub mod classify;
pub mod dictionary;
pub mod persist;
pub mod reassign;

pub use classify::{ClassifyOptions, classify_prompt, classify_tokens};
pub use dictionary::{CategoryDictionary, DictionarySet, load_category_words};
pub use persist::{OUTPUT_FILE_PREFIX, OutputStore, normalize_save_text};
pub use reassign::{MoveSelection, move_tokens};
