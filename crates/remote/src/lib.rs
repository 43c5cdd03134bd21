//! Remote classification backends for TagSift.
//!
//! All backends implement the `tagsift_core::RemoteClassifier` trait.
//! The instruction module assembles the request a backend sends.

pub mod instruction;
pub mod openai_compat;

pub use instruction::{default_system_prompt, request_from_config};
pub use openai_compat::OpenAiCompatClassifier;
