//! # TagSift Core
//!
//! Domain types, traits, and error definitions for the TagSift prompt-tag
//! sorter. This crate does no I/O of its own; it defines the value objects
//! (categories, tokens, buckets) that every other crate operates on, plus
//! the trait seam for the remote classifier.
//!
//! ## Design Philosophy
//!
//! State is explicit. A classification result is a [`BucketState`] value that
//! operations take as input and hand back as output; nothing lives in a
//! global. The remote endpoint is a trait so tests can script replies without
//! touching the network.

pub mod bucket;
pub mod category;
pub mod error;
pub mod remote;
pub mod token;

// Re-export key types at crate root for ergonomics
pub use bucket::{Bucket, BucketState, RenderedBucket, UNCLASSIFIED};
pub use category::Category;
pub use error::{RemoteError, SaveError};
pub use remote::{RemoteClassifier, RemoteReply, RemoteRequest};
pub use token::{PromptToken, extract_core_word};
