//! Manual reassignment: moving tokens between buckets on user command.
//!
//! The session holds one `BucketState` across interactions; a move pulls the
//! selected tokens out of their source buckets and appends them to a chosen
//! destination. Malformed moves (no destination, unknown destination, empty
//! selection) leave the state untouched.

use tagsift_core::{BucketState, RenderedBucket};
use tracing::debug;

/// Tokens the user selected inside one source bucket.
#[derive(Debug, Clone)]
pub struct MoveSelection {
    pub bucket: String,
    pub tokens: Vec<String>,
}

/// Move the selected tokens into the destination bucket.
///
/// For every source bucket with selections: every occurrence of each selected
/// token is removed, then appended to the destination in source order unless
/// the destination already holds it. A token the source does not contain is
/// not moved at all, so repeating a move is harmless. Returns the rendering
/// of every bucket after the move.
pub fn move_tokens(
    state: &mut BucketState,
    destination: Option<&str>,
    selections: &[MoveSelection],
) -> Vec<RenderedBucket> {
    let Some(dest) = destination.map(str::trim).filter(|d| !d.is_empty()) else {
        debug!("Move skipped: no destination chosen");
        return state.render_all();
    };
    if state.get(dest).is_none() {
        debug!(destination = dest, "Move skipped: unknown destination bucket");
        return state.render_all();
    }

    let mut appended = 0usize;
    for selection in selections {
        if selection.tokens.is_empty() {
            continue;
        }
        let Some(source) = state.get_mut(&selection.bucket) else {
            debug!(bucket = %selection.bucket, "Move skipped an unknown source bucket");
            continue;
        };

        let mut moved = Vec::new();
        source.tokens.retain(|token| {
            if selection.tokens.iter().any(|t| t == token) {
                moved.push(token.clone());
                false
            } else {
                true
            }
        });
        if moved.is_empty() {
            continue;
        }

        // The destination exists: checked above, and moves never remove buckets.
        if let Some(dest_bucket) = state.get_mut(dest) {
            for token in moved {
                if !dest_bucket.contains(&token) {
                    dest_bucket.tokens.push(token);
                    appended += 1;
                }
            }
        }
    }

    debug!(destination = dest, appended, "Move applied");
    state.render_all()
}
