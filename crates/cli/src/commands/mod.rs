//! Command implementations for the TagSift CLI.

pub mod category;
pub mod classify;
pub mod config_cmd;
pub mod init;
pub mod remote_cmd;
pub mod save;
pub mod session;

use tagsift_config::OptionsConfig;
use tagsift_core::RenderedBucket;
use tagsift_engine::ClassifyOptions;

/// Merge the config defaults with one-shot flag overrides. Flags only push a
/// setting one way: absent flags defer to the config file.
pub(crate) fn effective_options(
    defaults: &OptionsConfig,
    fuzzy: bool,
    keep_underscores: bool,
    dedupe: bool,
) -> ClassifyOptions {
    ClassifyOptions {
        fuzzy: defaults.fuzzy || fuzzy,
        replace_underscores: defaults.replace_underscores && !keep_underscores,
        dedupe: defaults.dedupe || dedupe,
    }
}

/// Print every bucket on its own aligned line, empty ones included, so the
/// full classification is visible at a glance.
pub(crate) fn print_buckets(rendered: &[RenderedBucket]) {
    let width = rendered.iter().map(|b| b.name.len()).max().unwrap_or(0);
    println!();
    for bucket in rendered {
        println!("  {:<width$} > {}", bucket.name, bucket.text);
    }
    println!();
}
