//! Classify command - one-shot prompt classification.

use tagsift_config::AppConfig;
use tagsift_engine::{classify_prompt, OutputStore};

pub async fn run(
    prompt: String,
    fuzzy: bool,
    keep_underscores: bool,
    dedupe: bool,
    save: bool,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let options = super::effective_options(&config.options, fuzzy, keep_underscores, dedupe);
    let state = classify_prompt(&prompt, &config.categories, &options);

    super::print_buckets(&state.render_all());

    if save {
        let store = OutputStore::new(&config.options.output_dir);
        let fast = fast || config.options.fast_save;
        let saved = store.save_buckets(&state, fast)?;
        if saved.is_empty() {
            println!("  Nothing to save: every category bucket is empty.");
        } else {
            println!("  ✅ Saved: {}", saved.join(", "));
        }
        println!();
    }

    Ok(())
}
