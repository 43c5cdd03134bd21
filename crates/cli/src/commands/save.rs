//! Save command - append a block of text to one category's output file.

use tagsift_config::AppConfig;
use tagsift_engine::OutputStore;

pub async fn run(
    category: String,
    text: String,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if !config.categories.iter().any(|c| c.name == category) {
        return Err(format!(
            "No category named '{category}' (see `tagsift category list`)"
        )
        .into());
    }

    let store = OutputStore::new(&config.options.output_dir);
    let fast = fast || config.options.fast_save;

    if store.save(&category, &text, fast)? {
        println!("✅ Saved to {}", store.file_path(&category).display());
    } else {
        println!("⚠️  Nothing to save: the text is empty.");
    }

    Ok(())
}
