//! Category command - list, add, and remove categories.

use std::path::Path;

use tagsift_config::AppConfig;

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("\n📂 Categories ({})\n", config.categories.len());
    for category in &config.categories {
        let marker = if Path::new(&category.path).is_dir() {
            ""
        } else {
            "  (dictionary folder missing)"
        };
        println!("  {} -> {}{}", category.name, category.path, marker);
    }
    println!();

    Ok(())
}

pub async fn add(name: String, path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::default_path();

    // Reload without environment overrides so no secret is written back.
    let mut config = AppConfig::load_from(&config_path)?;

    let path = path.unwrap_or_else(|| name.trim().to_string());
    config.add_category(&name, &path)?;
    config.save_to(&config_path)?;

    let folder = Path::new(path.trim());
    if !folder.is_dir() {
        std::fs::create_dir_all(folder)?;
        println!("✅ Created dictionary folder: {}", folder.display());
    }
    println!("✅ Added category '{}'", name.trim());

    Ok(())
}

pub async fn remove(name: String) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::default_path();

    let mut config = AppConfig::load_from(&config_path)?;
    let removed = config.remove_category(&name)?;
    config.save_to(&config_path)?;

    println!(
        "✅ Removed category '{}' (dictionary folder '{}' left on disk)",
        removed.name, removed.path
    );

    Ok(())
}
