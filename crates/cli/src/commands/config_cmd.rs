//! Config command - show, locate, and validate the configuration.

use std::path::Path;

use tagsift_config::AppConfig;

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::default_path().display());
    Ok(())
}

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...\n");

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");
            config
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    };

    let mut warnings = Vec::new();

    if config.categories.is_empty() {
        warnings.push("No categories configured, everything will stay unclassified".to_string());
    }
    for category in &config.categories {
        if !Path::new(&category.path).is_dir() {
            warnings.push(format!(
                "Dictionary folder missing for '{}': {} (run `tagsift init`)",
                category.name, category.path
            ));
        }
    }

    match config.remote.as_ref() {
        None => {
            println!("   Remote classification: disabled (no [remote] table)");
        }
        Some(remote) => {
            if remote.endpoint.as_deref().unwrap_or("").is_empty() {
                warnings.push("Remote endpoint is not set".to_string());
            }
            if remote.model.as_deref().unwrap_or("").is_empty() {
                warnings.push("Remote model is not set".to_string());
            }
            if remote.api_key.as_deref().unwrap_or("").is_empty() {
                warnings.push(
                    "No API key found (set TAGSIFT_API_KEY or [remote] api_key)".to_string(),
                );
            }
        }
    }

    if warnings.is_empty() {
        println!("   ✅ All checks passed");
    } else {
        for warning in &warnings {
            println!("   ⚠️  {warning}");
        }
    }

    println!();
    println!("   Categories: {}", config.category_names().join(", "));
    println!("   Output dir: {}", config.options.output_dir);
    println!(
        "   Options:    fuzzy={} underscores->spaces={} dedupe={} fast_save={}",
        config.options.fuzzy,
        config.options.replace_underscores,
        config.options.dedupe,
        config.options.fast_save
    );
    println!();

    Ok(())
}
