//! Init command - create the config file and the dictionary folders.

use std::path::Path;

use tagsift_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏷️  TagSift Setup");
    println!("=================\n");

    let config_path = AppConfig::default_path();

    let config = if config_path.exists() {
        println!("⚠️  Config already exists: {}", config_path.display());
        println!("   Leaving it untouched.\n");
        AppConfig::load_from(&config_path)?
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config: {}", config_path.display());
        AppConfig::default()
    };

    for category in &config.categories {
        let folder = Path::new(&category.path);
        if folder.is_dir() {
            println!("   Dictionary folder exists: {}", folder.display());
        } else {
            std::fs::create_dir_all(folder)?;
            println!("✅ Created dictionary folder: {}", folder.display());
        }
    }

    println!("\n🎉 Setup complete!\n");
    println!("📝 Next steps:");
    println!("   1. Drop .txt word lists into the dictionary folders");
    println!("   2. Classify a prompt: tagsift classify \"standing, red dress, smile\"");
    println!("   3. Or start an interactive session: tagsift session");
    println!();

    Ok(())
}
