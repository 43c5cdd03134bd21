//! Configuration loading, validation, and management for TagSift.
//!
//! Loads configuration from `tagsift.toml` in the working directory, with an
//! environment variable override for the remote API key. The whole tool is
//! working-directory oriented: the config file, the dictionary folders it
//! names, and the output files all live beside each other.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tagsift_core::{Category, UNCLASSIFIED};

/// File name of the configuration store, resolved in the working directory.
pub const CONFIG_FILE_NAME: &str = "tagsift.toml";

/// The root configuration structure.
///
/// Maps directly to `tagsift.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Categories in classification order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Remote classification settings (absent = remote disabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,

    /// Session flag defaults
    #[serde(default)]
    pub options: OptionsConfig,
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Poses", "Poses"),
        Category::new("Clothes", "Clothes"),
        Category::new("Others", "Others"),
    ]
}

/// Connection settings for the remote classifier.
///
/// Every field is optional in the file; the remote crate validates that
/// endpoint, key, and model are all present before sending anything.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of an OpenAI-compatible endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key (the `TAGSIFT_API_KEY` environment variable fills this
    /// when the file keeps no secret)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name (e.g., "gpt-4o-mini")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Override for the built-in sorting instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

/// Default values for the session flags, overridable per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Bidirectional substring matching (unreliable: short entries over-match)
    #[serde(default)]
    pub fuzzy: bool,

    /// Rewrite `_` to ` ` in dictionary entries at load time
    #[serde(default = "default_true")]
    pub replace_underscores: bool,

    /// Drop repeated raw tokens within a bucket
    #[serde(default)]
    pub dedupe: bool,

    /// Append to output files without deduplicating lines
    #[serde(default)]
    pub fast_save: bool,

    /// Directory the `extract_<name>.txt` files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_true() -> bool {
    true
}
fn default_output_dir() -> String {
    ".".into()
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            fuzzy: false,
            replace_underscores: true,
            dedupe: false,
            fast_save: false,
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `tagsift.toml` in the working directory.
    ///
    /// When the file carries a `[remote]` table without an `api_key`, the
    /// `TAGSIFT_API_KEY` environment variable fills it.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::default_path())?;

        if let Some(remote) = config.remote.as_mut() {
            if remote.api_key.is_none() {
                remote.api_key = std::env::var("TAGSIFT_API_KEY").ok();
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write this configuration to a specific file path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// The default config file path (`tagsift.toml` in the working directory).
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        for (i, category) in self.categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "category names must not be empty".into(),
                ));
            }
            if category.path.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "category '{}' has an empty path",
                    category.name
                )));
            }
            if category.name == UNCLASSIFIED {
                return Err(ConfigError::ValidationError(format!(
                    "'{UNCLASSIFIED}' is a reserved bucket name"
                )));
            }
            if self.categories[..i].iter().any(|c| c.name == category.name) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate category name '{}'",
                    category.name
                )));
            }
        }
        Ok(())
    }

    /// Append a category after validating name and path.
    pub fn add_category(&mut self, name: &str, path: &str) -> Result<(), ConfigError> {
        let name = name.trim();
        let path = path.trim();
        if name.is_empty() || path.is_empty() {
            return Err(ConfigError::ValidationError(
                "category name and path must not be empty".into(),
            ));
        }
        if name == UNCLASSIFIED {
            return Err(ConfigError::ValidationError(format!(
                "'{UNCLASSIFIED}' is a reserved bucket name"
            )));
        }
        if self.categories.iter().any(|c| c.name == name) {
            return Err(ConfigError::ValidationError(format!(
                "a category named '{name}' already exists"
            )));
        }
        self.categories.push(Category::new(name, path));
        Ok(())
    }

    /// Remove a category by name, returning it.
    pub fn remove_category(&mut self, name: &str) -> Result<Category, ConfigError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))?;
        Ok(self.categories.remove(index))
    }

    /// The category names in classification order.
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            remote: None,
            options: OptionsConfig::default(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Failed to write config file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("No category named '{0}'")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.category_names(), ["Poses", "Clothes", "Others"]);
        assert!(config.options.replace_underscores);
        assert!(!config.options.fuzzy);
        assert!(!config.options.fast_save);
        assert!(config.remote.is_none());
    }

    #[test]
    fn config_roundtrip_toml() {
        let mut config = AppConfig::default();
        config.remote = Some(RemoteConfig {
            endpoint: Some("https://api.example.com/v1".into()),
            api_key: Some("sk-test".into()),
            model: Some("gpt-4o-mini".into()),
            system_prompt: None,
        });
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.categories, config.categories);
        assert_eq!(
            parsed.remote.as_ref().and_then(|r| r.model.clone()),
            Some("gpt-4o-mini".into())
        );
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/tagsift.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().categories.len(), 3);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "categories = \"not a list\"").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.add_category("Emotions", "Emotions").unwrap();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.category_names(), ["Poses", "Clothes", "Others", "Emotions"]);
    }

    #[test]
    fn duplicate_category_name_rejected() {
        let mut config = AppConfig::default();
        config.categories.push(Category::new("Poses", "elsewhere"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn reserved_bucket_name_rejected() {
        let mut config = AppConfig::default();
        assert!(config.add_category(UNCLASSIFIED, "somewhere").is_err());
        config.categories.push(Category::new(UNCLASSIFIED, "somewhere"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn add_category_validates_name_and_path() {
        let mut config = AppConfig::default();
        assert!(config.add_category("", "path").is_err());
        assert!(config.add_category("Name", "  ").is_err());
        assert!(config.add_category("Poses", "path").is_err());

        config.add_category(" Emotions ", " Emotions ").unwrap();
        let added = config.categories.last().unwrap();
        assert_eq!(added.name, "Emotions");
        assert_eq!(added.path, "Emotions");
    }

    #[test]
    fn remove_category_by_name() {
        let mut config = AppConfig::default();
        let removed = config.remove_category("Clothes").unwrap();
        assert_eq!(removed.path, "Clothes");
        assert_eq!(config.category_names(), ["Poses", "Others"]);
        assert!(matches!(
            config.remove_category("Clothes"),
            Err(ConfigError::UnknownCategory(_))
        ));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("Poses"));
        assert!(toml_str.contains("replace_underscores"));
    }

    #[test]
    fn remote_debug_redacts_key() {
        let remote = RemoteConfig {
            endpoint: Some("https://api.example.com/v1".into()),
            api_key: Some("sk-secret".into()),
            model: None,
            system_prompt: None,
        };
        let rendered = format!("{remote:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
