//! Request assembly: the instruction a remote model receives.
//!
//! The system instruction tells the model which categories exist and what
//! shape to answer in. A `[remote] system_prompt` in the config replaces the
//! built-in instruction wholesale.

use tagsift_config::RemoteConfig;
use tagsift_core::{Category, RemoteError, RemoteRequest, UNCLASSIFIED};

/// The built-in sorting instruction for the configured categories.
pub fn default_system_prompt(categories: &[Category]) -> String {
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    format!(
        "You sort Stable Diffusion prompt tags into categories. \
         The categories are: {}. \
         Answer with one line per category in the form `Category: tag, tag`, \
         assigning every tag you are given to the best-fitting category. \
         Use `{UNCLASSIFIED}` for tags that fit nowhere. Do not invent tags.",
        names.join(", ")
    )
}

/// Build one classification request from the `[remote]` config table.
///
/// The model must be configured; the system instruction falls back to the
/// built-in one when no override is set.
pub fn request_from_config(
    remote: &RemoteConfig,
    categories: &[Category],
    content: impl Into<String>,
) -> Result<RemoteRequest, RemoteError> {
    let model = remote
        .model
        .clone()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| RemoteError::NotConfigured("model".into()))?;

    let system_prompt = remote
        .system_prompt
        .clone()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| default_system_prompt(categories));

    Ok(RemoteRequest {
        model,
        system_prompt,
        content: content.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_lists_every_category() {
        let categories = vec![
            Category::new("Poses", "Poses"),
            Category::new("Clothes", "Clothes"),
        ];
        let prompt = default_system_prompt(&categories);
        assert!(prompt.contains("Poses, Clothes"));
        assert!(prompt.contains(UNCLASSIFIED));
    }

    #[test]
    fn request_uses_the_configured_override() {
        let remote = RemoteConfig {
            endpoint: Some("https://api.example.com/v1".into()),
            api_key: Some("sk-test".into()),
            model: Some("gpt-4o-mini".into()),
            system_prompt: Some("custom instruction".into()),
        };
        let request = request_from_config(&remote, &[], "mystery_tag").unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.system_prompt, "custom instruction");
        assert_eq!(request.content, "mystery_tag");
    }

    #[test]
    fn request_falls_back_to_the_builtin_instruction() {
        let remote = RemoteConfig {
            model: Some("gpt-4o-mini".into()),
            ..RemoteConfig::default()
        };
        let categories = vec![Category::new("Poses", "Poses")];
        let request = request_from_config(&remote, &categories, "tag").unwrap();
        assert!(request.system_prompt.contains("Poses"));
    }

    #[test]
    fn missing_model_aborts_before_any_request() {
        let remote = RemoteConfig::default();
        let err = request_from_config(&remote, &[], "tag").unwrap_err();
        assert!(matches!(err, RemoteError::NotConfigured(_)));
        assert!(err.to_string().contains("model"));
    }
}
