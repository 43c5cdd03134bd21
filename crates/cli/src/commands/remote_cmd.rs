//! Remote command - classify locally, then ask the remote model about the
//! tokens that stayed unclassified.

use tagsift_config::AppConfig;
use tagsift_core::RemoteClassifier;
use tagsift_engine::classify_prompt;
use tagsift_remote::{request_from_config, OpenAiCompatClassifier};

pub async fn run(prompt: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let Some(remote) = config.remote.as_ref() else {
        eprintln!();
        eprintln!("  ERROR: Remote classification is not configured!");
        eprintln!();
        eprintln!("  Add a [remote] table to {}:", AppConfig::default_path().display());
        eprintln!();
        eprintln!("    [remote]");
        eprintln!("    endpoint = \"https://api.openai.com/v1\"");
        eprintln!("    model = \"gpt-4o-mini\"");
        eprintln!();
        eprintln!("  Then set the API key:");
        eprintln!("    export TAGSIFT_API_KEY='sk-...'");
        eprintln!();
        return Err("Remote classification not configured. See message above.".into());
    };

    // Validate credentials before classifying anything.
    let classifier = OpenAiCompatClassifier::from_config(remote)?;

    let options = super::effective_options(&config.options, false, false, false);
    let state = classify_prompt(&prompt, &config.categories, &options);
    super::print_buckets(&state.render_all());

    let leftovers = state
        .unclassified()
        .map(|bucket| bucket.render())
        .unwrap_or_default();
    if leftovers.is_empty() {
        println!("  ✅ Nothing unclassified, no remote call needed.");
        println!();
        return Ok(());
    }

    let request = request_from_config(remote, &config.categories, leftovers)?;

    eprint!("  Thinking...");
    let reply = classifier.classify(request).await;
    eprint!("\r              \r");

    let reply = reply?;
    println!("  {} >", reply.model);
    for line in reply.content.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
