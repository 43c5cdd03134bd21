//! TagSift CLI entry point.
//!
//! Subcommands:
//! - `init`     - Create the config file and dictionary folders
//! - `classify` - Classify a prompt and print every bucket
//! - `session`  - Interactive classify / move / save loop
//! - `save`     - Append text to one category's output file
//! - `remote`   - Send the unclassified leftovers to the remote model
//! - `category` - List, add, or remove categories
//! - `config`   - Show, locate, or validate the configuration

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tagsift")]
#[command(about = "Prompt tag classifier: split, sort, and save comma-separated tags")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config file and dictionary folders
    Init,

    /// Classify a comma-separated prompt and print every bucket
    Classify {
        /// The prompt to classify
        prompt: String,

        /// Also match by substring in both directions (can over-match)
        #[arg(long)]
        fuzzy: bool,

        /// Keep underscores in dictionary entries instead of turning them into spaces
        #[arg(long)]
        keep_underscores: bool,

        /// Drop repeated tokens inside each bucket
        #[arg(long)]
        dedupe: bool,

        /// Save every non-empty category bucket after classifying
        #[arg(short, long)]
        save: bool,

        /// Append to output files without deduplicating lines
        #[arg(long)]
        fast: bool,
    },

    /// Start an interactive classify / move / save session
    Session,

    /// Append a block of text to one category's output file
    Save {
        /// The category to save under
        category: String,

        /// The text to save
        text: String,

        /// Append without deduplicating lines
        #[arg(long)]
        fast: bool,
    },

    /// Classify a prompt and ask the remote model about the leftovers
    Remote {
        /// The prompt to classify
        prompt: String,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List configured categories and their dictionary folders
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,

        /// Dictionary folder for the category (defaults to the name)
        path: Option<String>,
    },

    /// Remove a category by name
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Validate the configuration and dictionary folders
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init => commands::init::run().await?,
        Commands::Classify {
            prompt,
            fuzzy,
            keep_underscores,
            dedupe,
            save,
            fast,
        } => commands::classify::run(prompt, fuzzy, keep_underscores, dedupe, save, fast).await?,
        Commands::Session => commands::session::run().await?,
        Commands::Save {
            category,
            text,
            fast,
        } => commands::save::run(category, text, fast).await?,
        Commands::Remote { prompt } => commands::remote_cmd::run(prompt).await?,
        Commands::Category { action } => match action {
            CategoryAction::List => commands::category::list().await?,
            CategoryAction::Add { name, path } => commands::category::add(name, path).await?,
            CategoryAction::Remove { name } => commands::category::remove(name).await?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
