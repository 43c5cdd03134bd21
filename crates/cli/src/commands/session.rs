//! Session command - interactive classify / move / save loop.
//!
//! The session holds one set of buckets across commands. Pasting a prompt
//! reclassifies from scratch; `move` and `save` operate on the current
//! buckets, so a classify -> move -> save round trip never re-reads the
//! prompt in between.

use std::io::Write as _;

use tagsift_config::AppConfig;
use tagsift_core::{BucketState, RemoteClassifier};
use tagsift_engine::{classify_prompt, move_tokens, ClassifyOptions, MoveSelection, OutputStore};
use tagsift_remote::{request_from_config, OpenAiCompatClassifier};
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!();
    println!("  ╔══════════════════════════════════════════╗");
    println!("  ║        TagSift Interactive Session       ║");
    println!("  ╚══════════════════════════════════════════╝");
    println!();
    println!("  Categories: {}", config.category_names().join(", "));
    println!("  Output dir: {}", config.options.output_dir);
    let remote_model = config
        .remote
        .as_ref()
        .and_then(|r| r.model.clone())
        .unwrap_or_else(|| "disabled".to_string());
    println!("  Remote:     {remote_model}");
    println!();
    println!("  Paste a prompt to classify it. 'help' lists commands,");
    println!("  'exit' or Ctrl+D quits.");
    println!();

    let mut session = Session {
        options: ClassifyOptions {
            fuzzy: config.options.fuzzy,
            replace_underscores: config.options.replace_underscores,
            dedupe: config.options.dedupe,
        },
        fast_save: config.options.fast_save,
        config,
        state: None,
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("  tagsift > ");
        std::io::stdout().flush()?;

        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
                    break;
                }
                if let Err(e) = session.handle(line).await {
                    eprintln!("  [Error] {e}");
                }
            }
            Ok(None) => break, // EOF
            Err(e) => {
                eprintln!("  [Error] Failed to read input: {e}");
                break;
            }
        }
    }

    println!();
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}

struct Session {
    config: AppConfig,
    options: ClassifyOptions,
    fast_save: bool,
    state: Option<BucketState>,
}

impl Session {
    async fn handle(&mut self, line: &str) -> Result<(), Box<dyn std::error::Error>> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => self.help(),
            "show" => self.show(),
            "categories" => self.categories(),
            "flags" => self.flags(),
            "classify" => self.classify(rest),
            "move" => self.do_move(rest),
            "save" => self.save()?,
            "remote" => self.remote().await?,
            "fuzzy" | "underscores" | "dedupe" | "fast" => self.toggle(command, rest),
            // Anything else is a prompt.
            _ => self.classify(line),
        }

        Ok(())
    }

    fn help(&self) {
        println!();
        println!("  Commands:");
        println!("    <prompt>                     Classify a comma-separated prompt");
        println!("    classify <prompt>            Same, explicit form");
        println!("    show                         Reprint the current buckets");
        println!("    move <category> <tokens...>  Move tokens into a bucket");
        println!("    save                         Save every non-empty category bucket");
        println!("    remote                       Ask the remote model about Unclassified");
        println!("    categories                   List categories");
        println!("    flags                        Show the option flags");
        println!("    fuzzy | underscores | dedupe | fast  [on|off]");
        println!("                                 Toggle an option for this session");
        println!("    exit                         Leave the session");
        println!();
    }

    fn show(&self) {
        match self.state.as_ref() {
            Some(state) => super::print_buckets(&state.render_all()),
            None => println!("  Nothing classified yet. Paste a prompt first."),
        }
    }

    fn categories(&self) {
        println!("  {}", self.config.category_names().join(", "));
    }

    fn flags(&self) {
        println!(
            "  fuzzy={} underscores->spaces={} dedupe={} fast_save={}",
            self.options.fuzzy, self.options.replace_underscores, self.options.dedupe, self.fast_save
        );
    }

    fn toggle(&mut self, flag: &str, rest: &str) {
        let target = match rest {
            "on" => Some(true),
            "off" => Some(false),
            "" => None,
            _ => {
                println!("  Usage: {flag} [on|off]");
                return;
            }
        };

        let slot = match flag {
            "fuzzy" => &mut self.options.fuzzy,
            "underscores" => &mut self.options.replace_underscores,
            "dedupe" => &mut self.options.dedupe,
            _ => &mut self.fast_save,
        };
        *slot = target.unwrap_or(!*slot);

        self.flags();
        println!("  Changes apply to the next classify or save.");
    }

    fn classify(&mut self, prompt: &str) {
        if prompt.is_empty() {
            println!("  Usage: classify <prompt>");
            return;
        }

        let state = classify_prompt(prompt, &self.config.categories, &self.options);
        super::print_buckets(&state.render_all());
        self.state = Some(state);
    }

    fn do_move(&mut self, rest: &str) {
        let Some((destination, token_list)) = rest.split_once(char::is_whitespace) else {
            println!("  Usage: move <category> <token>[, <token>...]");
            return;
        };

        let tokens: Vec<String> = token_list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        if tokens.is_empty() {
            println!("  Usage: move <category> <token>[, <token>...]");
            return;
        }

        let Some(state) = self.state.as_mut() else {
            println!("  Nothing classified yet. Paste a prompt first.");
            return;
        };
        if state.get(destination).is_none() {
            let names: Vec<String> = state.buckets.iter().map(|b| b.name.clone()).collect();
            println!("  No bucket named '{destination}'. Buckets: {}", names.join(", "));
            return;
        }

        let selections: Vec<MoveSelection> = state
            .buckets
            .iter()
            .filter(|b| b.name != destination)
            .map(|b| MoveSelection {
                bucket: b.name.clone(),
                tokens: tokens.clone(),
            })
            .collect();

        let rendered = move_tokens(state, Some(destination), &selections);
        super::print_buckets(&rendered);
    }

    fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(state) = self.state.as_ref() else {
            println!("  Nothing classified yet. Paste a prompt first.");
            return Ok(());
        };

        let store = OutputStore::new(&self.config.options.output_dir);
        let saved = store.save_buckets(state, self.fast_save)?;
        if saved.is_empty() {
            println!("  Nothing to save: every category bucket is empty.");
        } else {
            println!("  ✅ Saved: {}", saved.join(", "));
        }

        Ok(())
    }

    async fn remote(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(state) = self.state.as_ref() else {
            println!("  Nothing classified yet. Paste a prompt first.");
            return Ok(());
        };
        let leftovers = state
            .unclassified()
            .map(|bucket| bucket.render())
            .unwrap_or_default();
        if leftovers.is_empty() {
            println!("  ✅ Nothing unclassified.");
            return Ok(());
        }

        let Some(remote) = self.config.remote.as_ref() else {
            println!("  Remote classification is not configured. Add a [remote] table");
            println!(
                "  to {} and set TAGSIFT_API_KEY.",
                AppConfig::default_path().display()
            );
            return Ok(());
        };

        let classifier = OpenAiCompatClassifier::from_config(remote)?;
        let request = request_from_config(remote, &self.config.categories, leftovers)?;

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
}
