//! jira-complete host harness
//!
//! A minimal stand-in for an editor plugin host: loads a JSON settings
//! file, runs plugin activation once, and prints the candidates each
//! registered source offers.

use anyhow::{Context, Result};
use clap::Parser;
use jira_complete_core::models::CompletionItem;
use jira_complete_source::{activate, CompletionSource, ConfigStore, Notifier, SourceRegistry};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "jira-complete")]
#[command(about = "Fetch unresolved JIRA issues and print completion candidates", long_about = None)]
struct Args {
    /// Path to a JSON settings file with a top-level "jira" object
    #[arg(short, long, default_value = "jira-complete.json")]
    config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print candidates as JSON instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

/// Settings store backed by a JSON file, addressed with the same dotted
/// keys an editor host uses for its configuration.
struct FileConfigStore {
    root: Value,
}

impl FileConfigStore {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let root = serde_json::from_str(&content)?;
        Ok(Self { root })
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str().map(str::to_string)
    }
}

/// Notifications go straight to stderr.
struct TermNotifier;

impl Notifier for TermNotifier {
    fn warning(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

#[derive(Default)]
struct VecRegistry {
    sources: Vec<CompletionSource>,
}

impl SourceRegistry for VecRegistry {
    fn register(&mut self, source: CompletionSource) {
        self.sources.push(source);
    }
}

fn print_items(items: &[CompletionItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}\t{}", item.word, item.abbr);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_ansi(false)
        .init();

    let store = FileConfigStore::load(&args.config)
        .with_context(|| format!("reading settings from {}", args.config.display()))?;
    let notifier = TermNotifier;
    let mut registry = VecRegistry::default();

    activate(&store, &notifier, &mut registry).await;

    if registry.sources.is_empty() {
        tracing::warn!("no completion source registered");
        return Ok(());
    }

    for source in &registry.sources {
        tracing::info!("source '{}' registered", source.name);
        print_items(&source.provider.complete(), args.json)?;
    }

    Ok(())
}
