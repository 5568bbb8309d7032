//! Lexicon - Main entrypoint.
//!
//! Command line front end for the dictionary service: it loads the
//! configuration, opens the dictionary store, builds the search engine and
//! runs the requested command against them.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

use lexicon_lib::config::{ConfigLoader, LexiconConfig, LogConfig, ENV_PREFIX};
use lexicon_lib::error::{set_error_reporter, TracingErrorReporter};
use lexicon_lib::search::{PrefixSearchBackend, TrieSearchEngine};
use lexicon_lib::service::{spawn_periodic_rebuild, DictionaryService};
use lexicon_lib::store::JsonFileDictionaryStore;

/// Command line arguments for Lexicon.
#[derive(Parser, Debug)]
#[clap(name = "lexicon", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read prefixes from standard input and print completions (default)
    Interactive,

    /// Print the words starting with a prefix
    Search {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of results
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Add a word to the dictionary
    Add {
        /// The word to add
        word: String,

        /// Description of the word
        #[clap(default_value = "")]
        description: String,
    },

    /// Remove words from the dictionary
    Remove {
        /// The words to remove
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Show the dictionary entry for a word
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Show dictionary and search engine statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// standard error so command output stays machine readable.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(
            builder.json().finish().with(ErrorLayer::default()),
        )
    } else {
        tracing::subscriber::set_global_default(
            builder.pretty().finish().with(ErrorLayer::default()),
        )
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Interactive) {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => generate_config(&output),
        command => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(config.runtime.worker_threads)
                .thread_name(config.runtime.thread_name.clone())
                .enable_all()
                .build()
                .context("Failed to build async runtime")?;

            runtime.block_on(run(command, config))
        }
    }
}

fn generate_config(output: &Path) -> anyhow::Result<()> {
    info!("Generating default configuration");
    let toml = LexiconConfig::default().to_toml()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, toml).with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Opens the store, builds the engine, and runs a dictionary command.
async fn run(command: Command, config: LexiconConfig) -> anyhow::Result<()> {
    let store = JsonFileDictionaryStore::open(&config.store.path, config.store.create_if_missing)
        .await
        .with_context(|| format!("Failed to open dictionary at {}", config.store.path.display()))?;

    let engine = Arc::new(TrieSearchEngine::new(config.search.clone()));
    let service = Arc::new(
        DictionaryService::start(Arc::new(store), engine)
            .await
            .context("Failed to build search engine")?,
    );

    match command {
        Command::Search { prefix, limit } => {
            for word in service.search(&prefix, limit)? {
                println!("{word}");
            }
        }
        Command::Add { word, description } => {
            let entry = service.add_word(&word, &description).await?;
            println!("Added '{}' (id {})", entry.word, entry.id);
        }
        Command::Remove { words } => {
            let deleted = service.delete_words(&words).await?;
            println!("Deleted {} word(s): {}", deleted.len(), deleted.join(", "));
        }
        Command::Lookup { word } => match service.lookup(&word).await? {
            Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
            None => println!("'{word}' is not in the dictionary"),
        },
        Command::Stats => {
            let stats = service.search_backend().stats();
            let entries = service.all_entries().await?.len();
            println!("entries:      {entries}");
            println!("indexed:      {}", stats.words);
            println!("trie nodes:   {}", stats.nodes);
        }
        Command::Interactive => interactive(service, &config).await?,
        // Handled in main without opening the store
        Command::Validate | Command::GenConfig { .. } => {}
    }

    Ok(())
}

/// Autocomplete prompt: one prefix per line, completions printed back.
async fn interactive(service: Arc<DictionaryService>, config: &LexiconConfig) -> anyhow::Result<()> {
    let rebuild = config
        .search
        .rebuild_interval()
        .and_then(|interval| spawn_periodic_rebuild(service.clone(), interval));

    info!("Ready for prefixes, one per line");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match service.search(line.trim(), None) {
            Ok(words) if words.is_empty() => println!("(no matches)"),
            Ok(words) => println!("{}", words.join("  ")),
            Err(e) => error!("Search failed: {}", e),
        }
    }

    if let Some(handle) = rebuild {
        handle.abort();
    }
    Ok(())
}
