//! gutenprep main entry point
//!
//! Command-line interface for the text preprocessing service: run the HTTP
//! server, or run the pipeline once from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use gutenprep::config::{load_config_with_hash, validate, Config};
use gutenprep::text::ngrams::{
    join_key, most_frequent, ngram_counts, probabilities, save_frequencies,
};
use gutenprep::text::{normalize_text, tokenize_chars};
use gutenprep::Preprocessor;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// gutenprep: Project Gutenberg text preprocessing
///
/// Fetches plain-text books, strips the Gutenberg boilerplate, and reports
/// word and sentence statistics with a short summary, either over HTTP or
/// directly on the command line.
#[derive(Parser, Debug)]
#[command(name = "gutenprep")]
#[command(version)]
#[command(about = "Project Gutenberg text preprocessing service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        /// Address to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Fetch and clean a .txt URL, print text, statistics and summary as JSON
    Clean {
        /// URL of a plain-text book
        url: String,
    },

    /// Print statistics of a file (or stdin) as JSON
    Analyze {
        /// Text file to analyze; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Build an n-gram frequency table from a file (or stdin)
    Ngrams {
        /// Text file to read; reads stdin when omitted
        file: Option<PathBuf>,

        /// N-gram size
        #[arg(short = 'n', long, default_value_t = 2)]
        size: usize,

        /// Count character n-grams instead of word n-grams
        #[arg(long)]
        chars: bool,

        /// Convert counts to probabilities with this Laplace smoothing
        #[arg(long)]
        smoothing: Option<f64>,

        /// Write the full table as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of entries to print when no output file is given
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            validate(&config)?;
            handle_serve(config).await
        }
        Command::Clean { url } => handle_clean(&config, &url).await,
        Command::Analyze { file } => handle_analyze(&config, file.as_deref()),
        Command::Ngrams {
            file,
            size,
            chars,
            smoothing,
            output,
            top,
        } => handle_ngrams(file.as_deref(), size, chars, smoothing, output.as_deref(), top),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so JSON printed on stdout stays machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gutenprep=info,warn"),
            1 => EnvFilter::new("gutenprep=debug,info"),
            2 => EnvFilter::new("gutenprep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles `serve`: runs the HTTP API until interrupted
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting text preprocessing service");
    tracing::info!("  GET  /             - Web interface");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST /api/clean    - Clean text from URL");
    tracing::info!("  POST /api/analyze  - Analyze raw text");

    let preprocessor = Preprocessor::new(&config)?;
    gutenprep::api::serve(&config.server, preprocessor).await?;
    Ok(())
}

/// Handles `clean`: one pass of the URL pipeline
async fn handle_clean(config: &Config, url: &str) -> anyhow::Result<()> {
    let preprocessor = Preprocessor::new(config)?;
    let processed = preprocessor.process_url(url).await?;

    println!("{}", serde_json::to_string_pretty(&processed)?);
    Ok(())
}

/// Handles `analyze`: statistics of a local text
fn handle_analyze(config: &Config, file: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(file)?;
    let preprocessor = Preprocessor::new(config)?;
    let statistics = preprocessor.analyze(&text);

    println!("{}", serde_json::to_string_pretty(&statistics)?);
    Ok(())
}

/// Handles `ngrams`: frequency table over normalized text
fn handle_ngrams(
    file: Option<&Path>,
    size: usize,
    chars: bool,
    smoothing: Option<f64>,
    output: Option<&Path>,
    top: usize,
) -> anyhow::Result<()> {
    if size == 0 {
        anyhow::bail!("n-gram size must be at least 1");
    }
    if smoothing.is_some_and(|s| s < 0.0 || !s.is_finite()) {
        anyhow::bail!("smoothing must be a non-negative number");
    }

    let normalized = normalize_text(&read_input(file)?);
    let tokens: Vec<String> = if chars {
        tokenize_chars(&normalized, true)
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        normalized.split_whitespace().map(str::to_string).collect()
    };

    let counts = ngram_counts(&tokens, size);
    tracing::info!(
        "Counted {} distinct {}-grams over {} tokens",
        counts.len(),
        size,
        tokens.len()
    );

    let probs = smoothing.map(|s| probabilities(&counts, s));

    if let Some(path) = output {
        match &probs {
            Some(probs) => save_frequencies(path, probs)?,
            None => save_frequencies(path, &counts)?,
        }
        println!("✓ Wrote {} n-grams to {}", counts.len(), path.display());
        return Ok(());
    }

    for (gram, count) in most_frequent(&counts, top) {
        match probs.as_ref().and_then(|p| p.get(&gram)) {
            Some(p) => println!("{}\t{}\t{:.6}", join_key(&gram), count, p),
            None => println!("{}\t{}", join_key(&gram), count),
        }
    }
    Ok(())
}

/// Reads a whole file, or stdin when no path is given
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
