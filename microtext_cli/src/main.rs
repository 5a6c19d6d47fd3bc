//! # Micro-text CLI
//!

use clap::Parser;
use microtext_cli::{level_filter, render, InputSource, OutputFormat};
use microtext_tokenizer::config::runtime::{parse_log_level, RuntimeConfig};
use microtext_tokenizer::{lexical, log_info, logging, Tokenizer};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "microtext")]
#[command(version, about = "Tokenize chat messages, tweets and other micro-text", long_about = None)]
struct Args {
    /// Message to tokenize
    text: Option<String>,

    /// Read messages from a file, one per line
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Read messages from standard input, one per line
    #[arg(long, conflicts_with_all = ["text", "file"])]
    stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tokens)]
    format: OutputFormat,

    /// Runtime configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum log level: error, warning, info or debug
    #[arg(long)]
    log_level: Option<String>,

    /// Print logging and build diagnostics to stderr before tokenizing
    #[arg(long)]
    diagnostics: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(level) = &args.log_level {
        config.logging.min_log_level =
            parse_log_level(level).ok_or_else(|| format!("Unknown log level: {}", level))?;
    }

    env_logger::Builder::from_default_env()
        .filter_level(level_filter(config.logging.min_log_level))
        .init();

    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    lexical::validate_tokenization()?;
    if args.diagnostics {
        eprintln!("{}", logging::get_system_diagnostics());
    }
    log_info!("Micro-text tokenizer ready",
        "profile" => microtext_tokenizer::config::build_info::profile()
    );

    let source = InputSource::from_args(args.text, args.file, args.stdin)?;
    let messages = source.read_messages()?;
    log::info!("Tokenizing {} message(s)", messages.len());

    for message in &messages {
        let mut tokenizer = Tokenizer::with_preferences(Some(message), config.tokenizer.clone());
        let tokens = tokenizer.tokenize();
        log::debug!("{} tokens from {} chars", tokens.len(), message.chars().count());
        println!("{}", render::render(message, tokens, args.format)?);
    }

    Ok(())
}
