use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use text_common::config::{ConfigError, PurifyMode, TextConfig};
use text_common::reporting::report_error;
use text_common::{dedupe, purify_with_mode, shorten, Tokenizer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "text-tool")]
#[command(about = "Purify, shorten, de-duplicate and tokenize text for search indexing")]
struct Cli {
    /// Config file (default: ~/.config/text-tool/config.toml)
    #[arg(long, short, global = true)]
    config: Option<String>,
    /// Two-letter language code selecting the stop-word list
    #[arg(long, short, global = true)]
    language: Option<String>,
    /// Override the configured purify mode
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,
    /// Log pipeline details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Corrected,
    Compatible,
}

impl From<ModeArg> for PurifyMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Corrected => PurifyMode::Corrected,
            ModeArg::Compatible => PurifyMode::Compatible,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the purified form of TEXT (or stdin)
    Purify {
        text: Option<String>,
        /// Separator between words (default: configured purify_separator)
        #[arg(long, short)]
        separator: Option<String>,
    },
    /// Print the search token string for FIELDS (or each stdin line)
    Tokenize { fields: Vec<String> },
    /// Shorten TEXT (or stdin) to a character or word budget
    Shorten {
        text: Option<String>,
        #[arg(long, short = 'n', allow_negative_numbers = true)]
        limit: i64,
        /// Count words instead of bytes
        #[arg(long, short)]
        words: bool,
        /// Append "..." when words were dropped
        #[arg(long, short)]
        ellipsis: bool,
    },
    /// Print VALUES without duplicates, one per line
    Dedupe {
        values: Vec<String>,
        /// Treat values as 64-bit integers
        #[arg(long)]
        ints: bool,
    },
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("text-tool");
    p.push("config.toml");
    Some(p)
}

fn load_config(cli: &Cli) -> Result<TextConfig, ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => TextConfig::from_toml_str(&fs::read_to_string(path)?)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => TextConfig::from_toml_str(&fs::read_to_string(path)?)?,
            None => TextConfig::default(),
        },
    };
    if let Some(language) = &cli.language {
        config = config.with_language(language.as_str());
    }
    if let Some(mode) = cli.mode {
        config = config.with_purify_mode(mode.into());
    }
    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn text_or_stdin(text: Option<String>) -> Result<String, std::io::Error> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    tracing::debug!(
        language = %config.language,
        mode = ?config.purify_mode,
        "configuration loaded"
    );

    match cli.command {
        Commands::Purify { text, separator } => {
            let text = text_or_stdin(text)?;
            let separator = separator.unwrap_or_else(|| config.purify_separator.clone());
            println!("{}", purify_with_mode(&text, &separator, config.purify_mode));
        }
        Commands::Tokenize { fields } => {
            let fields = if fields.is_empty() {
                text_or_stdin(None)?.lines().map(str::to_string).collect()
            } else {
                fields
            };
            let tokenizer = Tokenizer::from_config(config);
            println!("{}", tokenizer.tokenize(fields.as_slice()));
        }
        Commands::Shorten {
            text,
            limit,
            words,
            ellipsis,
        } => {
            let text = text_or_stdin(text)?;
            println!("{}", shorten(&text, limit, words, ellipsis));
        }
        Commands::Dedupe { values, ints } => {
            if ints {
                let parsed = values
                    .iter()
                    .map(|v| v.parse::<i64>())
                    .collect::<Result<Vec<_>, _>>()?;
                for v in dedupe(&parsed) {
                    println!("{}", v);
                }
            } else {
                for v in dedupe(&values) {
                    println!("{}", v);
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli).inspect_err(|e| report_error("text-tool", e.as_ref()))
}
