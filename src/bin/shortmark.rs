//! Command-line interface for shortmark
//! Converts shorthand files into markup or component templates, and dumps their element trees.
//!
//! Usage:
//!   shortmark convert [`<path>`] [--to `<format>`] [--error-text]  - Render a shorthand file
//!   shortmark inspect [`<path>`] [--format `<format>`]             - Dump the element tree
//!   shortmark list-formats                                      - List available formats
//!
//! A missing path, or `-`, reads from stdin.

use clap::{Parser, Subcommand};
use shortmark::shortmark::config::{ConfigError, Loader, ShortmarkConfig};
use shortmark::shortmark::error::FormatError;
use shortmark::FormatRegistry;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shortmark",
    version,
    about = "Convert indentation-based markup shorthand",
    arg_required_else_help = true
)]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Log pipeline stages to stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a shorthand file
    Convert {
        /// Path to the shorthand file ("-" for stdin)
        path: Option<PathBuf>,

        /// Output format (e.g. 'markup', 'html', 'component-template', 'jsx')
        #[arg(long, short = 't')]
        to: Option<String>,

        /// On a parse error, print the error text to stdout and exit successfully
        #[arg(long)]
        error_text: bool,
    },
    /// Dump the element tree of a shorthand file
    Inspect {
        /// Path to the shorthand file ("-" for stdin)
        path: Option<PathBuf>,

        /// Dump format ('ast-treeviz', 'ast-json', 'ast-yaml')
        #[arg(long, short = 'f', default_value = "ast-treeviz")]
        format: String,
    },
    /// List available formats
    ListFormats,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref()).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_defaults();

    match cli.command {
        Commands::Convert {
            path,
            to,
            error_text,
        } => handle_convert_command(&registry, &config, path, to, error_text),
        Commands::Inspect { path, format } => {
            handle_inspect_command(&registry, &config, path, &format)
        }
        Commands::ListFormats => handle_list_formats_command(&registry),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ShortmarkConfig, ConfigError> {
    let loader = Loader::new();
    match path {
        Some(path) => loader.with_file(path).build(),
        None => loader.build(),
    }
}

fn read_source(path: Option<PathBuf>) -> String {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            })
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                });
            source
        }
    }
}

fn emit(config: &ShortmarkConfig, output: &str) {
    if config.render.trailing_newline {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    config: &ShortmarkConfig,
    path: Option<PathBuf>,
    to: Option<String>,
    error_text: bool,
) {
    let source = read_source(path);
    let target = to.unwrap_or_else(|| config.render.format.name().to_string());

    match registry.convert(&source, "shortmark", &target) {
        Ok(output) => emit(config, &output),
        Err(FormatError::ParseError(err)) if error_text => {
            emit(config, &format!("{}{}", config.display.error_prefix, err));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    registry: &FormatRegistry,
    config: &ShortmarkConfig,
    path: Option<PathBuf>,
    format: &str,
) {
    let source = read_source(path);
    let output = registry
        .convert(&source, "shortmark", format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });
    emit(config, &output);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for format in registry.formats() {
        let mut capabilities = Vec::new();
        if format.supports_parsing() {
            capabilities.push("parse");
        }
        if format.supports_serialization() {
            capabilities.push("serialize");
        }

        println!("  {} ({})", format.name(), capabilities.join(", "));
        println!("    {}", format.description());
        if !format.aliases().is_empty() {
            println!("    aliases: {}", format.aliases().join(", "));
        }
        println!();
    }
}
