//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use service_result::output::OutputMode;

/// service-result - Normalize HTTP client responses
#[derive(Parser, Debug)]
#[command(
    name = "service-result",
    version,
    about = "Normalize HTTP client responses into a uniform result record",
    long_about = "Normalize HTTP client responses into a uniform result record.\n\n\
                  Responses are read as JSON documents of the form\n\
                  {\"status\": 200, \"statusCode\": 200, \"body\": ..., \"headers\": {...}}\n\
                  from a file or stdin."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.service-result/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a response (and optional error) into a result record
    Normalize {
        /// Response JSON file ("-" or omitted reads stdin)
        file: Option<String>,

        /// Error message supplied alongside the response
        #[arg(short, long, conflicts_with = "error_json")]
        error: Option<String>,

        /// Error supplied as a JSON value (e.g. '{"message": "Boom"}')
        #[arg(long, value_name = "JSON")]
        error_json: Option<String>,
    },

    /// Extract the paging window from a response
    Paging {
        /// Response JSON file ("-" or omitted reads stdin)
        file: Option<String>,
    },

    /// Extract the flash message from a response
    Flash {
        /// Response JSON file ("-" or omitted reads stdin)
        file: Option<String>,
    },

    /// Extract validation errors from a response
    ValidationErrors {
        /// Response JSON file ("-" or omitted reads stdin)
        file: Option<String>,
    },

    /// Show or initialize the normalizer configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Normalize {
            file,
            error,
            error_json,
        }) => commands::normalize(
            file.as_deref(),
            error.as_deref(),
            error_json.as_deref(),
            config_path,
            output_mode,
        ),
        Some(Command::Paging { file }) => commands::paging(file.as_deref(), config_path, output_mode),
        Some(Command::Flash { file }) => commands::flash(file.as_deref(), config_path, output_mode),
        Some(Command::ValidationErrors { file }) => {
            commands::validation_errors(file.as_deref(), config_path, output_mode)
        },
        Some(Command::Config { action }) => commands::config(action, config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("service-result v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("service-result v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'service-result --help' for usage");
                println!("Run 'service-result normalize response.json' to get started");
            }
            Ok(())
        },
    }
}
