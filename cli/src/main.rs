//! sqlog CLI - Main entry point

use clap::{Parser, Subcommand, ValueEnum};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sqlog_cli::config::Config;
use sqlog_cli::error::CliError;
use sqlog_cli::{commands, output};
use sqlog_core::ColorMode;

/// sqlog - readable SQL query logs
#[derive(Parser, Debug)]
#[command(name = "sqlog")]
#[command(
    author,
    version,
    about = "Format SQL query events into readable log lines",
    long_about = None
)]
struct Cli {
    /// Path to config file (default: sqlog.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured color mode
    #[arg(long, global = true, value_enum)]
    color: Option<Color>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a single query event
    Format {
        /// SQL template with `?` or `$n` placeholders
        sql: String,

        /// Argument literals: null, true, 42, 1.5, x:<hex>, @<timestamp>, 'text', text
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,

        /// Pretend the query ran this long
        #[arg(long, default_value_t = 0.0, value_name = "MS")]
        elapsed_ms: f64,
    },

    /// Log every event in a JSON-lines file
    Replay {
        /// Input file, or `-` for stdin
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Color {
    Auto,
    Always,
    Never,
}

impl From<Color> for ColorMode {
    fn from(color: Color) -> Self {
        match color {
            Color::Auto => ColorMode::Auto,
            Color::Always => ColorMode::Always,
            Color::Never => ColorMode::Never,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", output::err_prefix(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.log.color = color.into();
    }
    match config.log.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    let logger = config.log.build()?;

    match cli.command {
        Command::Format {
            sql,
            args,
            elapsed_ms,
        } => commands::format::run(&logger, &sql, &args, elapsed_ms),
        Command::Replay { file } => {
            let stats = if file.as_os_str() == "-" {
                commands::replay::run(&logger, std::io::stdin().lock())?
            } else {
                let handle = std::fs::File::open(&file)
                    .map_err(|e| CliError::IoError(format!("{}: {e}", file.display())))?;
                commands::replay::run(&logger, BufReader::new(handle))?
            };

            let summary = format!("Replayed {} events", stats.logged);
            if stats.skipped > 0 {
                eprintln!(
                    "{} {}",
                    output::success(&summary),
                    output::muted(&format!("({} skipped)", stats.skipped))
                );
            } else {
                eprintln!("{}", output::success(&summary));
            }
            Ok(())
        }
    }
}

fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
