//! pbdecode - Pseudo-binary telemetry decoder
//!
//! Decodes a window of a pseudo-binary data-logger message and scales the
//! result into a display-ready measurement.

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use common::{init_logging, LogConfig, LogFormat};
use pseudobin_codec::{encode_variant, Reading, Variant};
use pseudobin_config::{load_config, ConfigValidator, Overrides, PseudobinConfig, ValidationLevel};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "pbdecode")]
#[command(about = "Pseudo-binary telemetry decoder")]
#[command(long_about = "Pseudo-binary telemetry decoder

Commands:
  decode      Decode a window of a message and scale it
  encode      Encode a value as window text
  presets     List device presets
  tables      Show the character table of each variant
  validate    Validate the configuration

Examples:
  pbdecode decode                              # Decode the default message
  pbdecode decode '`BST@Ff@Ffj' --start 4 --width 3 --divider 100
  pbdecode decode '`BST@Ff@FfL' --preset sutron_voltage
  pbdecode encode -- -1 --width 3 --variant signed
  pbdecode -c pbdecode.yaml presets

Configuration is read from the file given with -c and from PSEUDOBIN_*
environment variables (nested keys separated by '__').")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (.yaml, .yml, .toml or .json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Bracketed)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a window of a message and scale it
    Decode {
        /// Raw message (default: the configured default message)
        message: Option<String>,

        /// First character of the window
        #[arg(short, long)]
        start: Option<usize>,

        /// Number of characters in the window
        #[arg(short, long)]
        width: Option<usize>,

        /// Message format: positive, signed or b
        #[arg(long)]
        variant: Option<Variant>,

        #[arg(long, allow_negative_numbers = true)]
        divider: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        multiplier: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        adder: Option<f64>,

        /// Fractional digits of the processed value
        #[arg(short, long, allow_negative_numbers = true)]
        digits: Option<i32>,

        /// Device preset supplying window and scaling
        #[arg(short, long)]
        preset: Option<String>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode a value as window text
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: i64,

        #[arg(short, long)]
        width: usize,

        /// Message format: positive, signed or b
        #[arg(long)]
        variant: Option<Variant>,
    },

    /// List device presets
    Presets,

    /// Show the character table of each variant
    Tables,

    /// Validate the configuration
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_config = LogConfig {
        level: if cli.verbose { "debug" } else { "info" }.to_string(),
        format: cli.log_format,
        ansi: !cli.no_color,
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{} {}", "ERROR".red(), e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR".red(), e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    let validation = config.validate(ValidationLevel::Business);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Decode {
            message,
            start,
            width,
            variant,
            divider,
            multiplier,
            adder,
            digits,
            preset,
            json,
        } => {
            let overrides = Overrides {
                preset,
                start,
                width,
                variant,
                divider,
                multiplier,
                adder,
                digits,
            };
            let message = message.unwrap_or_else(|| config.defaults.message.clone());
            decode_command(&config, &message, &overrides, json)?;
        },
        Commands::Encode {
            value,
            width,
            variant,
        } => {
            let variant = variant.unwrap_or(config.defaults.variant);
            let decoder = config.decoder()?;
            let text = encode_variant(decoder.tables(), variant, value, width)?;
            println!("{}", text);
        },
        Commands::Presets => {
            print!("{}", render::presets(&config.presets));
        },
        Commands::Tables => {
            let decoder = config.decoder()?;
            print!("{}", render::tables(decoder.tables()));
        },
        Commands::Validate => {
            print!("{}", render::validation(&validation));
            if !validation.is_valid {
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn decode_command(
    config: &PseudobinConfig,
    message: &str,
    overrides: &Overrides,
    json: bool,
) -> Result<()> {
    let resolved = config.resolve(overrides)?;
    debug!(?resolved, "Resolved parameters");

    let decoder = config.decoder()?;
    let window = resolved.window(message.chars().count())?;
    let reading = Reading::decode(&decoder, message, window, resolved.variant, &resolved.scale)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render::reading(&reading));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["pbdecode", "--log-format", "json", "tables"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);

        let cli = Cli::try_parse_from(["pbdecode", "presets"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Bracketed);

        assert!(Cli::try_parse_from(["pbdecode", "--log-format", "xml", "tables"]).is_err());
    }
}
