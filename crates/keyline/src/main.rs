//! keyline - print where a dotted YAML key is declared

use anyhow::Result;
use clap::{Parser, ValueEnum};
use keyline_core::{Error, Location, LookupOptions, get_yaml_location};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when the key path is malformed
const EXIT_USAGE: u8 = 2;
/// Exit status when the YAML file does not exist
const EXIT_FILE_NOT_FOUND: u8 = 3;
/// Exit status when the YAML file cannot be read or parsed
const EXIT_UNREADABLE: u8 = 4;
/// Exit status when no key matches
const EXIT_KEY_NOT_FOUND: u8 = 5;

/// Find the line where a YAML key is declared
#[derive(Parser, Debug)]
#[command(name = "keyline")]
#[command(version)]
#[command(about = "Print <absolute path>:<line> for a dotted YAML key path", long_about = None)]
#[command(after_help = "Example: keyline config.yaml server.database.user")]
struct Args {
    /// Path to the YAML file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Dotted key path, e.g. server.database.user
    #[arg(value_name = "KEY_PATH")]
    key_path: String,

    /// Append the column (1-based) of the line's first non-blank character
    #[arg(long)]
    column: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// path:line[:column]
    Text,
    /// A JSON object with path, line and (0-based) column
    Json,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the location
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keyline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let options = LookupOptions {
        column: args.column,
    };

    match get_yaml_location(&args.file, &args.key_path, &options) {
        Ok(Some(location)) => {
            println!("{}", render(&location, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            eprintln!("Key '{}' not found.", args.key_path);
            Ok(ExitCode::from(EXIT_KEY_NOT_FOUND))
        }
        Err(e) if e.is_not_found() => {
            eprintln!("File not found: {}", args.file.display());
            Ok(ExitCode::from(EXIT_FILE_NOT_FOUND))
        }
        Err(e @ Error::InvalidKeyPath { .. }) => {
            eprintln!("{e}");
            Ok(ExitCode::from(EXIT_USAGE))
        }
        Err(e) => {
            tracing::debug!(error = ?e, "lookup failed");
            eprintln!("Failed to read/parse YAML file: {e}");
            Ok(ExitCode::from(EXIT_UNREADABLE))
        }
    }
}

fn render(location: &Location, format: Format) -> Result<String> {
    let path = location.path.display();
    Ok(match format {
        Format::Text => match location.column {
            Some(column) => format!("{}:{}:{}", path, location.line, column + 1),
            None => format!("{}:{}", path, location.line),
        },
        Format::Json => serde_json::to_string(location)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_render_text() {
        let location = Location {
            path: PathBuf::from("/srv/app/config.yaml"),
            line: 12,
            column: None,
        };
        assert_eq!(render(&location, Format::Text).unwrap(), "/srv/app/config.yaml:12");
    }

    #[test]
    fn test_render_text_with_column_is_one_based() {
        let location = Location {
            path: PathBuf::from("/srv/app/config.yaml"),
            line: 12,
            column: Some(4),
        };
        assert_eq!(render(&location, Format::Text).unwrap(), "/srv/app/config.yaml:12:5");
    }

    #[test]
    fn test_render_json() {
        let location = Location {
            path: PathBuf::from("/srv/app/config.yaml"),
            line: 3,
            column: Some(0),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&location, Format::Json).unwrap()).unwrap();
        assert_eq!(json["path"], "/srv/app/config.yaml");
        assert_eq!(json["line"], 3);
        assert_eq!(json["column"], 0);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "keyline", "en.yml", "en.title", "--column", "--format", "json",
        ])
        .unwrap();
        assert_eq!(args.file, PathBuf::from("en.yml"));
        assert_eq!(args.key_path, "en.title");
        assert!(args.column);
        assert!(matches!(args.format, Format::Json));
    }

    #[test]
    fn test_missing_key_path_is_rejected() {
        assert!(Args::try_parse_from(["keyline", "en.yml"]).is_err());
    }
}
