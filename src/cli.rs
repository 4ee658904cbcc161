use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use url::Url;

/// Command-line client for the camera monitoring backend.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides CAMCTL_BACKEND_URL)
    #[arg(short, long)]
    pub backend_url: Option<Url>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Switch the camera into the given mode
    Toggle {
        /// Mode identifier, sent verbatim as a path segment (e.g. on, off)
        mode: String,
    },
    /// Release the camera device
    Release,
    /// Upload a video file (only the first given path is sent)
    Upload {
        /// Candidate video files, in selection order
        files: Vec<PathBuf>,
    },
    /// List uploaded videos
    List {
        /// Output format for the listing
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggle_with_mode() {
        let cli = Cli::try_parse_from(["camctl", "toggle", "night"]).expect("should parse");
        match cli.command {
            Command::Toggle { mode } => assert_eq!(mode, "night"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn upload_accepts_zero_files() {
        let cli = Cli::try_parse_from(["camctl", "upload"]).expect("should parse");
        match cli.command {
            Command::Upload { files } => assert!(files.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_defaults_to_text_format() {
        let cli = Cli::try_parse_from(["camctl", "list"]).expect("should parse");
        match cli.command {
            Command::List { format } => assert_eq!(format, ListFormat::Text),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn backend_url_flag_is_optional_and_typed() {
        let cli = Cli::try_parse_from([
            "camctl",
            "--backend-url",
            "http://localhost:8000",
            "release",
        ])
        .expect("should parse");
        assert_eq!(
            cli.backend_url.expect("url should be set").as_str(),
            "http://localhost:8000/"
        );
    }
}
