//! Command-line interface for SnippetStream.
//!
//! - `serve` runs the HTTP service
//! - `generate` runs one repurpose locally and prints the JSON response

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SnippetStream command-line interface.
#[derive(Parser, Debug)]
#[command(name = "snippetstream")]
#[command(about = "Turn a founder's daily log into build-in-public posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Configuration file layered over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listen address, overriding `[server].bind`
        #[arg(short, long)]
        bind: Option<String>,

        /// Debug-level logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate artifacts once and print them as JSON
    Generate {
        /// Read the daily log from a file
        #[arg(short, long, conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Fetch the daily log from a URL
        #[arg(short, long)]
        url: Option<String>,

        /// Platforms to generate (thread, post, carousel)
        #[arg(short, long, value_delimiter = ',')]
        platforms: Option<Vec<String>>,

        /// Configuration file layered over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Debug-level logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_list() {
        let cli = Cli::parse_from([
            "snippetstream",
            "generate",
            "--file",
            "log.md",
            "--platforms",
            "thread,carousel",
        ]);
        let Commands::Generate { platforms, file, .. } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(platforms, Some(vec!["thread".to_string(), "carousel".to_string()]));
        assert_eq!(file, Some(PathBuf::from("log.md")));
    }

    #[test]
    fn file_and_url_conflict() {
        let result = Cli::try_parse_from([
            "snippetstream",
            "generate",
            "--file",
            "log.md",
            "--url",
            "https://example.com",
        ]);
        assert!(result.is_err());
    }
}
