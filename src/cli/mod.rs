//! CLI module - Command-line interface for KNOX
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// KNOX - security tool catalog service
#[derive(Parser)]
#[command(name = "knox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create a default config.toml in the current directory
    Init,

    /// Export the built-in catalog without starting the server
    Export {
        /// json or csv
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the built-in catalog
    #[command(alias = "ls")]
    Tools {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["knox"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["knox", "export", "csv", "-o", "out.csv"]).unwrap();
        match cli.command {
            Some(Commands::Export { format, output }) => {
                assert_eq!(format, "csv");
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_parse_serve_alias() {
        let cli = Cli::try_parse_from(["knox", "daemon", "--port", "8080"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Serve { port: Some(8080) })
        ));
    }
}
