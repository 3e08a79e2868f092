//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hullcheck - extract and validate marine insurance policy documents.
#[derive(Debug, Parser)]
#[command(name = "hullcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "HULLCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP validation service
    Serve,

    /// Validate a single document file and print the result as JSON
    Check(CheckArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Path to a plain-text document
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["hullcheck", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_serve_with_config() {
        let cli = Cli::try_parse_from(["hullcheck", "serve", "--config", "config/hullcheck.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("config/hullcheck.toml")));
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["hullcheck", "-c", "h.toml", "check", "policy.txt"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.file, PathBuf::from("policy.txt")),
            other => panic!("expected check, got {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("h.toml")));
    }

    #[test]
    fn test_check_requires_file() {
        assert!(Cli::try_parse_from(["hullcheck", "check"]).is_err());
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["hullcheck"]).is_err());
    }
}
