//! Command-line interface for word2llm.
//!
//! This module provides the CLI structure and command handlers for the
//! `w2l` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ClearCommand, ConfigCommand, DeleteCommand, ListCommand, OutputFormat, SaveCommand,
    ShowCommand, StatsCommand,
};

/// w2l - Manage your word2llm learning records
///
/// A local store for saved study sessions: the words you studied, the
/// generated reading article, and any translation or questions attached
/// to it.
#[derive(Debug, Parser)]
#[command(name = "w2l")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recent learning records
    List(ListCommand),

    /// Show a single record by id
    Show(ShowCommand),

    /// Save a record from a JSON document
    Save(SaveCommand),

    /// Delete a record by id
    Delete(DeleteCommand),

    /// Remove all stored records
    Clear(ClearCommand),

    /// Show store statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "w2l");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Stats(StatsCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Stats(StatsCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose_and_trace() {
        let mut cli = Cli {
            config: None,
            verbose: 1,
            quiet: false,
            command: Command::Stats(StatsCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        cli.verbose = 2;
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_list() {
        let args = vec!["w2l", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn test_parse_list_with_limit() {
        let args = vec!["w2l", "list", "--limit", "5"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.limit, 5),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show() {
        let args = vec!["w2l", "show", "abc123"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Show(cmd) => assert_eq!(cmd.id, "abc123"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete() {
        let args = vec!["w2l", "delete", "abc123"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Delete(_)));
    }

    #[test]
    fn test_parse_clear_requires_no_args() {
        let args = vec!["w2l", "clear", "--yes"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Clear(cmd) => assert!(cmd.yes),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_save_defaults_to_stdin() {
        let args = vec!["w2l", "save"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Save(cmd) => assert_eq!(cmd.file, PathBuf::from("-")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["w2l", "-c", "/custom/config.toml", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["w2l", "-v", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["w2l", "-q", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
