//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Bilingual Hawaiian proverb dictionary
#[derive(Parser, Debug)]
#[command(name = "noeau")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Proverb file (default: from settings)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a proverb by its exact Hawaiian phrase
    Lookup {
        /// Hawaiian phrase
        phrase: String,
    },

    /// Find proverbs containing a word (Hawaiian or English, exact match)
    Word {
        /// Single word
        word: String,
    },

    /// Show the alphabetically first proverb
    First,

    /// Show the alphabetically last proverb
    Last,

    /// Show the proverb before a phrase
    Prev {
        /// Hawaiian phrase (need not be stored)
        phrase: String,
    },

    /// Show the proverb after a phrase
    Next {
        /// Hawaiian phrase (need not be stored)
        phrase: String,
    },

    /// List all proverbs in phrase order
    List,

    /// Show the balanced tree structure
    Tree,

    /// Show dictionary and tree statistics
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print config template
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["noeau", "-ddd", "first"]).unwrap();
        assert_eq!(cli.debug, 3);
        assert!(matches!(cli.command, Some(Commands::First)));
    }

    #[test]
    fn given_lookup_without_phrase_when_parsing_then_error() {
        assert!(Cli::try_parse_from(["noeau", "lookup"]).is_err());
    }
}
