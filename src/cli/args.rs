//! Command line argument parsing for the synonymous CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{BlacklistPolicy, GeneratorKind};
use crate::service::Role;
use crate::store::ResolutionMode;

/// Synonymous - expand sentences through a synonym relation
#[derive(Parser, Debug, Clone)]
#[command(name = "synonymous")]
#[command(about = "Enumerate every sentence reachable by synonym substitution")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynonymousArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SYNONYMOUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Synonym groups file (JSON), overrides the configured one
    #[arg(short, long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Synonym pairs to add before running the command, as WORD:WORD
    #[arg(short, long = "pair", value_name = "WORD:WORD")]
    pub pairs: Vec<String>,

    /// Words to blacklist before running the command (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub blacklist: Vec<String>,

    /// Role used for the --pair and --blacklist mutations
    #[arg(short, long, default_value = "admin")]
    pub role: Role,

    /// Resolution mode, overrides the configured one
    #[arg(short, long)]
    pub mode: Option<ResolutionMode>,

    /// Blacklist policy during generation, overrides the configured one
    #[arg(long)]
    pub blacklist_policy: Option<BlacklistPolicy>,

    /// Sentence generator, overrides the configured one
    #[arg(long)]
    pub generator: Option<GeneratorKind>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynonymousArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every synonym variant of a sentence
    Sentences(SentencesArgs),

    /// Resolve words to their candidate sets
    Resolve(ResolveArgs),

    /// List the equivalence classes of the store
    Components,

    /// Show store statistics
    Stats,

    /// Run the end-to-end walkthrough on a fresh store
    Demo,
}

/// Arguments for sentence generation
#[derive(Parser, Debug, Clone)]
pub struct SentencesArgs {
    /// Sentence to expand
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Print only the number of sentences that would be generated
    #[arg(long)]
    pub count_only: bool,
}

/// Arguments for word resolution
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Words to resolve
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show direct synonyms instead of the resolved candidate set
    #[arg(long)]
    pub direct: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a `WORD:WORD` pair argument.
///
/// Exactly one `:` is allowed, so words themselves cannot contain one.
pub fn parse_pair(pair: &str) -> Option<(&str, &str)> {
    match pair.split_once(':') {
        Some((_, b)) if b.contains(':') => None,
        split => split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = SynonymousArgs::parse_from([
            "synonymous",
            "-vv",
            "--pair",
            "hello:hey",
            "--blacklist",
            "earth,moon",
            "sentences",
            "hello world",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.pairs, vec!["hello:hey".to_string()]);
        assert_eq!(args.blacklist, vec!["earth".to_string(), "moon".to_string()]);
        assert_eq!(args.role, Role::Admin);
        match args.command {
            Command::Sentences(sentences) => assert_eq!(sentences.sentence, "hello world"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = SynonymousArgs::parse_from(["synonymous", "-q", "-vvv", "stats"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair("hello:hey"), Some(("hello", "hey")));
        assert_eq!(parse_pair("hello"), None);
        assert_eq!(parse_pair("a:b:c"), None);
        assert_eq!(parse_pair("hello::hey"), None);
    }
}
