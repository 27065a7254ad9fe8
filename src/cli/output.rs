//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynonymousArgs};
use crate::error::Result;
use crate::store::StoreStats;

/// Results that can print themselves for a terminal reader.
pub trait HumanOutput {
    fn print_human(&self);
}

/// Result structure for sentence generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentencesResult {
    pub sentence: String,
    pub count: usize,
    pub sentences: Vec<String>,
}

/// One resolved word.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolvedWord {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result structure for word resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResult {
    pub words: Vec<ResolvedWord>,
}

/// Result structure for listing components.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentsResult {
    pub components: Vec<Vec<String>>,
}

/// Store statistics together with the blacklist.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    #[serde(flatten)]
    pub stats: StoreStats,
    pub blacklist: Vec<String>,
}

/// One step of the demo walkthrough.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoStep {
    pub title: String,
    pub output: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result structure for the demo walkthrough.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SynonymousArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SynonymousArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl HumanOutput for SentencesResult {
    fn print_human(&self) {
        for sentence in &self.sentences {
            println!("{sentence}");
        }
        if self.sentences.is_empty() {
            println!("{} sentences", self.count);
        }
    }
}

impl HumanOutput for ResolveResult {
    fn print_human(&self) {
        for resolved in &self.words {
            match (&resolved.candidates, &resolved.error) {
                (Some(candidates), _) => println!("{}: {}", resolved.word, candidates.join(", ")),
                (None, Some(error)) => println!("{}: error: {error}", resolved.word),
                (None, None) => println!("{}:", resolved.word),
            }
        }
    }
}

impl HumanOutput for ComponentsResult {
    fn print_human(&self) {
        if self.components.is_empty() {
            println!("No synonym classes.");
        }
        for (i, component) in self.components.iter().enumerate() {
            println!("{:>4}  {}", i + 1, component.join(", "));
        }
    }
}

impl HumanOutput for StatsResult {
    fn print_human(&self) {
        println!("Store Statistics:");
        println!("═════════════════");
        println!("Words:       {}", self.stats.words);
        println!("Edges:       {}", self.stats.edges);
        println!("Components:  {}", self.stats.components);
        println!("Blacklisted: {}", self.stats.blacklisted);
        if !self.blacklist.is_empty() {
            println!("Blacklist:   {}", self.blacklist.join(", "));
        }
    }
}

impl HumanOutput for DemoReport {
    fn print_human(&self) {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("Case {}: {}", i + 1, step.title);
            for line in &step.output {
                println!("{line}");
            }
            if let Some(error) = &step.error {
                println!("Error: {error}");
            }
        }
    }
}
