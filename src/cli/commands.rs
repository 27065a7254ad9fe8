//! Command implementations for the synonymous CLI.

use std::sync::Arc;

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ServiceConfig;
use crate::error::{Result, SynonymError};
use crate::sentence::combination_count;
use crate::service::{Role, SynonymService};
use crate::store::SynonymStore;

/// Execute a CLI command.
pub fn execute_command(args: SynonymousArgs) -> Result<()> {
    match &args.command {
        Command::Sentences(sentences_args) => {
            generate_sentences(&build_service(&args)?, sentences_args, &args)
        }
        Command::Resolve(resolve_args) => resolve_words(&build_service(&args)?, resolve_args, &args),
        Command::Components => list_components(&build_service(&args)?, &args),
        Command::Stats => show_stats(&build_service(&args)?, &args),
        Command::Demo => run_demo(&args),
    }
}

/// Merge the configuration file with command line overrides.
fn load_config(args: &SynonymousArgs) -> Result<ServiceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServiceConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => ServiceConfig::default(),
    };

    if let Some(path) = &args.synonyms {
        config.synonyms_file = Some(path.clone());
    }
    if let Some(mode) = args.mode {
        config.resolution_mode = mode;
    }
    if let Some(policy) = args.blacklist_policy {
        config.blacklist_policy = policy;
    }
    if let Some(generator) = args.generator {
        config.generator = generator;
    }
    Ok(config)
}

/// Build the service and apply the `--pair` and `--blacklist` mutations.
fn build_service(args: &SynonymousArgs) -> Result<SynonymService> {
    let config = load_config(args)?;
    let service =
        SynonymService::from_config(&config).with_context(|| match &config.synonyms_file {
            Some(path) => format!("Failed to seed synonyms from {}", path.display()),
            None => "Failed to build the synonym service".to_string(),
        })?;

    for pair in &args.pairs {
        let (a, b) = parse_pair(pair).ok_or_else(|| {
            SynonymError::invalid_word(format!("Expected WORD:WORD, got '{pair}'"))
        })?;
        service.add_synonym_pair(a, b, args.role)?;
    }
    for word in &args.blacklist {
        service.blacklist_word(word, args.role)?;
    }

    Ok(service)
}

/// Generate every variant of a sentence.
fn generate_sentences(
    service: &SynonymService,
    args: &SentencesArgs,
    cli_args: &SynonymousArgs,
) -> Result<()> {
    let result = if args.count_only {
        let candidate_sets = service.candidate_sets(&args.sentence)?;
        let count = combination_count(&candidate_sets)
            .ok_or_else(|| SynonymError::other("Sentence count overflows usize"))?;
        SentencesResult {
            sentence: args.sentence.clone(),
            count,
            sentences: Vec::new(),
        }
    } else {
        let sentences = service.sentences(&args.sentence)?;
        SentencesResult {
            sentence: args.sentence.clone(),
            count: sentences.len(),
            sentences,
        }
    };

    output_result(
        &format!("Synonym sentences for '{}':", args.sentence),
        &result,
        cli_args,
    )
}

/// Resolve each word, reporting failures per word.
fn resolve_words(
    service: &SynonymService,
    args: &ResolveArgs,
    cli_args: &SynonymousArgs,
) -> Result<()> {
    let store = service.store();
    let words: Vec<ResolvedWord> = args
        .words
        .iter()
        .map(|word| {
            let resolved = if args.direct {
                store.direct_synonyms(word)
            } else {
                store.resolve(word)
            };
            match resolved {
                Ok(candidates) => ResolvedWord {
                    word: word.clone(),
                    candidates: Some(candidates.into_iter().collect()),
                    error: None,
                },
                Err(e) => ResolvedWord {
                    word: word.clone(),
                    candidates: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    output_result("Resolved words:", &ResolveResult { words }, cli_args)
}

/// List every equivalence class.
fn list_components(service: &SynonymService, cli_args: &SynonymousArgs) -> Result<()> {
    let components: Vec<Vec<String>> = service
        .store()
        .components()
        .into_iter()
        .map(|component| component.into_iter().collect())
        .collect();

    output_result(
        "Synonym classes:",
        &ComponentsResult { components },
        cli_args,
    )
}

/// Show store statistics.
fn show_stats(service: &SynonymService, cli_args: &SynonymousArgs) -> Result<()> {
    let store = service.store();
    let result = StatsResult {
        stats: store.stats(),
        blacklist: store.blacklist(),
    };
    output_result("Store statistics:", &result, cli_args)
}

fn run_demo(cli_args: &SynonymousArgs) -> Result<()> {
    output_result("Demo walkthrough:", &demo_report(), cli_args)
}

/// Walk through the full lifecycle on a fresh store: admin mutations,
/// generation, a denied user mutation, removal, blacklisting, and invalid
/// input. Failing steps are recorded in the report, not returned.
pub fn demo_report() -> DemoReport {
    let service = SynonymService::with_store(Arc::new(SynonymStore::new()));
    let mut steps = Vec::new();

    steps.push(demo_step("Adding synonym pairs as an admin", || {
        for (a, b) in [
            ("hello", "hey"),
            ("world", "earth"),
            ("planet", "earth"),
            ("planet", "planet"),
        ] {
            service.add_synonym_pair(a, b, Role::Admin)?;
        }
        Ok(vec!["Added synonym pairs successfully.".to_string()])
    }));

    steps.push(demo_step("Getting sentences for 'hello world'", || {
        service.sentences("hello world")
    }));

    steps.push(demo_step("Attempting to add synonym pairs as a user", || {
        service.add_synonym_pair("foo", "bar", Role::User)?;
        Ok(vec!["Added synonym pairs successfully.".to_string()])
    }));

    steps.push(demo_step("Removing synonym pairs as an admin", || {
        service.remove_synonym_pair("planet", "earth", Role::Admin)?;
        Ok(vec!["Removed synonym pairs successfully.".to_string()])
    }));

    steps.push(demo_step("Blacklisting the word 'earth' as an admin", || {
        service.blacklist_word("earth", Role::Admin)?;
        Ok(vec!["Blacklisted 'earth' successfully.".to_string()])
    }));

    steps.push(demo_step(
        "Getting sentences for 'hello world' after blacklisting 'earth'",
        || service.sentences("hello world"),
    ));

    steps.push(demo_step(
        "Attempting to add synonym pairs with invalid input",
        || {
            service.add_synonym_pair("", "hey", Role::Admin)?;
            Ok(vec!["Added synonym pairs successfully.".to_string()])
        },
    ));

    steps.push(demo_step("Getting sentences for a blank input", || {
        service.sentences(" ")
    }));

    DemoReport { steps }
}

fn demo_step<F>(title: &str, run: F) -> DemoStep
where
    F: FnOnce() -> Result<Vec<String>>,
{
    match run() {
        Ok(output) => DemoStep {
            title: title.to_string(),
            output,
            error: None,
        },
        Err(e) => DemoStep {
            title: title.to_string(),
            output: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}
