//! Configuration for the synonym service.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymError};
use crate::sentence::{BacktrackingGenerator, IteratorGenerator, SentenceGenerator};
use crate::store::{ResolutionMode, StoreConfig};

/// What sentence generation does when a word of the sentence is blacklisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BlacklistPolicy {
    /// Fail the whole request with `BlacklistedWord`.
    #[default]
    Fail,
    /// Keep the blacklisted word as its only candidate.
    KeepOriginal,
}

/// Which [`SentenceGenerator`] implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Recursive backtracking.
    #[default]
    Backtracking,
    /// Lazy odometer-style iterator.
    Iterator,
}

impl GeneratorKind {
    /// Instantiate the generator.
    pub fn build(self) -> Box<dyn SentenceGenerator> {
        match self {
            GeneratorKind::Backtracking => Box::new(BacktrackingGenerator::new()),
            GeneratorKind::Iterator => Box::new(IteratorGenerator::new()),
        }
    }
}

/// Configuration for a [`SynonymService`](crate::service::SynonymService).
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// {
///   "resolution_mode": "transitive",
///   "blacklist_policy": "keep-original",
///   "synonyms_file": "synonyms.json",
///   "blacklist": ["earth"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Resolution semantics of the underlying store.
    pub resolution_mode: ResolutionMode,

    /// Handling of blacklisted words during sentence generation.
    pub blacklist_policy: BlacklistPolicy,

    /// Sentence generator implementation.
    pub generator: GeneratorKind,

    /// JSON file of synonym groups to seed the store with.
    pub synonyms_file: Option<PathBuf>,

    /// Words to blacklist at startup, applied after seeding.
    pub blacklist: Vec<String>,
}

impl ServiceConfig {
    /// Create a new ServiceConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SynonymError::config(format!(
                "Failed to parse configuration from '{}': {e}",
                path.display()
            ))
        })
    }

    /// Set the resolution mode.
    pub fn with_resolution_mode(mut self, mode: ResolutionMode) -> Self {
        self.resolution_mode = mode;
        self
    }

    /// Set the blacklist policy.
    pub fn with_blacklist_policy(mut self, policy: BlacklistPolicy) -> Self {
        self.blacklist_policy = policy;
        self
    }

    /// Set the generator implementation.
    pub fn with_generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    /// Set the synonym groups file.
    pub fn with_synonyms_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.synonyms_file = Some(path.into());
        self
    }

    /// Add words to blacklist at startup.
    pub fn with_blacklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(words.into_iter().map(Into::into));
        self
    }

    /// The store configuration implied by this service configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.resolution_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.resolution_mode, ResolutionMode::Transitive);
        assert_eq!(config.blacklist_policy, BlacklistPolicy::Fail);
        assert_eq!(config.generator, GeneratorKind::Backtracking);
        assert!(config.synonyms_file.is_none());
        assert!(config.blacklist.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ServiceConfig::new()
            .with_resolution_mode(ResolutionMode::Direct)
            .with_blacklist_policy(BlacklistPolicy::KeepOriginal)
            .with_generator(GeneratorKind::Iterator)
            .with_synonyms_file("synonyms.json")
            .with_blacklist(["earth"]);

        assert_eq!(config.store_config().resolution_mode, ResolutionMode::Direct);
        assert_eq!(config.blacklist_policy, BlacklistPolicy::KeepOriginal);
        assert_eq!(config.generator.build().name(), "iterator");
        assert_eq!(config.synonyms_file, Some(PathBuf::from("synonyms.json")));
        assert_eq!(config.blacklist, vec!["earth".to_string()]);
    }

    #[test]
    fn test_partial_json() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"blacklist_policy": "keep-original"}"#).unwrap();
        assert_eq!(config.blacklist_policy, BlacklistPolicy::KeepOriginal);
        assert_eq!(config.resolution_mode, ResolutionMode::Transitive);
    }
}
