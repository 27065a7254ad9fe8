//! The shared, lock-protected synonym relationship store.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymError};
use crate::store::components::ComponentIndex;
use crate::store::config::{ResolutionMode, StoreConfig};
use crate::store::graph::SynonymGraph;
use crate::word::validate_word;

/// The set of acceptable substitutes for one sentence position.
///
/// Sorted, so enumeration over candidate sets is deterministic.
pub type CandidateSet = BTreeSet<String>;

/// Summary of the store's current contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Words with at least one synonym edge.
    pub words: usize,
    /// Undirected edges.
    pub edges: usize,
    /// Equivalence classes among connected words.
    pub components: usize,
    /// Blacklisted words.
    pub blacklisted: usize,
}

#[derive(Debug, Default)]
struct StoreState {
    graph: SynonymGraph,
    blacklist: AHashSet<String>,
    components: ComponentIndex,
}

impl StoreState {
    fn recompute(&mut self) {
        self.components = ComponentIndex::build(&self.graph);
    }

    /// Read-path check, logged at debug level.
    fn check_not_blacklisted(&self, word: &str) -> Result<()> {
        if self.blacklist.contains(word) {
            debug!("Lookup of blacklisted word '{word}'");
            return Err(SynonymError::blacklisted(word));
        }
        Ok(())
    }

    /// Mutation-path check.
    fn reject_blacklisted(&self, word: &str) -> Result<()> {
        self.check_not_blacklisted(word)
            .inspect_err(|_| warn!("Rejected mutation on blacklisted word '{word}'"))
    }
}

/// An undirected synonym relation over words, with a permanent blacklist.
///
/// The store is meant to be constructed once and shared (typically behind an
/// `Arc`) by every caller in the process. All mutations run under a single
/// write lock that also covers the component recomputation, so a reader never
/// sees an edge whose equivalence classes are stale. Reads share the lock and
/// may run in parallel with each other.
///
/// # Example
///
/// ```
/// use synonymous::store::SynonymStore;
///
/// let store = SynonymStore::new();
/// store.add_synonym_pair("world", "earth").unwrap();
/// store.add_synonym_pair("planet", "earth").unwrap();
///
/// let class = store.resolve("world").unwrap();
/// assert_eq!(class.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SynonymStore {
    state: RwLock<StoreState>,
    config: StoreConfig,
}

impl SynonymStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        SynonymStore {
            state: RwLock::new(StoreState::default()),
            config,
        }
    }

    /// Build a store from groups of mutually synonymous words.
    pub fn from_synonym_groups<I, G, S>(groups: I, config: StoreConfig) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::with_config(config);
        let groups: Vec<Vec<String>> = groups
            .into_iter()
            .map(|group| group.into_iter().map(|w| w.as_ref().to_string()).collect())
            .collect();
        store.add_synonym_groups(&groups)?;
        Ok(store)
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Link `a` and `b` as synonyms.
    ///
    /// Fails with `InvalidWord` if either word is empty after trimming and
    /// with `BlacklistedWord` if either is blacklisted. Re-adding an existing
    /// pair leaves the graph unchanged.
    pub fn add_synonym_pair(&self, a: &str, b: &str) -> Result<()> {
        let a = validate_word(a)?;
        let b = validate_word(b)?;

        let mut state = self.state.write();
        state.reject_blacklisted(a)?;
        state.reject_blacklisted(b)?;

        if state.graph.add_edge(a, b) {
            state.recompute();
            debug!(
                "Added synonym pair ('{a}', '{b}'); {} components",
                state.components.len()
            );
        }
        Ok(())
    }

    /// Link every group of words as one class, in a single atomic mutation.
    ///
    /// Each group is connected as a chain of pairs. Every word of every group
    /// is validated before anything is inserted, so a failure leaves the
    /// store untouched. Returns the number of pairs that changed the graph.
    pub fn add_synonym_groups(&self, groups: &[Vec<String>]) -> Result<usize> {
        for word in groups.iter().flatten() {
            validate_word(word)?;
        }

        let mut state = self.state.write();
        for word in groups.iter().flatten() {
            state.reject_blacklisted(word)?;
        }

        let mut added = 0;
        for group in groups {
            if group.len() == 1 {
                debug!("Skipping single-word synonym group '{}'", group[0]);
                continue;
            }
            for pair in group.windows(2) {
                if state.graph.add_edge(&pair[0], &pair[1]) {
                    added += 1;
                }
            }
        }

        if added > 0 {
            state.recompute();
        }
        debug!(
            "Added {added} synonym pairs from {} groups; {} components",
            groups.len(),
            state.components.len()
        );
        Ok(added)
    }

    /// Load a JSON array of synonym groups from `path` and add them.
    ///
    /// The file format is the same as accepted by
    /// [`SynonymStore::from_synonym_groups`]:
    ///
    /// ```json
    /// [
    ///   ["hello", "hey"],
    ///   ["world", "earth", "planet"]
    /// ]
    /// ```
    pub fn load_synonym_groups<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            SynonymError::config(format!(
                "Failed to parse synonym groups from '{}': {e}",
                path.display()
            ))
        })?;
        self.add_synonym_groups(&groups)
    }

    /// Unlink `a` and `b`.
    ///
    /// Fails with `SameWord` if `a == b`. Removing a pair that does not exist
    /// is a no-op.
    pub fn remove_synonym_pair(&self, a: &str, b: &str) -> Result<()> {
        let a = validate_word(a)?;
        let b = validate_word(b)?;
        if a == b {
            return Err(SynonymError::same_word(format!(
                "Words must be different: '{a}'"
            )));
        }

        let mut state = self.state.write();
        if state.graph.remove_edge(a, b) {
            state.recompute();
            debug!(
                "Removed synonym pair ('{a}', '{b}'); {} components",
                state.components.len()
            );
        } else {
            debug!("Synonym pair ('{a}', '{b}') not present; nothing removed");
        }
        Ok(())
    }

    /// Permanently exclude `word`, severing every edge that touches it.
    pub fn blacklist_word(&self, word: &str) -> Result<()> {
        let word = validate_word(word)?;

        let mut state = self.state.write();
        state.blacklist.insert(word.to_string());
        let severed = state.graph.remove_word(word);
        state.recompute();
        debug!(
            "Blacklisted '{word}', severed {severed} edges; {} components",
            state.components.len()
        );
        Ok(())
    }

    /// Resolve `word` to its candidate set.
    ///
    /// In [`ResolutionMode::Transitive`] this is the word's equivalence class;
    /// in [`ResolutionMode::Direct`] it is the word plus its direct neighbors.
    /// A word without edges resolves to `{word}`.
    pub fn resolve(&self, word: &str) -> Result<CandidateSet> {
        let word = validate_word(word)?;

        let state = self.state.read();
        state.check_not_blacklisted(word)?;

        let class = match self.config.resolution_mode {
            ResolutionMode::Transitive => state.components.component_of(word).cloned(),
            ResolutionMode::Direct => state.graph.neighbors(word).map(|neighbors| {
                let mut class = neighbors.clone();
                class.insert(word.to_string());
                class
            }),
        };

        Ok(class.unwrap_or_else(|| BTreeSet::from([word.to_string()])))
    }

    /// Words directly linked to `word`, excluding `word` itself.
    pub fn direct_synonyms(&self, word: &str) -> Result<CandidateSet> {
        let word = validate_word(word)?;

        let state = self.state.read();
        state.check_not_blacklisted(word)?;
        Ok(state
            .graph
            .neighbors(word)
            .map(|neighbors| {
                neighbors
                    .iter()
                    .filter(|neighbor| neighbor.as_str() != word)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Check whether `word` is blacklisted.
    pub fn is_blacklisted(&self, word: &str) -> bool {
        self.state.read().blacklist.contains(word)
    }

    /// All blacklisted words, sorted.
    pub fn blacklist(&self) -> Vec<String> {
        let mut words: Vec<String> = self.state.read().blacklist.iter().cloned().collect();
        words.sort();
        words
    }

    /// A sorted snapshot of every equivalence class with at least one edge.
    pub fn components(&self) -> Vec<CandidateSet> {
        let mut components = self.state.read().components.components().to_vec();
        components.sort();
        components
    }

    /// Counts describing the current contents.
    pub fn stats(&self) -> StoreStats {
        let state = self.state.read();
        StoreStats {
            words: state.graph.word_count(),
            edges: state.graph.edge_count(),
            components: state.components.len(),
            blacklisted: state.blacklist.len(),
        }
    }
}
