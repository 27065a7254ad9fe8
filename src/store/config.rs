//! Configuration for the relationship store.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How [`SynonymStore::resolve`](crate::store::SynonymStore::resolve) turns a
/// word into its candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// The full equivalence class: every word reachable through synonym edges.
    #[default]
    Transitive,
    /// The word itself plus its direct neighbors only.
    Direct,
}

/// Configuration for a [`SynonymStore`](crate::store::SynonymStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Resolution semantics for `resolve`.
    #[serde(default)]
    pub resolution_mode: ResolutionMode,
}

impl StoreConfig {
    /// Create a new StoreConfig with the given resolution mode.
    pub fn new(resolution_mode: ResolutionMode) -> Self {
        Self { resolution_mode }
    }
}
