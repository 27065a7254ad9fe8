//! The synonym relationship store.
//!
//! This module keeps an undirected synonym relation over words together with
//! a permanent blacklist, and resolves any word to its equivalence class (all
//! words transitively reachable through synonym edges).
//!
//! # Components
//!
//! - [`graph`] - Symmetric adjacency over words
//! - [`components`] - Connected-component index, rebuilt after each mutation
//! - [`config`] - Resolution semantics
//! - [`relationship`] - The shared, lock-protected [`SynonymStore`]
//!
//! # Examples
//!
//! ```
//! use synonymous::store::SynonymStore;
//!
//! let store = SynonymStore::new();
//! store.add_synonym_pair("hello", "hey").unwrap();
//! store.blacklist_word("hey").unwrap();
//!
//! assert_eq!(store.resolve("hello").unwrap().len(), 1);
//! assert!(store.resolve("hey").is_err());
//! ```

pub mod components;
pub mod config;
pub mod graph;
pub mod relationship;

pub use components::ComponentIndex;
pub use config::{ResolutionMode, StoreConfig};
pub use graph::SynonymGraph;
pub use relationship::{CandidateSet, StoreStats, SynonymStore};
