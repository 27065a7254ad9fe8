//! # Synonymous
//!
//! A synonym relationship store and sentence variant enumerator.
//!
//! ## Features
//!
//! - Undirected synonym relation with transitive equivalence classes
//! - Permanent word blacklist that severs every touching edge
//! - Thread-safe store: one writer at a time, parallel readers
//! - Cartesian-product sentence enumeration, eager or lazy
//! - Role-gated service facade and a command line front end
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use synonymous::service::{Role, SynonymService};
//! use synonymous::store::SynonymStore;
//!
//! let service = SynonymService::with_store(Arc::new(SynonymStore::new()));
//! service.add_synonym_pair("hello", "hey", Role::Admin).unwrap();
//! service.add_synonym_pair("world", "earth", Role::Admin).unwrap();
//!
//! let sentences = service.sentences("hello world").unwrap();
//! assert_eq!(sentences.len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod sentence;
pub mod service;
pub mod store;
pub mod word;

pub mod prelude {
    pub use crate::config::{BlacklistPolicy, GeneratorKind, ServiceConfig};
    pub use crate::error::{ErrorKind, Result, SynonymError};
    pub use crate::sentence::{BacktrackingGenerator, CartesianSentences, SentenceGenerator};
    pub use crate::service::{Role, SynonymService};
    pub use crate::store::{CandidateSet, ResolutionMode, StoreConfig, SynonymStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
