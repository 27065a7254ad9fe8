//! Access-gated facade over the store and the sentence generator.
//!
//! Mutations require [`Role::Admin`]; any other role is denied before the
//! store is touched. Sentence requests are split on whitespace, each word is
//! resolved through the store, and the resulting candidate sets are expanded
//! by the configured [`SentenceGenerator`](crate::sentence::SentenceGenerator).

mod facade;
mod role;

pub use facade::SynonymService;
pub use role::Role;
