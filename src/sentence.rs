//! Sentence enumeration over candidate sets.
//!
//! Given one candidate set per sentence position, a [`SentenceGenerator`]
//! produces the full Cartesian product as space-joined sentences. Output size
//! is the product of the set sizes and is not capped here; use
//! [`combination_count`] to apply a limit before generating, or
//! [`CartesianSentences`] to consume lazily.

pub mod generator;
pub mod iterator;

pub use generator::{BacktrackingGenerator, SentenceGenerator, combination_count};
pub use iterator::{CartesianSentences, IteratorGenerator};
