//! Sentence generator trait and its backtracking implementation.

use crate::error::{Result, SynonymError};
use crate::sentence::iterator::CartesianSentences;
use crate::store::CandidateSet;

/// Trait for strategies that expand candidate sets into sentences.
///
/// Implementations hold no shared mutable state, so one generator can serve
/// any number of threads at once.
pub trait SentenceGenerator: Send + Sync + std::fmt::Debug {
    /// Produce every sentence formed by picking one word from each set, in
    /// positional order, joined by single spaces.
    ///
    /// The first set varies slowest and the last set fastest. Fails with
    /// `EmptyInput` if `candidate_sets` is empty or contains an empty set.
    fn generate(&self, candidate_sets: &[CandidateSet]) -> Result<Vec<String>>;

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// Check the enumerator's preconditions.
pub(crate) fn validate_candidate_sets(candidate_sets: &[CandidateSet]) -> Result<()> {
    if candidate_sets.is_empty() {
        return Err(SynonymError::empty_input(
            "Candidate sets cannot be null or empty",
        ));
    }
    if let Some(position) = candidate_sets.iter().position(|set| set.is_empty()) {
        return Err(SynonymError::empty_input(format!(
            "Candidate set at position {position} is empty"
        )));
    }
    Ok(())
}

/// Number of sentences `candidate_sets` expands to, or `None` on overflow.
///
/// Callers can check this before generating.
pub fn combination_count(candidate_sets: &[CandidateSet]) -> Option<usize> {
    if candidate_sets.is_empty() {
        return Some(0);
    }
    candidate_sets
        .iter()
        .try_fold(1usize, |count, set| count.checked_mul(set.len()))
}

/// Recursive backtracking generator.
///
/// Builds one sentence in a single buffer, appending a word per position and
/// truncating back before trying the next candidate, so working memory grows
/// with sentence length rather than output size.
///
/// Recursion depth equals the number of positions. Inputs longer than
/// [`BacktrackingGenerator::MAX_RECURSION_DEPTH`] are enumerated by
/// [`CartesianSentences`] instead, which yields the same sentences in the same
/// order on a fixed stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingGenerator;

impl BacktrackingGenerator {
    /// Longest input enumerated recursively.
    pub const MAX_RECURSION_DEPTH: usize = 1024;

    pub fn new() -> Self {
        BacktrackingGenerator
    }

    fn build(
        candidate_sets: &[CandidateSet],
        position: usize,
        current: &mut String,
        sentences: &mut Vec<String>,
    ) {
        if position == candidate_sets.len() {
            sentences.push(current.clone());
            return;
        }

        for word in &candidate_sets[position] {
            let length_before = current.len();
            if position > 0 {
                current.push(' ');
            }
            current.push_str(word);
            Self::build(candidate_sets, position + 1, current, sentences);
            current.truncate(length_before);
        }
    }
}

impl SentenceGenerator for BacktrackingGenerator {
    fn generate(&self, candidate_sets: &[CandidateSet]) -> Result<Vec<String>> {
        validate_candidate_sets(candidate_sets)?;

        if candidate_sets.len() > Self::MAX_RECURSION_DEPTH {
            return Ok(CartesianSentences::new(candidate_sets)?.collect());
        }

        let mut sentences = Vec::with_capacity(combination_count(candidate_sets).unwrap_or(0));
        let mut current = String::new();
        Self::build(candidate_sets, 0, &mut current, &mut sentences);
        Ok(sentences)
    }

    fn name(&self) -> &str {
        "backtracking"
    }
}
