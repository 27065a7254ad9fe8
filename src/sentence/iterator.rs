//! Lazy Cartesian-product enumeration.

use crate::error::Result;
use crate::sentence::generator::{SentenceGenerator, validate_candidate_sets};
use crate::store::CandidateSet;

/// Iterator over every sentence of a sequence of candidate sets.
///
/// Yields sentences one at a time in the same order as
/// [`BacktrackingGenerator`](crate::sentence::BacktrackingGenerator), keeping
/// only one index per position. Useful when a caller wants to stop early,
/// e.g. with `.take(n)`.
#[derive(Debug, Clone)]
pub struct CartesianSentences<'a> {
    positions: Vec<Vec<&'a str>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> CartesianSentences<'a> {
    /// Create an iterator over `candidate_sets`.
    ///
    /// Fails with `EmptyInput` under the same conditions as
    /// [`SentenceGenerator::generate`].
    pub fn new(candidate_sets: &'a [CandidateSet]) -> Result<Self> {
        validate_candidate_sets(candidate_sets)?;

        let positions: Vec<Vec<&'a str>> = candidate_sets
            .iter()
            .map(|set| set.iter().map(|word| word.as_str()).collect())
            .collect();
        let indices = vec![0; positions.len()];

        Ok(CartesianSentences {
            positions,
            indices,
            exhausted: false,
        })
    }

    fn current(&self) -> String {
        let mut sentence = String::new();
        for (position, &index) in self.indices.iter().enumerate() {
            if position > 0 {
                sentence.push(' ');
            }
            sentence.push_str(self.positions[position][index]);
        }
        sentence
    }

    /// Advance the last position, carrying into earlier ones.
    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.positions[position].len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CartesianSentences<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let sentence = self.current();
        self.advance();
        Some(sentence)
    }
}

/// Generator backed by [`CartesianSentences`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorGenerator;

impl IteratorGenerator {
    pub fn new() -> Self {
        IteratorGenerator
    }
}

impl SentenceGenerator for IteratorGenerator {
    fn generate(&self, candidate_sets: &[CandidateSet]) -> Result<Vec<String>> {
        Ok(CartesianSentences::new(candidate_sets)?.collect())
    }

    fn name(&self) -> &str {
        "iterator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::sentence::BacktrackingGenerator;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_matches_backtracking_order() {
        let sets = vec![set(&["a", "b", "c"]), set(&["x"]), set(&["1", "2"])];

        let lazy = IteratorGenerator::new().generate(&sets).unwrap();
        let eager = BacktrackingGenerator::new().generate(&sets).unwrap();
        assert_eq!(lazy, eager);
        assert_eq!(lazy.len(), 6);
    }

    #[test]
    fn test_early_stop() {
        let sets = vec![set(&["hello", "hey"]), set(&["earth", "planet", "world"])];
        let first: Vec<String> = CartesianSentences::new(&sets).unwrap().take(2).collect();
        assert_eq!(first, vec!["hello earth", "hello planet"]);
    }

    #[test]
    fn test_empty_input() {
        let err = CartesianSentences::new(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        let sets = vec![CandidateSet::new()];
        let err = CartesianSentences::new(&sets).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }
}
