//! Symmetric adjacency structure over words.

use std::collections::BTreeSet;

use ahash::AHashMap;

/// An undirected synonym graph.
///
/// Every edge (a, b) is stored as the two directed entries a→b and b→a so
/// that traversal from either side sees the same neighbors. A self-pair
/// (a, a) is stored as a single a→a entry and does not affect connectivity.
/// Words without any edge are not kept in the map.
#[derive(Debug, Clone, Default)]
pub struct SynonymGraph {
    adjacency: AHashMap<String, BTreeSet<String>>,
}

impl SynonymGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        SynonymGraph {
            adjacency: AHashMap::new(),
        }
    }

    /// Insert the edge (a, b). Returns `true` if the graph changed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let forward = self.add_directed_edge(a, b);
        let backward = self.add_directed_edge(b, a);
        forward || backward
    }

    /// Remove the edge (a, b) if present. Returns `true` if the graph changed.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let forward = self.remove_directed_edge(a, b);
        let backward = self.remove_directed_edge(b, a);
        forward || backward
    }

    /// Remove every edge incident to `word`, in both directions.
    ///
    /// Returns the number of neighbors `word` was disconnected from.
    pub fn remove_word(&mut self, word: &str) -> usize {
        let Some(neighbors) = self.adjacency.remove(word) else {
            return 0;
        };

        let mut severed = 0;
        for neighbor in &neighbors {
            if neighbor == word {
                continue;
            }
            self.remove_directed_edge(neighbor, word);
            severed += 1;
        }
        severed
    }

    /// Direct neighbors of `word`, if it has any edge.
    pub fn neighbors(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(word)
    }

    /// Check whether the edge (a, b) exists.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// Check whether `word` has at least one edge.
    pub fn contains_word(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Iterate over all words that have at least one edge.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(|word| word.as_str())
    }

    /// Number of words with at least one edge.
    pub fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, self-pairs included.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(word, neighbors)| {
                neighbors
                    .iter()
                    .filter(|neighbor| word.as_str() <= neighbor.as_str())
                    .count()
            })
            .sum()
    }

    /// Check if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn add_directed_edge(&mut self, from: &str, to: &str) -> bool {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string())
    }

    fn remove_directed_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return false;
        };
        let removed = neighbors.remove(to);
        if neighbors.is_empty() {
            self.adjacency.remove(from);
        }
        removed
    }
}
