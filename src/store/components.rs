//! Connected-component index over a [`SynonymGraph`].

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::store::graph::SynonymGraph;

/// Equivalence classes of a synonym graph.
///
/// The index is derived data: it is rebuilt from scratch with
/// [`ComponentIndex::build`] whenever the edge set changes, since removing an
/// edge can split a class.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    /// Word to position in `components`.
    word_to_component: AHashMap<String, usize>,
    /// Each class, in discovery order.
    components: Vec<BTreeSet<String>>,
}

impl ComponentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        ComponentIndex {
            word_to_component: AHashMap::new(),
            components: Vec::new(),
        }
    }

    /// Compute every connected component of `graph`.
    ///
    /// Runs an iterative depth-first traversal from each word that has not
    /// been assigned yet. O(V + E).
    pub fn build(graph: &SynonymGraph) -> Self {
        let mut index = ComponentIndex::new();
        let mut stack: Vec<&str> = Vec::new();

        for start in graph.words() {
            if index.word_to_component.contains_key(start) {
                continue;
            }

            let id = index.components.len();
            let mut component = BTreeSet::new();
            stack.push(start);

            while let Some(word) = stack.pop() {
                if !component.insert(word.to_string()) {
                    continue;
                }
                index.word_to_component.insert(word.to_string(), id);

                if let Some(neighbors) = graph.neighbors(word) {
                    stack.extend(
                        neighbors
                            .iter()
                            .map(|neighbor| neighbor.as_str())
                            .filter(|neighbor| !component.contains(*neighbor)),
                    );
                }
            }

            index.components.push(component);
        }

        index
    }

    /// The class containing `word`, if `word` has any edge.
    pub fn component_of(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.word_to_component
            .get(word)
            .and_then(|&id| self.components.get(id))
    }

    /// All classes.
    pub fn components(&self) -> &[BTreeSet<String>] {
        &self.components
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
