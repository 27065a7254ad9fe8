//! Integration tests for the synonym store and sentence generation.

use std::collections::BTreeSet;

use synonymous::prelude::*;
use synonymous::sentence::combination_count;

fn set(words: &[&str]) -> CandidateSet {
    words.iter().map(|w| w.to_string()).collect()
}

fn hello_world_store() -> Result<SynonymStore> {
    let store = SynonymStore::new();
    store.add_synonym_pair("hello", "hey")?;
    store.add_synonym_pair("world", "earth")?;
    store.add_synonym_pair("planet", "earth")?;
    Ok(store)
}

#[test]
fn test_hello_world_sentences() -> Result<()> {
    let store = hello_world_store()?;
    assert_eq!(store.resolve("earth")?, set(&["earth", "planet", "world"]));

    let candidate_sets = vec![store.resolve("hello")?, store.resolve("world")?];
    let sentences = BacktrackingGenerator::new().generate(&candidate_sets)?;

    let expected: BTreeSet<String> = [
        "hello world",
        "hello earth",
        "hello planet",
        "hey world",
        "hey earth",
        "hey planet",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(sentences.len(), 6);
    assert_eq!(sentences.into_iter().collect::<BTreeSet<_>>(), expected);
    Ok(())
}

#[test]
fn test_blacklist_after_scenario() -> Result<()> {
    let store = hello_world_store()?;
    store.blacklist_word("earth")?;

    assert_eq!(store.resolve("world")?, set(&["world"]));
    assert_eq!(store.resolve("planet")?, set(&["planet"]));
    assert_eq!(
        store.resolve("earth").unwrap_err().kind(),
        ErrorKind::BlacklistedWord
    );
    for component in store.components() {
        assert!(!component.contains("earth"));
    }
    Ok(())
}

#[test]
fn test_double_remove_is_noop() -> Result<()> {
    let store = hello_world_store()?;
    store.remove_synonym_pair("planet", "earth")?;
    let stats = store.stats();
    let components = store.components();

    store.remove_synonym_pair("planet", "earth")?;
    assert_eq!(store.stats(), stats);
    assert_eq!(store.components(), components);
    Ok(())
}

#[test]
fn test_transitivity_over_chain() -> Result<()> {
    let store = SynonymStore::new();
    let words = ["a", "b", "c", "d", "e", "f"];
    for pair in words.windows(2) {
        store.add_synonym_pair(pair[0], pair[1])?;
    }

    let first = store.resolve("a")?;
    assert_eq!(first, store.resolve("f")?);
    assert_eq!(first.len(), words.len());

    // Cutting the chain in the middle splits the class in two.
    store.remove_synonym_pair("d", "c")?;
    assert_eq!(store.resolve("a")?, set(&["a", "b", "c"]));
    assert_eq!(store.resolve("f")?, set(&["d", "e", "f"]));
    Ok(())
}

#[test]
fn test_classes_partition_words() -> Result<()> {
    let store = SynonymStore::from_synonym_groups(
        [
            vec!["quick", "fast", "rapid"],
            vec!["big", "large"],
            vec!["large", "huge"],
            vec!["small", "tiny"],
        ],
        StoreConfig::default(),
    )?;

    let components = store.components();
    assert_eq!(components.len(), 3);

    let mut seen = BTreeSet::new();
    for component in &components {
        for word in component {
            assert!(seen.insert(word.clone()), "'{word}' is in two classes");
            assert_eq!(&store.resolve(word)?, component);
        }
    }
    assert_eq!(seen.len(), store.stats().words);
    Ok(())
}

#[test]
fn test_case_sensitive_words() -> Result<()> {
    let store = SynonymStore::new();
    store.add_synonym_pair("Earth", "World")?;
    assert_eq!(store.resolve("earth")?, set(&["earth"]));
    assert_eq!(store.resolve("Earth")?, set(&["Earth", "World"]));
    Ok(())
}

#[test]
fn test_output_size_matches_product() -> Result<()> {
    let store = SynonymStore::from_synonym_groups(
        [vec!["a1", "a2", "a3"], vec!["b1", "b2"], vec!["c1", "c2", "c3", "c4"]],
        StoreConfig::default(),
    )?;
    let candidate_sets: Vec<CandidateSet> = ["a1", "b2", "c3", "lonely"]
        .iter()
        .map(|w| store.resolve(w))
        .collect::<Result<_>>()?;

    assert_eq!(combination_count(&candidate_sets), Some(24));
    let sentences = BacktrackingGenerator::new().generate(&candidate_sets)?;
    assert_eq!(sentences.len(), 24);
    assert!(sentences.iter().all(|s| s.split(' ').count() == 4));
    assert!(sentences.iter().all(|s| s.ends_with(" lonely")));

    let lazy: Vec<String> = CartesianSentences::new(&candidate_sets)?.collect();
    assert_eq!(lazy, sentences);
    Ok(())
}
