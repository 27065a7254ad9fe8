//! Role-gated entry point over the store and the sentence generator.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::{BlacklistPolicy, ServiceConfig};
use crate::error::{Result, SynonymError};
use crate::sentence::{BacktrackingGenerator, SentenceGenerator};
use crate::service::role::Role;
use crate::store::{CandidateSet, SynonymStore};
use crate::word::split_sentence;

/// Synonym service: authorizes mutations and turns sentences into variants.
///
/// The store is injected as an `Arc` so several services (or threads) can
/// share one relation while tests build their own isolated instance.
#[derive(Debug)]
pub struct SynonymService {
    store: Arc<SynonymStore>,
    generator: Box<dyn SentenceGenerator>,
    blacklist_policy: BlacklistPolicy,
}

impl SynonymService {
    /// Create a service from its parts.
    pub fn new(
        store: Arc<SynonymStore>,
        generator: Box<dyn SentenceGenerator>,
        blacklist_policy: BlacklistPolicy,
    ) -> Self {
        SynonymService {
            store,
            generator,
            blacklist_policy,
        }
    }

    /// Create a service over `store` with the backtracking generator and the
    /// default blacklist policy.
    pub fn with_store(store: Arc<SynonymStore>) -> Self {
        Self::new(
            store,
            Box::new(BacktrackingGenerator::new()),
            BlacklistPolicy::default(),
        )
    }

    /// Build a fresh store and service from a configuration.
    ///
    /// Seeds the store from `synonyms_file` (if any), then applies the
    /// configured blacklist.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let store = SynonymStore::with_config(config.store_config());

        if let Some(path) = &config.synonyms_file {
            let added = store.load_synonym_groups(path)?;
            info!("Loaded {added} synonym pairs from {}", path.display());
        }
        for word in &config.blacklist {
            store.blacklist_word(word)?;
        }

        Ok(Self::new(
            Arc::new(store),
            config.generator.build(),
            config.blacklist_policy,
        ))
    }

    /// The shared store behind this service.
    pub fn store(&self) -> &Arc<SynonymStore> {
        &self.store
    }

    /// The configured blacklist policy.
    pub fn blacklist_policy(&self) -> BlacklistPolicy {
        self.blacklist_policy
    }

    /// Link two words as synonyms. Admin only.
    pub fn add_synonym_pair(&self, a: &str, b: &str, role: Role) -> Result<()> {
        authorize(role, "add synonym pairs")?;
        self.store.add_synonym_pair(a, b).inspect_err(|e| {
            warn!("Error adding synonym pair ('{a}', '{b}'): {e}");
        })
    }

    /// Unlink two words. Admin only.
    pub fn remove_synonym_pair(&self, a: &str, b: &str, role: Role) -> Result<()> {
        authorize(role, "remove synonym pairs")?;
        self.store.remove_synonym_pair(a, b).inspect_err(|e| {
            warn!("Error removing synonym pair ('{a}', '{b}'): {e}");
        })
    }

    /// Blacklist a word. Admin only.
    pub fn blacklist_word(&self, word: &str, role: Role) -> Result<()> {
        authorize(role, "blacklist words")?;
        self.store.blacklist_word(word).inspect_err(|e| {
            warn!("Error blacklisting word '{word}': {e}");
        })
    }

    /// Resolve a single word to its candidate set. Open to every role.
    pub fn resolve(&self, word: &str) -> Result<CandidateSet> {
        self.store.resolve(word)
    }

    /// Every variant of `sentence` obtained by substituting each word with a
    /// member of its candidate set.
    pub fn sentences(&self, sentence: &str) -> Result<Vec<String>> {
        let candidate_sets = self
            .candidate_sets(sentence)
            .inspect_err(|e| warn!("Error retrieving sentences for '{sentence}': {e}"))?;

        let sentences = self.generator.generate(&candidate_sets)?;
        debug!(
            "Generated {} sentences for '{sentence}' using {}",
            sentences.len(),
            self.generator.name()
        );
        Ok(sentences)
    }

    /// Run [`SynonymService::sentences`] for several inputs in parallel.
    ///
    /// Results are returned in input order, one per sentence.
    pub fn sentences_batch<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> Vec<Result<Vec<String>>> {
        sentences
            .par_iter()
            .map(|sentence| self.sentences(sentence.as_ref()))
            .collect()
    }

    /// Split `sentence` and resolve every word, applying the blacklist policy.
    pub fn candidate_sets(&self, sentence: &str) -> Result<Vec<CandidateSet>> {
        split_sentence(sentence)?
            .into_iter()
            .map(|word| self.candidates_for(word))
            .collect()
    }

    fn candidates_for(&self, word: &str) -> Result<CandidateSet> {
        match self.store.resolve(word) {
            Err(SynonymError::BlacklistedWord(_))
                if self.blacklist_policy == BlacklistPolicy::KeepOriginal =>
            {
                Ok(BTreeSet::from([word.to_string()]))
            }
            result => result,
        }
    }
}

fn authorize(role: Role, action: &str) -> Result<()> {
    if role.is_admin() {
        return Ok(());
    }
    warn!("Access denied: role '{role}' attempted to {action}");
    Err(SynonymError::access_denied(format!(
        "Only admins can {action}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn service() -> SynonymService {
        let service = SynonymService::with_store(Arc::new(SynonymStore::new()));
        service.add_synonym_pair("hello", "hey", Role::Admin).unwrap();
        service.add_synonym_pair("world", "earth", Role::Admin).unwrap();
        service.add_synonym_pair("planet", "earth", Role::Admin).unwrap();
        service
    }

    #[test]
    fn test_user_cannot_mutate() {
        let service = service();
        let before = service.store().stats();

        let err = service.add_synonym_pair("foo", "bar", Role::User).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        let err = service
            .remove_synonym_pair("world", "earth", Role::User)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        let err = service.blacklist_word("earth", Role::User).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);

        assert_eq!(service.store().stats(), before);
    }

    #[test]
    fn test_access_checked_before_validation() {
        let service = service();
        let err = service.add_synonym_pair("", "bar", Role::User).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
    }

    #[test]
    fn test_sentences() {
        let service = service();
        let sentences = service.sentences("hello world").unwrap();
        assert_eq!(sentences.len(), 6);
        assert!(sentences.contains(&"hey planet".to_string()));
        assert!(sentences.contains(&"hello world".to_string()));
    }

    #[test]
    fn test_blank_sentence() {
        let service = service();
        let err = service.sentences("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWord);
    }

    #[test]
    fn test_blacklist_policy() {
        let store = Arc::new(SynonymStore::new());
        store.add_synonym_pair("hello", "hey").unwrap();
        store.blacklist_word("world").unwrap();

        let failing = SynonymService::with_store(Arc::clone(&store));
        let err = failing.sentences("hello world").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BlacklistedWord);

        let keeping = SynonymService::new(
            store,
            Box::new(BacktrackingGenerator::new()),
            BlacklistPolicy::KeepOriginal,
        );
        assert_eq!(
            keeping.sentences("hello world").unwrap(),
            vec!["hello world", "hey world"]
        );
    }

    #[test]
    fn test_sentences_batch() {
        let service = service();
        let results = service.sentences_batch(&["hello", "world", " "]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 2);
        assert_eq!(results[1].as_ref().unwrap().len(), 3);
        assert!(results[2].is_err());
    }
}
