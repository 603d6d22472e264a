use std::collections::BTreeSet;
use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("key {key} matches multiple entries: {}", .candidates.join(", "))]
    AmbiguousKey {
        key: String,
        candidates: Vec<String>,
    },
}

impl LookupError {
    // Keys are captured via Debug so the error stays key-type-agnostic.
    pub(crate) fn key_not_found<K: Debug>(key: &K) -> Self {
        LookupError::KeyNotFound(format!("{key:?}"))
    }

    pub(crate) fn ambiguous_key<K: Debug + Ord>(key: &K, candidates: &BTreeSet<K>) -> Self {
        LookupError::AmbiguousKey {
            key: format!("{key:?}"),
            candidates: candidates.iter().map(|k| format!("{k:?}")).collect(),
        }
    }
}
