use std::collections::btree_map::{self, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary answers keyed by symptom identifier.
///
/// Keys are unique; inserting the same key twice keeps the latest answer.
/// Iteration order is the key order, so two sets with the same entries
/// always score identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ResponseSet {
    answers: BTreeMap<String, bool>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous one for the same key.
    pub fn insert(&mut self, key: impl Into<String>, answer: bool) -> Option<bool> {
        self.answers.insert(key.into(), answer)
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.answers.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of "yes" answers.
    pub fn yes_count(&self) -> usize {
        self.answers.values().filter(|v| **v).count()
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.answers.values().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.answers.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, bool)> for ResponseSet {
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        self.answers
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = (&'a String, &'a bool);
    type IntoIter = btree_map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}
