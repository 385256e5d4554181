use std::collections::HashSet;

use delegate::delegate;
use serde::{Serialize, Serializer};

/// Distinct words in the order they were first recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FoundWords {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl FoundWords {
    pub fn new() -> FoundWords {
        Default::default()
    }

    /// Returns false if the word was already recorded.
    pub fn record(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string());
        self.words.push(word.to_string());
        true
    }

    /// Appends the words of `other` not already present, keeping their order.
    pub fn merge(&mut self, other: FoundWords) {
        for word in other.words {
            if !self.seen.contains(&word) {
                self.seen.insert(word.clone());
                self.words.push(word);
            }
        }
    }

    pub fn all(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.words
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, String>;
        }
    }
}

impl Serialize for FoundWords {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_seq(&self.words)
    }
}

impl IntoIterator for FoundWords {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a FoundWords {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
