//! In-memory capability implementations.
//!
//! Used by tests and by hosts without a browser (server-side rendering),
//! where the controller still needs somewhere to read and write.

use std::collections::{BTreeSet, HashMap};

use crate::env::{ColorSchemeQuery, KeyValueStore, RootNode};

/// `HashMap`-backed [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, e.g. a choice from a previous session.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Class set standing in for `<html>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRoot {
    classes: BTreeSet<String>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Space-separated class list, the way `className` reads.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl RootNode for MemoryRoot {
    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

/// Media capability with a fixed answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
