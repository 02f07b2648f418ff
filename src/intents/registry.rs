use std::collections::HashMap;
use std::fmt;

use crate::intents::{Handler, HandlerGroup, Mapper};

/// Intent name to handler lookup table.
///
/// Built by folding group mappers left to right. When two groups claim the
/// same name the one merged first keeps it and the later claim is dropped
/// without notice, so register higher-priority groups first.
#[derive(Clone, Default)]
pub struct IntentRegistry {
    handlers: HashMap<String, Handler>,
}

impl IntentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: &[&dyn HandlerGroup]) -> Self {
        let mut registry = Self::new();
        for group in groups {
            registry.merge(group.mapper());
        }
        registry
    }

    /// Add the entries of `mapper` whose names are still free.
    pub fn merge(&mut self, mapper: Mapper) {
        for (name, handler) in mapper {
            self.handlers.entry(name).or_insert(handler);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for IntentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentRegistry").field("intents", &self.names()).finish()
    }
}
