//! Intent handlers and the groups that expose them.
//!
//! A [`HandlerGroup`] is a set of related intents (every skill has at least
//! its own group plus [`BuiltInIntents`]). Each group publishes a [`Mapper`]:
//! an ordered list of intent names and the closures that answer them. The
//! dispatcher folds mappers into an [`IntentRegistry`] once, at construction.

mod builtins;
mod registry;

use std::fmt;
use std::sync::Arc;

pub use builtins::{AMAZON_PREFIX, BuiltInIntents, CANCEL_INTENT, HELP_INTENT, NOT_HANDLED, STOP_INTENT};
pub use registry::IntentRegistry;

use crate::error::IntentError;
use crate::request::Slots;
use crate::response::ResponseDocument;

/// What a handler produced: the response plus whether the request was
/// understood.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub response: ResponseDocument,
    pub handled: bool,
}

impl Outcome {
    pub fn handled(response: ResponseDocument) -> Self {
        Self { response, handled: true }
    }

    pub fn unhandled(response: ResponseDocument) -> Self {
        Self { response, handled: false }
    }

    pub fn into_parts(self) -> (ResponseDocument, bool) {
        (self.response, self.handled)
    }
}

pub type HandlerResult = Result<Outcome, IntentError>;

/// Intent handler. Slot-less intents receive an empty [`Slots`] and are free
/// to ignore it.
pub type Handler = Arc<dyn Fn(&Slots) -> HandlerResult + Send + Sync>;

/// A set of intents answered together.
pub trait HandlerGroup {
    fn mapper(&self) -> Mapper;
}

/// Ordered intent name to handler entries published by one group.
#[derive(Clone, Default)]
pub struct Mapper {
    entries: Vec<(String, Handler)>,
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Slots) -> HandlerResult + Send + Sync + 'static,
    {
        self.entries.push((name.into(), Arc::new(handler)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl IntoIterator for Mapper {
    type Item = (String, Handler);
    type IntoIter = std::vec::IntoIter<(String, Handler)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.names().map(|name| (name, "<handler>"))).finish()
    }
}
