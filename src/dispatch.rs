//! Routing of one webhook request to exactly one handler.
//!
//! ```text
//! request.type
//!   LaunchRequest        -> launch message, session stays open
//!   SessionEndedRequest  -> session-end message, session closes
//!   IntentRequest
//!     AMAZON.*           -> built-in registry only
//!     anything else      -> caller registry
//!       miss / handler error -> built-in NotHandled (logged)
//!   other                -> DispatchError::UnknownRequestType
//! ```
//!
//! The dispatcher holds no per-request state: build it once with the skill's
//! handler groups and share it between requests.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{DispatchError, DispatchResult};
use crate::intents::{AMAZON_PREFIX, HandlerGroup, IntentRegistry, NOT_HANDLED, Outcome};
use crate::request::{InboundRequest, RequestType, Slots};
use crate::response::{ResponseOptions, build_response};

/// Texts for the session lifecycle requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub launch: String,
    pub session_end: String,
}

impl Messages {
    pub fn new(launch: impl Into<String>, session_end: impl Into<String>) -> Self {
        Self { launch: launch.into(), session_end: session_end.into() }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new("Welcome", "Good bye")
    }
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    built_ins: IntentRegistry,
    intents: IntentRegistry,
    messages: Messages,
}

impl Dispatcher {
    /// Build a dispatcher from the built-in group and the skill's own groups.
    ///
    /// On a name claimed by several `groups`, the earliest group wins.
    pub fn new(built_ins: &dyn HandlerGroup, messages: Messages, groups: &[&dyn HandlerGroup]) -> DispatchResult<Self> {
        let built_ins = IntentRegistry::from_groups(&[built_ins]);
        if !built_ins.contains(NOT_HANDLED) {
            return Err(DispatchError::MissingBuiltIn(NOT_HANDLED));
        }

        Ok(Self { built_ins, intents: IntentRegistry::from_groups(groups), messages })
    }

    pub fn intents(&self) -> &IntentRegistry {
        &self.intents
    }

    pub fn dispatch(&self, request: &InboundRequest) -> DispatchResult<Outcome> {
        match request.request_type()? {
            RequestType::Launch => Ok(self.launch()),
            RequestType::SessionEnded => Ok(self.session_end()),
            RequestType::Intent => self.intent(request),
        }
    }

    /// Deserialize a raw JSON body and dispatch it.
    pub fn dispatch_json(&self, body: &Value) -> DispatchResult<Outcome> {
        let request = InboundRequest::deserialize(body)?;
        self.dispatch(&request)
    }

    fn launch(&self) -> Outcome {
        let options = ResponseOptions::default().should_end_session(false);
        Outcome::handled(build_response(&self.messages.launch, options))
    }

    fn session_end(&self) -> Outcome {
        Outcome::handled(build_response(&self.messages.session_end, ResponseOptions::default()))
    }

    fn intent(&self, request: &InboundRequest) -> DispatchResult<Outcome> {
        let name = request.intent_name();

        if let Some(name) = name.filter(|name| name.starts_with(AMAZON_PREFIX)) {
            debug!(intent = name, "dispatching built-in intent");
            return self.built_in(name);
        }

        match name.and_then(|name| self.intents.get(name)) {
            Some(handler) => match handler(request.slots()) {
                Ok(outcome) => {
                    debug!(intent = ?name, handled = outcome.handled, "intent answered");
                    return Ok(outcome);
                }
                Err(err) => error!(intent = name.unwrap_or_default(), error = %err, "intent handler failed"),
            },
            None => error!(intent = name.unwrap_or_default(), "intent not handled"),
        }

        self.built_in(NOT_HANDLED)
    }

    fn built_in(&self, name: &str) -> DispatchResult<Outcome> {
        let handler = self.built_ins.get(name).ok_or_else(|| DispatchError::UnknownBuiltIn(name.to_string()))?;
        handler(&Slots::new()).map_err(|source| DispatchError::BuiltIn { name: name.to_string(), source })
    }
}
