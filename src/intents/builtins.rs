use crate::intents::{HandlerGroup, HandlerResult, Mapper, Outcome};
use crate::response::{ResponseOptions, build_response};

/// Prefix of the intents the platform itself defines.
pub const AMAZON_PREFIX: &str = "AMAZON.";

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
/// Fallback answer for anything no handler took.
pub const NOT_HANDLED: &str = "NotHandled";

/// The standard intents every skill has to answer.
///
/// Cancel, stop and help end the session. `NotHandled` keeps it open so the
/// user can rephrase, and reports the request as not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltInIntents {
    pub help_message: String,
    pub not_handled_message: String,
    pub stop_message: String,
    pub cancel_message: String,
}

impl BuiltInIntents {
    pub fn new(help_message: impl Into<String>, not_handled_message: impl Into<String>) -> Self {
        Self {
            help_message: help_message.into(),
            not_handled_message: not_handled_message.into(),
            stop_message: "stop".to_string(),
            cancel_message: "cancel".to_string(),
        }
    }

    pub fn with_stop_message(mut self, message: impl Into<String>) -> Self {
        self.stop_message = message.into();
        self
    }

    pub fn with_cancel_message(mut self, message: impl Into<String>) -> Self {
        self.cancel_message = message.into();
        self
    }
}

fn closing(message: String) -> impl Fn(&crate::request::Slots) -> HandlerResult + Send + Sync + 'static {
    move |_| Ok(Outcome::handled(build_response(&message, ResponseOptions::default())))
}

impl HandlerGroup for BuiltInIntents {
    fn mapper(&self) -> Mapper {
        let not_handled = self.not_handled_message.clone();

        Mapper::new()
            .intent(CANCEL_INTENT, closing(self.cancel_message.clone()))
            .intent(STOP_INTENT, closing(self.stop_message.clone()))
            .intent(HELP_INTENT, closing(self.help_message.clone()))
            .intent(NOT_HANDLED, move |_| {
                let options = ResponseOptions::default().should_end_session(false);
                Ok(Outcome::unhandled(build_response(&not_handled, options)))
            })
    }
}
