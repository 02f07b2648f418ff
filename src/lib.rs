//! Webhook helper for Alexa-style voice skills.
//!
//! The surrounding web application owns transport: it receives the request
//! JSON, hands it to a [`Dispatcher`] and writes the returned
//! [`ResponseDocument`] back out.
//!
//! ```
//! use alexa_skill::{BuiltInIntents, Dispatcher, HandlerGroup, Mapper, Messages, Outcome};
//! use alexa_skill::{ResponseOptions, build_response};
//! use serde_json::json;
//!
//! struct Greetings;
//!
//! impl HandlerGroup for Greetings {
//!     fn mapper(&self) -> Mapper {
//!         Mapper::new().intent("EXAMPLE.hello", |_| {
//!             Ok(Outcome::handled(build_response("Hello. Nice to meet you.", ResponseOptions::default())))
//!         })
//!     }
//! }
//!
//! let built_ins = BuiltInIntents::new("Say hi to us", "Sorry, could you repeat?");
//! let dispatcher = Dispatcher::new(&built_ins, Messages::default(), &[&Greetings]).unwrap();
//!
//! let body = json!({ "request": { "type": "IntentRequest", "intent": { "name": "EXAMPLE.hello" } } });
//! let outcome = dispatcher.dispatch_json(&body).unwrap();
//! assert!(outcome.handled);
//! ```
//!
//! Slot values of the built-in date and time types are decoded by the
//! [`temporal`] module.

#[macro_use]
mod macros;

mod dispatch;
mod error;
mod intents;
mod request;
mod response;
pub mod temporal;

pub use dispatch::{Dispatcher, Messages};
pub use error::{DispatchError, DispatchResult, IntentError};
pub use intents::{
    AMAZON_PREFIX, BuiltInIntents, CANCEL_INTENT, HELP_INTENT, Handler, HandlerGroup, HandlerResult, IntentRegistry,
    Mapper, NOT_HANDLED, Outcome, STOP_INTENT,
};
pub use request::{InboundRequest, Intent, RequestBody, RequestType, Session, Slot, Slots};
pub use response::{
    Card, CardImage, CardType, Directive, OutputSpeech, RESPONSE_VERSION, Reprompt, ResponseBody, ResponseDocument,
    ResponseOptions, SpeechType, build_card, build_confirm_slot_directives, build_output_speech, build_reprompt,
    build_response,
};
