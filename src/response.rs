//! Building the response document returned to the voice service.
//!
//! Every webhook answer has the same skeleton: speech to say, a card for the
//! companion app, whether the session stays open, and optionally a reprompt
//! and dialog directives. The builders below produce those pieces; the
//! document serializes straight into the response JSON the service expects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RESPONSE_VERSION: &str = "1.0";

/// How output text is to be read out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechType {
    #[default]
    Ssml,
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    PlainText { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardType {
    #[default]
    Simple,
    Standard,
}

/// Image URLs for a Standard card, for small and large screens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<CardImage>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

impl Reprompt {
    /// A plain-text reprompt, the usual kind.
    pub fn plain(text: &str) -> Self {
        build_reprompt(text, SpeechType::PlainText)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Ask the user to confirm one slot before the intent is fulfilled.
    #[serde(rename = "Dialog.ConfirmSlot", rename_all = "camelCase")]
    ConfirmSlot { slot_to_confirm: String, updated_intent: Value },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub should_end_session: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<Directive>>,
}

/// The complete webhook answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseDocument {
    pub version: &'static str,
    pub response: ResponseBody,
}

impl ResponseDocument {
    pub fn should_end_session(&self) -> bool {
        self.response.should_end_session
    }

    pub fn output_speech(&self) -> &OutputSpeech {
        &self.response.output_speech
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Knobs for [`build_response`].
///
/// The defaults end the session, speak SSML, use an empty card title and
/// carry neither reprompt nor directives.
#[derive(Debug, Clone)]
pub struct ResponseOptions {
    pub card_title: String,
    pub should_end_session: bool,
    pub reprompt: Option<Reprompt>,
    /// Slot name to the updated intent sent along with the confirmation.
    pub confirm_slots: IndexMap<String, Value>,
    pub speech_type: SpeechType,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            card_title: String::new(),
            should_end_session: true,
            reprompt: None,
            confirm_slots: IndexMap::new(),
            speech_type: SpeechType::Ssml,
        }
    }
}

impl ResponseOptions {
    pub fn card_title(mut self, title: impl Into<String>) -> Self {
        self.card_title = title.into();
        self
    }

    pub fn should_end_session(mut self, end: bool) -> Self {
        self.should_end_session = end;
        self
    }

    pub fn reprompt(mut self, reprompt: Reprompt) -> Self {
        self.reprompt = Some(reprompt);
        self
    }

    pub fn confirm_slot(mut self, slot: impl Into<String>, updated_intent: Value) -> Self {
        self.confirm_slots.insert(slot.into(), updated_intent);
        self
    }

    pub fn speech_type(mut self, speech_type: SpeechType) -> Self {
        self.speech_type = speech_type;
        self
    }
}

/// Speech for `outputSpeech` or a reprompt.
///
/// SSML text is wrapped in `<speak>` as-is; producing well-formed markup is
/// up to the caller.
pub fn build_output_speech(text: &str, speech_type: SpeechType) -> OutputSpeech {
    match speech_type {
        SpeechType::Ssml => OutputSpeech::Ssml { ssml: format!("<speak>{text}</speak>") },
        SpeechType::PlainText => OutputSpeech::PlainText { text: text.to_string() },
    }
}

/// A card for the companion app. Only Standard cards show an image.
pub fn build_card(title: &str, text: &str, card_type: CardType, image: Option<CardImage>) -> Card {
    match card_type {
        CardType::Simple => Card::Simple { title: title.to_string(), content: text.to_string() },
        CardType::Standard => Card::Standard { title: title.to_string(), text: text.to_string(), image },
    }
}

pub fn build_reprompt(text: &str, speech_type: SpeechType) -> Reprompt {
    Reprompt { output_speech: build_output_speech(text, speech_type) }
}

/// One `Dialog.ConfirmSlot` directive per entry, in insertion order.
pub fn build_confirm_slot_directives(slots: &IndexMap<String, Value>) -> Vec<Directive> {
    slots
        .iter()
        .map(|(slot, updated_intent)| Directive::ConfirmSlot {
            slot_to_confirm: slot.clone(),
            updated_intent: updated_intent.clone(),
        })
        .collect()
}

/// Assemble a full response around `text`.
///
/// A Simple card with the raw text is always attached, even when title and
/// text are empty.
pub fn build_response(text: &str, options: ResponseOptions) -> ResponseDocument {
    let directives =
        (!options.confirm_slots.is_empty()).then(|| build_confirm_slot_directives(&options.confirm_slots));

    ResponseDocument {
        version: RESPONSE_VERSION,
        response: ResponseBody {
            output_speech: build_output_speech(text, options.speech_type),
            card: build_card(&options.card_title, text, CardType::Simple, None),
            should_end_session: options.should_end_session,
            reprompt: options.reprompt,
            directives,
        },
    }
}
