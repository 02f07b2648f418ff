//! Typed view of the inbound webhook request.
//!
//! Only the fields the dispatcher and handlers read are modelled; everything
//! else in the envelope (`context`, `session.user`, ...) is kept as raw JSON.

use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DispatchError, IntentError};

static NO_SLOTS: Lazy<Slots> = Lazy::new(Slots::new);

/// The three request lifecycle types the dispatcher understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Launch,
    Intent,
    SessionEnded,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Launch => "LaunchRequest",
            RequestType::Intent => "IntentRequest",
            RequestType::SessionEnded => "SessionEndedRequest",
        }
    }
}

impl FromStr for RequestType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LaunchRequest" => Ok(RequestType::Launch),
            "IntentRequest" => Ok(RequestType::Intent),
            "SessionEndedRequest" => Ok(RequestType::SessionEnded),
            other => Err(DispatchError::UnknownRequestType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub request: RequestBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Attributes the caller carried over from the previous turn, untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    /// Raw `request.type`; checked at dispatch time.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Why the session ended (`SessionEndedRequest` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Slots::is_empty")]
    pub slots: Slots,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    /// Resolutions and any other slot metadata.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Slots of one intent, in the order the request listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots(IndexMap<String, Slot>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.0.get(name)
    }

    /// Value of a slot that must have been filled.
    pub fn value(&self, name: &str) -> Result<&str, IntentError> {
        self.get(name).and_then(|slot| slot.value.as_deref()).ok_or_else(|| IntentError::MissingSlot(name.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, slot: Slot) -> Option<Slot> {
        self.0.insert(name.into(), slot)
    }

    /// Convenience for building a filled slot named after its key.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let slot = Slot { name: Some(name.clone()), value: Some(value.into()), ..Slot::default() };
        self.insert(name, slot);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.0.iter().map(|(name, slot)| (name.as_str(), slot))
    }
}

impl InboundRequest {
    /// Deserialize a request from an already-parsed JSON body.
    pub fn from_value(body: Value) -> Result<Self, DispatchError> {
        Ok(serde_json::from_value(body)?)
    }

    pub fn request_type(&self) -> Result<RequestType, DispatchError> {
        self.request.kind.parse()
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.request.intent.as_ref()?.name.as_deref()
    }

    /// Slots of the intent; empty when the request has none.
    pub fn slots(&self) -> &Slots {
        self.request.intent.as_ref().map(|intent| &intent.slots).unwrap_or(&*NO_SLOTS)
    }

    pub fn locale(&self) -> Option<&str> {
        self.request.locale.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref()?.session_id.as_deref()
    }

    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.session.as_ref()?.attributes.as_ref()
    }
}
