use crate::errors::ChatResult;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

pub const REPLY_PREFIX: &str = "Received message: ";

/// One inbound chat record. Only `chat_message` is recognized; any other
/// attribute the client sends along (htmx adds its own headers object) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub chat_message: Option<Value>,
}

impl ChatMessage {
    pub fn new<S: Into<String>>(text: S) -> Self {
        ChatMessage {
            chat_message: Some(Value::String(text.into())),
        }
    }

    /// Parse a JSON object. A missing or `null` `chat_message` is accepted,
    /// anything that is not an object is rejected.
    pub fn parse(text: &str) -> ChatResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object").into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The field as reply text: strings verbatim, absent or `null` as empty,
    /// other values as compact JSON.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.chat_message {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(text)) => Cow::Borrowed(text),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn reply(&self) -> String {
        format!("{}{}", REPLY_PREFIX, self.text())
    }
}
