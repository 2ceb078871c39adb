//! Conversation state handed to an action by the dialogue runtime.
//!
//! Only the parts the actions read are modelled; every other field of the
//! runtime's tracker payload is accepted and ignored.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Snapshot of one conversation at the moment the action is invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: String,
    /// Memory slots, keyed by slot name. Values are arbitrary JSON.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: HashMap<String, serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_message: LatestMessage,
}

/// The most recent user message as parsed by the NLU pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entities: Vec<Entity>,
}

/// One extracted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Tracker {
    /// Raw slot value, if the slot is set to anything but `null`.
    pub fn get_slot(&self, name: &str) -> Option<&serde_json::Value> {
        self.slots.get(name).filter(|v| !v.is_null())
    }

    /// Slot value as text, if it is a non-empty string.
    pub fn slot_text(&self, name: &str) -> Option<&str> {
        self.get_slot(name).and_then(non_empty_str)
    }

    /// Value of the first entity of type `entity` in the latest message,
    /// if that value is a non-empty string. Later entities of the same
    /// type are not consulted.
    pub fn entity_text(&self, entity: &str) -> Option<&str> {
        self.latest_message
            .entities
            .iter()
            .find(|e| e.entity == entity)
            .and_then(|e| non_empty_str(&e.value))
    }

    /// Raw text of the latest message.
    pub fn latest_text(&self) -> Option<&str> {
        self.latest_message.text.as_deref()
    }
}

/// The runtime sends `null` for absent collections; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty_str(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
