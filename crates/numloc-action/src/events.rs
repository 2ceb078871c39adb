//! State-update events returned to the dialogue runtime.

use serde::{Deserialize, Serialize};

/// An event the runtime applies to the conversation after the action ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// Set a memory slot. Serialized as `{"event": "slot", "name", "value"}`.
    #[serde(rename = "slot")]
    SlotSet {
        name: String,
        value: serde_json::Value,
    },
}

impl Event {
    pub fn slot_set(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: value.into(),
        }
    }
}
