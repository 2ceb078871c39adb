//! Outgoing message sink.
//!
//! Actions never talk to the user directly; they hand text to a
//! [`Dispatcher`] and the host runtime delivers it.

use serde::{Deserialize, Serialize};

/// One bot message produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
}

/// Sink for bot messages.
pub trait Dispatcher {
    fn utter_message(&mut self, text: String);
}

/// Dispatcher that keeps every message so it can be returned in the
/// webhook response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingDispatcher {
    pub messages: Vec<Response>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_messages(self) -> Vec<Response> {
        self.messages
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter_message(&mut self, text: String) {
        tracing::trace!(%text, "utter");
        self.messages.push(Response { text });
    }
}
