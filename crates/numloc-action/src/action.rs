//! The [`Action`] trait and the registry the server dispatches through.

use crate::dispatcher::{CollectingDispatcher, Dispatcher, Response};
use crate::events::Event;
use crate::tracker::Tracker;
use std::collections::BTreeMap;

/// Bot domain as sent by the runtime. Passed through untouched.
pub type Domain = serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("No registered action found for name '{0}'.")]
    NotFound(String),
    #[error("action '{action}' failed: {message}")]
    Failed { action: String, message: String },
}

/// A custom action the dialogue runtime can invoke by name.
pub trait Action: Send + Sync {
    fn name(&self) -> &str;

    /// Run once for the current turn. Messages go to `dispatcher`; the
    /// returned events are applied to the conversation by the runtime.
    fn run(
        &self,
        dispatcher: &mut dyn Dispatcher,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Result<Vec<Event>, ActionError>;
}

/// Everything an invocation produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    pub events: Vec<Event>,
    pub responses: Vec<Response>,
}

/// Actions keyed by name.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action`, replacing any action with the same name.
    pub fn register(&mut self, action: impl Action + 'static) -> &mut Self {
        let name = action.name().to_string();
        if self.actions.insert(name.clone(), Box::new(action)).is_some() {
            tracing::warn!(%name, "action registered twice; keeping the latest");
        }
        self
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn run(
        &self,
        name: &str,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Result<ActionOutcome, ActionError> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| ActionError::NotFound(name.to_string()))?;

        let mut dispatcher = CollectingDispatcher::new();
        let events = action.run(&mut dispatcher, tracker, domain)?;
        tracing::debug!(
            action = %name,
            sender = %tracker.sender_id,
            events = events.len(),
            responses = dispatcher.messages.len(),
            "action finished"
        );
        Ok(ActionOutcome {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
