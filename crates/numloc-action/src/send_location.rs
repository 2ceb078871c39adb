//! `action_send_location`: answers "where is …" with a title and map link.
//!
//! Candidate text is taken, in priority order, from the configured memory
//! slot, then the first entity of the configured type, then the raw message.
//! A list trigger enumerates every place instead of resolving one.

use crate::action::{Action, ActionError, Domain};
use crate::commands::Command;
use crate::dispatcher::Dispatcher;
use crate::events::Event;
use crate::tracker::Tracker;
use crate::{maps, replies};
use numloc_core::config::ActionSettings;
use numloc_core::{PlaceStore, Resolver};
use std::sync::Arc;

pub const DEFAULT_NAME: &str = "action_send_location";
pub const DEFAULT_SLOT: &str = "place";

#[derive(Debug, Clone)]
pub struct ActionSendLocation {
    store: Arc<PlaceStore>,
    name: String,
    slot: String,
    entity: String,
}

impl ActionSendLocation {
    /// Action with the default name, slot and entity type.
    pub fn new(store: Arc<PlaceStore>) -> Self {
        Self {
            store,
            name: DEFAULT_NAME.to_string(),
            slot: DEFAULT_SLOT.to_string(),
            entity: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_settings(store: Arc<PlaceStore>, settings: &ActionSettings) -> Self {
        Self {
            store,
            name: settings.name.clone(),
            slot: settings.slot.clone(),
            entity: settings.entity.clone(),
        }
    }

    /// Text the action will work on for this turn.
    pub fn candidate_text<'t>(&self, tracker: &'t Tracker) -> &'t str {
        tracker
            .slot_text(&self.slot)
            .or_else(|| tracker.entity_text(&self.entity))
            .or_else(|| tracker.latest_text())
            .unwrap_or_default()
    }
}

impl Action for ActionSendLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(
        &self,
        dispatcher: &mut dyn Dispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Result<Vec<Event>, ActionError> {
        let text = match Command::parse(self.candidate_text(tracker)) {
            Command::ListPlaces => {
                let titles = self.store.titles();
                if titles.is_empty() {
                    dispatcher.utter_message(replies::NO_PLACES.to_string());
                } else {
                    dispatcher.utter_message(replies::place_list(&titles));
                }
                return Ok(Vec::new());
            }
            Command::Locate(text) => text,
        };

        let Some(place) = Resolver::new(&self.store).resolve(&text) else {
            tracing::info!(sender = %tracker.sender_id, input = %text, "location not resolved");
            dispatcher.utter_message(replies::HELP.to_string());
            return Ok(Vec::new());
        };

        tracing::info!(sender = %tracker.sender_id, input = %text, key = %place.key, "location resolved");
        let url = maps::place_url(place);
        dispatcher.utter_message(replies::place_found(place, &url));
        Ok(vec![Event::slot_set(self.slot.as_str(), place.title.as_str())])
    }
}
