//! Test builders: ergonomic constructors for `Place` and `Tracker`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Option`.

use numloc::action::{Entity, Tracker};
use numloc::campus::Place;

// ---------------------------------------------------------------------------
// PlaceBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Place`] test fixtures.
///
/// ```rust
/// let place = PlaceBuilder::new("num_dorm_4", "4-р дотуур байр")
///     .alias("dorm 4")
///     .url("https://maps.app.goo.gl/dorm4")
///     .build();
/// ```
pub struct PlaceBuilder {
    key: String,
    title: String,
    query: String,
    aliases: Vec<String>,
    url: Option<String>,
}

impl PlaceBuilder {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            query: format!("{key} query"),
            key,
            title: title.into(),
            aliases: Vec::new(),
            url: None,
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self) -> Place {
        Place::new(
            &self.key,
            &self.title,
            &self.query,
            &self.aliases,
            self.url.as_deref(),
        )
        .expect("PlaceBuilder requires non-empty key, title and query")
    }
}

// ---------------------------------------------------------------------------
// TrackerBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Tracker`] snapshots.
///
/// ```rust
/// let tracker = TrackerBuilder::new()
///     .text("2-р байр хаана вэ")
///     .entity("place", "2-р байр")
///     .build();
/// ```
#[derive(Default)]
pub struct TrackerBuilder {
    tracker: Tracker,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        let mut tracker = Tracker::default();
        tracker.sender_id = "test-user".to_string();
        Self { tracker }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.tracker.latest_message.text = Some(text.into());
        self
    }

    pub fn slot(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.tracker.slots.insert(name.into(), value.into());
        self
    }

    pub fn entity(mut self, entity: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.tracker.latest_message.entities.push(Entity {
            entity: entity.into(),
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> Tracker {
        self.tracker
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Tracker whose only input is the raw message text.
pub fn text_tracker(text: &str) -> Tracker {
    TrackerBuilder::new().text(text).build()
}
