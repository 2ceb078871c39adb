//! numloc: campus location assistant action server.
//!
//! Resolves Mongolian free-text place references ("2-р байр", "4-р дотуур
//! байр", "МУИС") to a configured campus location and answers with a map
//! link. This crate wires the layers together and exposes them so that
//! integration tests and the binary can import them directly.
//!
//! # Architecture
//!
//! ```text
//! dialogue runtime ──► server (/webhook) ──► ActionRegistry ──► ActionSendLocation
//!                                                                   │
//!                                            PlaceStore ◄── Resolver┘
//! ```
//!
//! The place table is loaded once and shared read-only behind an `Arc`.

pub mod server;

pub use numloc_action as action;
pub use numloc_core as campus;

use numloc_action::{ActionRegistry, ActionSendLocation};
use numloc_core::config::ActionSettings;
use numloc_core::PlaceStore;
use std::sync::Arc;

/// Registry with every action this server provides.
pub fn build_registry(store: Arc<PlaceStore>, settings: &ActionSettings) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register(ActionSendLocation::with_settings(store, settings));
    registry
}
