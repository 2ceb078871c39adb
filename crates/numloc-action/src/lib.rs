//! numloc-action: glue between the dialogue runtime and the resolver.
//!
//! The runtime hands an action a [`Tracker`] snapshot; the action writes
//! replies to a [`Dispatcher`] and returns [`Event`]s for the runtime to
//! apply. [`ActionRegistry`] routes invocations by action name.

pub mod action;
pub mod commands;
pub mod dispatcher;
pub mod events;
pub mod maps;
pub mod replies;
pub mod send_location;
pub mod tracker;

pub use action::{Action, ActionError, ActionOutcome, ActionRegistry, Domain};
pub use dispatcher::{CollectingDispatcher, Dispatcher, Response};
pub use events::Event;
pub use send_location::ActionSendLocation;
pub use tracker::{Entity, LatestMessage, Tracker};
