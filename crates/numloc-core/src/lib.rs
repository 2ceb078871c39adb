//! numloc-core: campus location resolution.
//!
//! This crate holds the two pieces that do the actual work, plus the shared
//! types and settings used by the action crate and the binary.
//!
//! # Architecture
//!
//! ```text
//! places YAML ──► PlaceStore ──► Resolver ──► Place
//!                 (load once)    (cascade)
//! ```
//!
//! The store is built once and never mutated; resolvers borrow it, so any
//! number of stores can live side by side (tests rely on this).

pub mod config;
pub mod resolver;
pub mod store;
pub mod types;

pub use resolver::{Resolution, Resolver, Strategy};
pub use store::PlaceStore;
pub use types::Place;
