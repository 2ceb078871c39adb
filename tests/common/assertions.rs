//! Domain-specific assertion macros for numloc harnesses.
//!
//! These add context-rich failure messages that make it clear which input
//! resolved to what, and which cascade step fired.

use numloc::action::{ActionOutcome, Event};

/// Assert that `text` resolves to the place with key `key`.
///
/// ```rust
/// assert_resolves_to!(resolver, "2-р байр", "num_building_2");
/// ```
#[macro_export]
macro_rules! assert_resolves_to {
    ($resolver:expr, $text:expr, $key:expr) => {{
        let text: &str = $text;
        let expected: &str = $key;
        match $resolver.resolve(text) {
            Some(place) if place.key == expected => {}
            Some(place) => panic!(
                "assert_resolves_to! failed for {:?}:\n  expected: {:?}\n  actual:   {:?}\n  cascade:  {:?}",
                text,
                expected,
                place.key,
                $resolver.explain(text).map(|r| r.strategy)
            ),
            None => panic!(
                "assert_resolves_to! failed for {:?}: resolved to nothing (expected {:?})\n  cascade: {:?}",
                text,
                expected,
                $resolver.explain(text).map(|r| (r.strategy, r.key))
            ),
        }
    }};
}

/// Assert that `text` resolves to nothing.
#[macro_export]
macro_rules! assert_unresolved {
    ($resolver:expr, $text:expr) => {{
        let text: &str = $text;
        if let Some(place) = $resolver.resolve(text) {
            panic!(
                "assert_unresolved! failed for {:?}: resolved to {:?}",
                text, place.key
            );
        }
    }};
}

/// The single reply text of an action outcome. Panics if there is not
/// exactly one.
pub fn single_reply(outcome: &ActionOutcome) -> &str {
    assert_eq!(
        outcome.responses.len(),
        1,
        "expected exactly one reply, got {:?}",
        outcome.responses
    );
    &outcome.responses[0].text
}

/// Assert that the outcome sets the `place` slot to `title` and nothing else.
pub fn assert_place_slot(outcome: &ActionOutcome, title: &str) {
    assert_eq!(
        outcome.events,
        vec![Event::slot_set("place", title)],
        "expected a single place slot event"
    );
}
