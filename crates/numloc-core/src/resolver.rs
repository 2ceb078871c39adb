//! Resolver: maps free text to a [`Place`] through an ordered strategy cascade.
//!
//! Matching is attempted in order: exact alias → dormitory → building →
//! institution. The first strategy that yields a place key ends the cascade;
//! that key is then looked up in the [`PlaceStore`]. A key with no
//! configured place resolves to nothing, even if a later strategy would have
//! matched.
//!
//! Dormitory phrasing ("4-р дотуур байр") also contains the building keyword,
//! so the dormitory strategy must run before the building regex.

use crate::store::PlaceStore;
use crate::types::Place;
use regex::Regex;
use std::sync::LazyLock;

/// Substrings that mark a dormitory reference.
const DORM_KEYWORDS: &[&str] = &["дотуур", "dorm", "dormitory"];

/// Dormitory numbers, scanned in this order.
const DORM_DIGITS: &[char] = &['1', '2', '3', '4', '5', '6'];

/// Substrings that mention the university itself.
const INSTITUTION_KEYWORDS: &[&str] = &["муис", "muis", "num"];

/// Place key for a bare university mention.
pub const MAIN_KEY: &str = "num_main";

/// "2-р байр", "3 дугаар байр", "5р.байр", "1–р байр" …
static BUILDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([1-5])\s*[-–]?\s*(р\.|р|дугаар)?\s*байр").expect("building pattern must compile")
});

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// One step of the resolution cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exact match against an alias or a title.
    ExactAlias,
    /// Dormitory keyword plus a digit 1–6.
    Dormitory,
    /// Digit 1–5, optional ordinal suffix, then "байр".
    Building,
    /// Any mention of the university name.
    Institution,
}

impl Strategy {
    /// The cascade, in priority order.
    pub const CASCADE: [Strategy; 4] = [
        Strategy::ExactAlias,
        Strategy::Dormitory,
        Strategy::Building,
        Strategy::Institution,
    ];

    /// Place key this strategy proposes for `text`, which must already be
    /// trimmed and lowercased.
    pub fn key_for(self, text: &str, store: &PlaceStore) -> Option<String> {
        match self {
            Strategy::ExactAlias => store.key_for_alias(text).map(str::to_string),
            Strategy::Dormitory => dormitory_key(text),
            Strategy::Building => building_key(text),
            Strategy::Institution => institution_key(text),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::ExactAlias => write!(f, "alias"),
            Strategy::Dormitory => write!(f, "dormitory"),
            Strategy::Building => write!(f, "building"),
            Strategy::Institution => write!(f, "institution"),
        }
    }
}

fn dormitory_key(text: &str) -> Option<String> {
    if !DORM_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return None;
    }
    // A digit bounded by non-digits is also a plain substring hit, so a
    // substring test covers both spellings ("4-р", "dorm4", "12").
    DORM_DIGITS
        .iter()
        .find(|&&d| text.contains(d))
        .map(|d| format!("num_dorm_{d}"))
}

fn building_key(text: &str) -> Option<String> {
    BUILDING_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|n| format!("num_building_{}", n.as_str()))
}

fn institution_key(text: &str) -> Option<String> {
    INSTITUTION_KEYWORDS
        .iter()
        .any(|kw| text.contains(kw))
        .then(|| MAIN_KEY.to_string())
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Outcome of a successful cascade step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub strategy: Strategy,
    pub key: String,
    /// `None` when the proposed key is not defined in the store.
    pub place: Option<&'a Place>,
}

/// Resolves free text against a borrowed, immutable [`PlaceStore`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a PlaceStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a PlaceStore) -> Self {
        Self { store }
    }

    /// Best matching place for `text`, or `None`.
    pub fn resolve(&self, text: &str) -> Option<&'a Place> {
        self.explain(text).and_then(|r| r.place)
    }

    /// Run the cascade and report which strategy fired.
    ///
    /// Returns `None` for blank input or when no strategy matched at all.
    pub fn explain(&self, text: &str) -> Option<Resolution<'a>> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return None;
        }

        let resolution = Strategy::CASCADE.iter().find_map(|&strategy| {
            strategy
                .key_for(&normalized, self.store)
                .map(|key| Resolution {
                    strategy,
                    place: self.store.get(&key),
                    key,
                })
        });

        match &resolution {
            Some(r) => tracing::debug!(
                input = %normalized,
                strategy = %r.strategy,
                key = %r.key,
                found = r.place.is_some(),
                "cascade matched"
            ),
            None => tracing::debug!(input = %normalized, "no strategy matched"),
        }
        resolution
    }
}

/// Trim and lowercase user text before matching.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
