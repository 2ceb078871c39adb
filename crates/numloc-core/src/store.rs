//! Store: the in-memory place table and its alias lookup.
//!
//! [`PlaceStore::load`] reads the places YAML file once at startup. A missing
//! or malformed file never fails the load: the store simply comes back empty
//! and every resolution degrades to "not found". Individual records that lack
//! `key`, `title` or `query` are skipped without affecting the rest.
//!
//! The store is immutable after construction. Share it behind an `Arc`.

use crate::types::Place;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, Value};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Raw (serde) record, mirrors one entry of the `places:` sequence
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawPlace {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    url: Option<String>,
    /// Kept loose so a bad alias item costs only that alias.
    #[serde(default)]
    aliases: Option<Value>,
}

impl RawPlace {
    fn into_place(self) -> Option<Place> {
        let aliases = alias_strings(self.aliases);
        Place::new(
            self.key.unwrap_or_default(),
            self.title.unwrap_or_default(),
            self.query.unwrap_or_default(),
            aliases,
            self.url.as_deref(),
        )
    }
}

/// Scalar alias items as strings. Null, nested lists and mappings are
/// dropped, as is an `aliases` value that is not a list at all.
fn alias_strings(aliases: Option<Value>) -> Vec<String> {
    let Some(aliases) = aliases else {
        return Vec::new();
    };
    let items = match aliases.into_array() {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!(error = %err, "`aliases` is not a list; ignoring it");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .filter_map(|item| match item.into_string() {
            Ok(alias) => Some(alias),
            Err(err) => {
                tracing::debug!(error = %err, "skipping non-scalar alias");
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// PlaceStore
// ---------------------------------------------------------------------------

/// Loaded place records plus the lowercase alias → key lookup table.
#[derive(Debug, Clone, Default)]
pub struct PlaceStore {
    places: Vec<Place>,
    /// Position of the first place carrying each key.
    by_key: HashMap<String, usize>,
    alias_to_key: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl PlaceStore {
    /// An empty store with no source file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the places file at `path`.
    ///
    /// An absent file, unparsable YAML, a non-mapping document or a missing
    /// `places` list all produce an empty store.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "places file not found; starting with an empty table");
            return Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            };
        }

        let builder = Config::builder().add_source(File::from(path).format(FileFormat::Yaml));
        let mut store = Self::from_records(read_records(builder, &path.display().to_string()));
        store.path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            places = store.len(),
            aliases = store.alias_to_key.len(),
            "loaded places"
        );
        store
    }

    /// Parse an in-memory YAML document with the same rules as [`load`](Self::load).
    pub fn from_yaml_str(src: &str) -> Self {
        let builder = Config::builder().add_source(File::from_str(src, FileFormat::Yaml));
        Self::from_records(read_records(builder, "<inline>"))
    }

    /// Build a store from already-validated places, registering aliases in
    /// iteration order. A later place overwrites an earlier alias mapping.
    pub fn from_places(places: impl IntoIterator<Item = Place>) -> Self {
        let mut store = Self::default();
        for place in places {
            store.insert(place);
        }
        store
    }

    fn from_records(records: Vec<RawPlace>) -> Self {
        Self::from_places(records.into_iter().filter_map(RawPlace::into_place))
    }

    fn insert(&mut self, place: Place) {
        for alias in place.lookup_strings() {
            if let Some(previous) = self.alias_to_key.insert(alias.clone(), place.key.clone()) {
                if previous != place.key {
                    tracing::debug!(%alias, %previous, current = %place.key, "alias remapped");
                }
            }
        }
        self.by_key
            .entry(place.key.clone())
            .or_insert(self.places.len());
        self.places.push(place);
    }

    /// All loaded places, in file order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Display titles of all loaded places, in file order.
    pub fn titles(&self) -> Vec<&str> {
        self.places.iter().map(|p| p.title.as_str()).collect()
    }

    /// Look a place up by its key.
    pub fn get(&self, key: &str) -> Option<&Place> {
        self.by_key.get(key).map(|&i| &self.places[i])
    }

    /// Key registered for an already-normalised (trimmed, lowercased) alias.
    pub fn key_for_alias(&self, alias: &str) -> Option<&str> {
        self.alias_to_key.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// File this store was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Record extraction
// ---------------------------------------------------------------------------

/// Pull the `places` sequence out of a config source, deserializing each
/// record on its own so one bad entry does not discard its neighbours.
fn read_records(builder: ConfigBuilder<DefaultState>, origin: &str) -> Vec<RawPlace> {
    let doc = match builder.build() {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(%origin, error = %err, "places file is not a valid mapping; ignoring it");
            return Vec::new();
        }
    };

    let entries: Vec<Value> = match doc.get_array("places") {
        Ok(entries) => entries,
        Err(config::ConfigError::NotFound(_)) => {
            tracing::warn!(%origin, "places file has no `places` list");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(%origin, error = %err, "`places` is not a list; ignoring it");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.try_deserialize::<RawPlace>() {
            Ok(raw) => Some(raw),
            Err(err) => {
                tracing::debug!(%origin, index, error = %err, "skipping malformed place record");
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
