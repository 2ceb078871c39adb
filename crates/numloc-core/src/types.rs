//! Core types for numloc-core.
//!
//! A [`Place`] is one validated record from the places file. Records are
//! immutable once loaded; the store hands out shared references only.

/// A named physical location with a map query and optional aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Unique identifier, e.g. `num_main` or `num_dorm_4`. Never empty.
    pub key: String,
    /// Display name shown to the user. Never empty.
    pub title: String,
    /// Search string handed to the maps link when no explicit `url` is set.
    /// Never empty.
    pub query: String,
    /// Trimmed, lowercased aliases in file order. The title is not included
    /// here even though it is registered as an implicit alias.
    pub aliases: Vec<String>,
    /// Optional precomputed map link (e.g. a short link), used verbatim.
    pub url: Option<String>,
}

impl Place {
    /// Build a place, normalising fields the same way the loader does.
    ///
    /// Returns `None` when `key`, `title` or `query` is blank after trimming.
    pub fn new<I, S>(
        key: impl AsRef<str>,
        title: impl AsRef<str>,
        query: impl AsRef<str>,
        aliases: I,
        url: Option<&str>,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = key.as_ref().trim();
        let title = title.as_ref().trim();
        let query = query.as_ref().trim();
        if key.is_empty() || title.is_empty() || query.is_empty() {
            return None;
        }

        let aliases = aliases
            .into_iter()
            .filter_map(|a| normalize_alias(a.as_ref()))
            .collect();
        let url = url.map(str::trim).filter(|u| !u.is_empty()).map(str::to_string);

        Some(Self {
            key: key.to_string(),
            title: title.to_string(),
            query: query.to_string(),
            aliases,
            url,
        })
    }

    /// Every lookup string that should resolve to this place: the aliases
    /// followed by the lowercased title.
    pub fn lookup_strings(&self) -> impl Iterator<Item = String> + '_ {
        self.aliases
            .iter()
            .cloned()
            .chain(std::iter::once(self.title.to_lowercase()))
    }
}

/// Trim and lowercase an alias; blank aliases are discarded.
pub fn normalize_alias(raw: &str) -> Option<String> {
    let alias = raw.trim().to_lowercase();
    (!alias.is_empty()).then_some(alias)
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.key)
    }
}
