//! Configuration types for numloc.
//!
//! [`Settings::load`] layers, lowest priority first: the embedded defaults,
//! an optional TOML file (`numloc.toml` in the working directory unless a
//! path is given), then `NUMLOC_*` environment variables such as
//! `NUMLOC_SERVER__BIND=127.0.0.1:5055`. [`Settings::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).
//!
//! The places table itself is not part of these settings; it lives in its
//! own YAML file, see [`crate::store`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_SETTINGS: &str = r#"
[places]
path = "locations.yml"

[server]
bind = "0.0.0.0:5055"

[action]
name   = "action_send_location"
slot   = "place"
entity = "place"
"#;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "numloc.toml";

const ENV_PREFIX: &str = "NUMLOC";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file {0} does not exist")]
    Missing(PathBuf),
    #[error("invalid settings: {0}")]
    Invalid(#[from] config::ConfigError),
}

// ---------------------------------------------------------------------------
// Public settings types
// ---------------------------------------------------------------------------

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub places: PlacesSettings,
    pub server: ServerSettings,
    pub action: ActionSettings,
}

/// `[places]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesSettings {
    /// YAML file holding the `places:` list.
    pub path: PathBuf,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address the action server listens on.
    pub bind: String,
}

/// `[action]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionSettings {
    /// Name the dialogue runtime uses to invoke the send-location action.
    pub name: String,
    /// Memory slot read before resolving and written after a hit.
    pub slot: String,
    /// Entity type whose value is used when the slot is empty.
    pub entity: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    /// Load settings from `path` (which must exist) or, when `None`, from
    /// [`DEFAULT_SETTINGS_FILE`] if present. Environment overrides apply in
    /// both cases.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match path {
            Some(p) if !p.exists() => return Err(SettingsError::Missing(p.to_path_buf())),
            Some(p) => config::File::from(p).format(config::FileFormat::Toml),
            None => config::File::from(Path::new(DEFAULT_SETTINGS_FILE))
                .format(config::FileFormat::Toml)
                .required(false),
        };

        let settings = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS, config::FileFormat::Toml))
            .build()
            .expect("built-in default settings must be valid TOML")
            .try_deserialize()
            .expect("built-in default settings must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
