//! Resolution of the settings and dictionary every command runs against.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use translit_core::dict::{DictError, Dictionary, PairDictionary};
use translit_core::profile;
use translit_core::settings::{self, Settings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings {path}: {source}")]
    Settings {
        path: PathBuf,
        source: SettingsError,
    },
    #[error("profile {path}: {source}")]
    Profile { path: PathBuf, source: DictError },
    #[error("default profile: {0}")]
    DefaultProfile(DictError),
}

/// Settings from `path`, or the embedded defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, LoadError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    settings::parse_settings_toml(&content).map_err(|source| LoadError::Settings {
        path: path.to_path_buf(),
        source,
    })
}

/// The dictionary to use: `--profile` first, then `[profile] path` from
/// the settings, then the embedded default profile.
pub fn load_dictionary(
    profile_path: Option<&Path>,
    settings: &Settings,
) -> Result<PairDictionary, LoadError> {
    let from_settings = settings.profile.path();
    match profile_path.or(from_settings.as_deref()) {
        Some(path) => {
            let dict = profile::open(path)
                .and_then(|p| p.to_dictionary())
                .map_err(|source| LoadError::Profile {
                    path: path.to_path_buf(),
                    source,
                })?;
            debug!(path = %path.display(), pairs = dict.len(), "profile opened");
            Ok(dict)
        }
        None => PairDictionary::default_profile().map_err(LoadError::DefaultProfile),
    }
}

/// Settings and shared dictionary in one go.
pub fn load(
    profile_path: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<(Settings, Arc<dyn Dictionary>), LoadError> {
    let settings = load_settings(settings_path)?;
    let dict = load_dictionary(profile_path, &settings)?;
    Ok((settings, Arc::new(dict)))
}
