//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(toml)` parses and validates a settings file
//! - `Settings::default()` is the embedded `default_settings.toml`
//! - There is no global instance; callers pass `Settings` where needed

use std::path::PathBuf;

use serde::Deserialize;

use crate::dict::Side;
use crate::select::{EagerSelector, MatchSelector, ReluctantSelector, TieBreak};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    #[default]
    Eager,
    Reluctant,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub tokenizer: TokenizerSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenizerSettings {
    pub selector: SelectorKind,
    #[serde(default)]
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionSettings {
    pub display_side: Side,
    pub translit_mode: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    path: String,
}

impl ProfileSettings {
    /// Configured profile file, `None` for the embedded profile.
    pub fn path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

impl Settings {
    /// A fresh selector configured by `[tokenizer]`.
    pub fn selector(&self) -> Box<dyn MatchSelector> {
        let tie_break = self.tokenizer.tie_break;
        match self.tokenizer.selector {
            SelectorKind::Eager => Box::new(EagerSelector::new(tie_break)),
            SelectorKind::Reluctant => Box::new(ReluctantSelector::new(tie_break)),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerSettings {
                selector: SelectorKind::Eager,
                tie_break: TieBreak::FirstIndex,
            },
            session: SessionSettings {
                display_side: Side::Left,
                translit_mode: true,
            },
            profile: ProfileSettings::default(),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.profile.path.contains('\0') {
        return Err(SettingsError::InvalidValue {
            field: "profile.path".to_string(),
            reason: "must not contain NUL".to_string(),
        });
    }
    Ok(())
}
