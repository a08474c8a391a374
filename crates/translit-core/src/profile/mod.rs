//! Serialized dictionaries ("profiles").
//!
//! A profile is the on-disk form of a `PairDictionary`: metadata, the two
//! exclusion delimiters and the ordered pair list. Profiles are written as
//! TOML by hand, imported from `left = right` text files, or compiled into
//! a binary `.tlp` file for faster loading.

mod io;
mod text_import;

pub use io::{open, MAGIC, VERSION};
pub use text_import::import_pairs_text;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dict::{DictError, PairDictionary, Side};

pub const DEFAULT_PROFILE_TOML: &str = include_str!("default_profile.toml");

/// Returns the embedded default profile TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_PROFILE_TOML
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "[".to_string(),
            end: "]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub left_description: String,
    #[serde(default)]
    pub right_description: String,
    /// `(left, right)` in dictionary order.
    pub pairs: Vec<(String, String)>,
    #[serde(default)]
    pub markers: Markers,
}

impl Profile {
    /// Check the constraints a `PairDictionary` relies on.
    pub fn validate(&self) -> Result<(), DictError> {
        if self.pairs.is_empty() {
            return Err(DictError::EmptyProfile);
        }
        for (index, (left, right)) in self.pairs.iter().enumerate() {
            if left.is_empty() {
                return Err(DictError::EmptyValue {
                    index,
                    side: Side::Left,
                });
            }
            if right.is_empty() {
                return Err(DictError::EmptyValue {
                    index,
                    side: Side::Right,
                });
            }
        }
        let (start, end) = self.marker_chars()?;
        if start == end {
            return Err(DictError::DuplicateMarkers(start));
        }
        Ok(())
    }

    fn marker_chars(&self) -> Result<(char, char), DictError> {
        Ok((
            single_char(&self.markers.start)?,
            single_char(&self.markers.end)?,
        ))
    }

    pub fn to_dictionary(&self) -> Result<PairDictionary, DictError> {
        self.validate()?;
        let (start, end) = self.marker_chars()?;
        let mut dict = PairDictionary::new(start, end)?;
        dict.set_name(self.name.clone());
        dict.set_version(self.version.clone());
        for (left, right) in &self.pairs {
            dict.add_pair(left.as_str(), right.as_str())?;
        }
        debug!(name = %self.name, pairs = dict.pairs().len(), "profile loaded");
        Ok(dict)
    }
}

fn single_char(s: &str) -> Result<char, DictError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DictError::InvalidMarker(s.to_string())),
    }
}

/// Parse and validate a TOML profile.
pub fn parse_profile_toml(toml_str: &str) -> Result<Profile, DictError> {
    let profile: Profile =
        toml::from_str(toml_str).map_err(|e| DictError::Parse(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

/// Serialize a profile back to TOML.
pub fn to_toml(profile: &Profile) -> Result<String, DictError> {
    toml::to_string_pretty(profile).map_err(|e| DictError::Parse(e.to_string()))
}

impl PairDictionary {
    /// The embedded Cyrillic/Latin profile.
    pub fn default_profile() -> Result<Self, DictError> {
        parse_profile_toml(DEFAULT_PROFILE_TOML)?.to_dictionary()
    }

    pub fn to_profile(&self) -> Profile {
        use crate::dict::{Dictionary, ExclusionMarker};
        Profile {
            name: self.name().to_string(),
            version: self.version().map(str::to_string),
            left_description: String::new(),
            right_description: String::new(),
            markers: Markers {
                start: self.exclusion_marker(ExclusionMarker::Start).to_string(),
                end: self.exclusion_marker(ExclusionMarker::End).to_string(),
            },
            pairs: self
                .pairs()
                .iter()
                .map(|p| (p.left.clone(), p.right.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::{Dictionary, ExclusionMarker};

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
name = "tiny"
version = "0.1"
pairs = [["щ", "sch'"], ["и", "i"]]
"#;
        let profile = parse_profile_toml(toml).unwrap();
        assert_eq!(profile.name, "tiny");
        assert_eq!(profile.pairs.len(), 2);
        assert_eq!(profile.markers, Markers::default());
    }

    #[test]
    fn parse_default_toml() {
        let profile = parse_profile_toml(DEFAULT_PROFILE_TOML).unwrap();
        assert!(
            profile.pairs.len() > 60,
            "expected 60+ pairs, got {}",
            profile.pairs.len()
        );
        assert_eq!(profile.left_description, "cyrillic");
    }

    #[test]
    fn default_dictionary_lengths() {
        let dict = PairDictionary::default_profile().unwrap();
        assert_eq!(dict.longest_word_len(Side::Right), 4);
        assert_eq!(dict.longest_word_len(Side::Left), 1);
        assert_eq!(dict.version(), Some("1.0"));
        assert_eq!(dict.name(), "ru-latin");
    }

    #[test]
    fn custom_markers() {
        let toml = r#"
name = "m"
markers = { start = "{", end = "}" }
pairs = [["а", "a"]]
"#;
        let dict = parse_profile_toml(toml).unwrap().to_dictionary().unwrap();
        assert_eq!(dict.exclusion_marker(ExclusionMarker::Start), '{');
        assert_eq!(dict.exclusion_marker(ExclusionMarker::End), '}');
    }

    #[test]
    fn error_empty_pairs() {
        let err = parse_profile_toml("name = \"x\"\npairs = []\n").unwrap_err();
        assert!(matches!(err, DictError::EmptyProfile));
    }

    #[test]
    fn error_empty_value() {
        let err = parse_profile_toml("name = \"x\"\npairs = [[\"а\", \"\"]]\n").unwrap_err();
        assert!(matches!(
            err,
            DictError::EmptyValue {
                index: 0,
                side: Side::Right
            }
        ));
    }

    #[test]
    fn error_long_marker() {
        let toml = r#"
name = "m"
markers = { start = "<<", end = ">>" }
pairs = [["а", "a"]]
"#;
        let err = parse_profile_toml(toml).unwrap_err();
        assert!(matches!(err, DictError::InvalidMarker(ref s) if s == "<<"));
    }

    #[test]
    fn error_same_markers() {
        let toml = r#"
name = "m"
markers = { start = "|", end = "|" }
pairs = [["а", "a"]]
"#;
        let err = parse_profile_toml(toml).unwrap_err();
        assert!(matches!(err, DictError::DuplicateMarkers('|')));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_profile_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, DictError::Parse(_)));
    }

    #[test]
    fn toml_round_trip_through_dictionary() {
        let dict = PairDictionary::default_profile().unwrap();
        let text = to_toml(&dict.to_profile()).unwrap();
        let again = parse_profile_toml(&text).unwrap().to_dictionary().unwrap();
        assert_eq!(again.pairs(), dict.pairs());
    }
}
