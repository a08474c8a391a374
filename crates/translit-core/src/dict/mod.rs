//! Bidirectional transliteration dictionaries.
//!
//! A dictionary is an ordered list of `(left, right)` pairs. Tokens refer to
//! entries by index only, so the index is the identity of an entry.
//! `PairDictionary` is the in-memory implementation; profiles (TOML or
//! binary) are loaded into it.

mod pair_dict;
mod prefix_index;

pub use pair_dict::{Pair, PairDictionary};

use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two scripts a dictionary maps between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn invert(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            other => Err(format!("unknown side '{other}' (expected left or right)")),
        }
    }
}

/// Which end of an exclusion block a delimiter marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionMarker {
    Start,
    End,
}

/// A dictionary entry whose side form is a prefix of the scanned text.
///
/// `char_len` is the length used for selection; `byte_len` lets the scanner
/// advance without re-walking the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    pub index: usize,
    pub char_len: usize,
    pub byte_len: usize,
}

/// Unified error type for dictionary construction, profiles and profile I/O.
///
/// Covers in-memory validation (empty forms, bad delimiters) as well as
/// loading/saving TOML profiles and compiled (TLPF) profile files.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected TLPF)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("profile has no pairs")]
    EmptyProfile,

    #[error("empty {side} value in pair {index}")]
    EmptyValue { index: usize, side: Side },

    #[error("exclusion marker must be a single character, got {0:?}")]
    InvalidMarker(String),

    #[error("start and end exclusion markers are both {0:?}")]
    DuplicateMarkers(char),

    #[error("pair index {index} out of range (dictionary has {len} pairs)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Read access to a bidirectional dictionary.
///
/// Lengths are in chars. `prefix_matches` has a linear default; implementors
/// with an index should override it but must return the same set of matches.
pub trait Dictionary: Send + Sync {
    /// The form of entry `index` on `side`, or `None` if there is no such entry.
    fn value_at(&self, index: usize, side: Side) -> Option<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the longest form on `side`.
    fn longest_word_len(&self, side: Side) -> usize;

    fn exclusion_marker(&self, kind: ExclusionMarker) -> char;

    fn version(&self) -> Option<&str> {
        None
    }

    /// First entry whose `side` form equals `value`.
    fn index_of(&self, value: &str, side: Side) -> Option<usize> {
        (0..self.len()).find(|&i| self.value_at(i, side) == Some(value))
    }

    /// Opposite-side forms of every entry whose `side` form equals `value`,
    /// in index order.
    fn opposites_of(&self, value: &str, side: Side) -> Vec<&str> {
        (0..self.len())
            .filter(|&i| self.value_at(i, side) == Some(value))
            .filter_map(|i| self.value_at(i, side.invert()))
            .collect()
    }

    /// Every entry whose non-empty `side` form is a prefix of `text`.
    fn prefix_matches(&self, text: &str, side: Side) -> Vec<PrefixMatch> {
        (0..self.len())
            .filter_map(|i| {
                let value = self.value_at(i, side)?;
                if value.is_empty() || !text.starts_with(value) {
                    return None;
                }
                Some(PrefixMatch {
                    index: i,
                    char_len: value.chars().count(),
                    byte_len: value.len(),
                })
            })
            .collect()
    }
}
