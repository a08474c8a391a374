use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prefix_index::PrefixIndex;
use super::{DictError, Dictionary, ExclusionMarker, PrefixMatch, Side};

pub const DEFAULT_START_MARKER: char = '[';
pub const DEFAULT_END_MARKER: char = ']';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// In-memory dictionary: an ordered pair list plus a prefix trie per side.
///
/// Indices are positions in the pair list. `remove_at` shifts every later
/// index, so documents tokenized before a removal must be rebuilt.
pub struct PairDictionary {
    name: String,
    version: Option<String>,
    pairs: Vec<Pair>,
    start_marker: char,
    end_marker: char,
    longest: [usize; 2],
    index: [PrefixIndex; 2],
}

// The tries are derived from `pairs`; leave them out.
impl fmt::Debug for PairDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairDictionary")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("markers", &(self.start_marker, self.end_marker))
            .field("pairs", &self.pairs)
            .finish_non_exhaustive()
    }
}

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl PairDictionary {
    /// Empty dictionary with the given exclusion delimiters.
    pub fn new(start_marker: char, end_marker: char) -> Result<Self, DictError> {
        if start_marker == end_marker {
            return Err(DictError::DuplicateMarkers(start_marker));
        }
        Ok(Self {
            name: String::new(),
            version: None,
            pairs: Vec::new(),
            start_marker,
            end_marker,
            longest: [0, 0],
            index: [PrefixIndex::new(), PrefixIndex::new()],
        })
    }

    /// Build from `(left, right)` pairs with the default `[`/`]` delimiters.
    pub fn from_pairs<L, R>(pairs: impl IntoIterator<Item = (L, R)>) -> Result<Self, DictError>
    where
        L: Into<String>,
        R: Into<String>,
    {
        let mut dict = Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)?;
        for (left, right) in pairs {
            dict.add_pair(left, right)?;
        }
        Ok(dict)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn pair(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// Append a pair, returning its index.
    pub fn add_pair(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Result<usize, DictError> {
        let pair = Pair::new(left, right);
        let index = self.pairs.len();
        for side in [Side::Left, Side::Right] {
            if pair.get(side).is_empty() {
                return Err(DictError::EmptyValue { index, side });
            }
        }
        for side in [Side::Left, Side::Right] {
            let form = pair.get(side);
            let s = slot(side);
            self.longest[s] = self.longest[s].max(form.chars().count());
            self.index[s].insert(form, index);
        }
        self.pairs.push(pair);
        Ok(index)
    }

    /// Remove the pair at `index`. Every later entry moves down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Pair, DictError> {
        if index >= self.pairs.len() {
            return Err(DictError::IndexOutOfRange {
                index,
                len: self.pairs.len(),
            });
        }
        let removed = self.pairs.remove(index);
        self.rebuild();
        debug!(index, remaining = self.pairs.len(), "dictionary pair removed");
        Ok(removed)
    }

    fn rebuild(&mut self) {
        for side in [Side::Left, Side::Right] {
            let s = slot(side);
            self.index[s] = PrefixIndex::build(self.pairs.iter().map(|p| p.get(side)));
            self.longest[s] = self
                .pairs
                .iter()
                .map(|p| p.get(side).chars().count())
                .max()
                .unwrap_or(0);
        }
    }
}

impl Dictionary for PairDictionary {
    fn value_at(&self, index: usize, side: Side) -> Option<&str> {
        self.pairs.get(index).map(|p| p.get(side))
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }

    fn longest_word_len(&self, side: Side) -> usize {
        self.longest[slot(side)]
    }

    fn exclusion_marker(&self, kind: ExclusionMarker) -> char {
        match kind {
            ExclusionMarker::Start => self.start_marker,
            ExclusionMarker::End => self.end_marker,
        }
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn prefix_matches(&self, text: &str, side: Side) -> Vec<PrefixMatch> {
        self.index[slot(side)].matches(text)
    }
}
