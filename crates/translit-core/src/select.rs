//! Match selection policies.
//!
//! At each scan position the tokenizer collects every dictionary entry whose
//! form is a prefix of the remaining text and asks a `MatchSelector` to pick
//! one. Candidate order is unspecified; policies must not depend on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dict::{PrefixMatch, Side};

/// Where the scan currently is. `position` counts chars from the start of
/// `text`.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub text: &'a str,
    pub position: usize,
    pub side: Side,
}

pub trait MatchSelector: Send + Sync {
    /// Pick one of `candidates`. The slice is never empty.
    fn select<'c>(
        &self,
        ctx: &ScanContext<'_>,
        candidates: &'c [PrefixMatch],
    ) -> &'c PrefixMatch;
}

/// How to choose between candidates of equal length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Lowest dictionary index wins.
    #[default]
    FirstIndex,
    /// Highest dictionary index wins.
    LastIndex,
}

impl TieBreak {
    /// True if `a` should be preferred over `b` when both have the same length.
    fn prefers(self, a: &PrefixMatch, b: &PrefixMatch) -> bool {
        match self {
            TieBreak::FirstIndex => a.index < b.index,
            TieBreak::LastIndex => a.index > b.index,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstIndex => f.write_str("first-index"),
            TieBreak::LastIndex => f.write_str("last-index"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-index" => Ok(TieBreak::FirstIndex),
            "last-index" => Ok(TieBreak::LastIndex),
            other => Err(format!(
                "unknown tie break '{other}' (expected first-index or last-index)"
            )),
        }
    }
}

fn pick(
    candidates: &[PrefixMatch],
    tie_break: TieBreak,
    better_len: impl Fn(usize, usize) -> bool,
) -> &PrefixMatch {
    let mut best = &candidates[0];
    for m in &candidates[1..] {
        if better_len(m.char_len, best.char_len)
            || (m.char_len == best.char_len && tie_break.prefers(m, best))
        {
            best = m;
        }
    }
    best
}

/// Longest match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EagerSelector {
    pub tie_break: TieBreak,
}

impl EagerSelector {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl MatchSelector for EagerSelector {
    fn select<'c>(
        &self,
        _ctx: &ScanContext<'_>,
        candidates: &'c [PrefixMatch],
    ) -> &'c PrefixMatch {
        pick(candidates, self.tie_break, |a, b| a > b)
    }
}

/// Shortest match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReluctantSelector {
    pub tie_break: TieBreak,
}

impl ReluctantSelector {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl MatchSelector for ReluctantSelector {
    fn select<'c>(
        &self,
        _ctx: &ScanContext<'_>,
        candidates: &'c [PrefixMatch],
    ) -> &'c PrefixMatch {
        pick(candidates, self.tie_break, |a, b| a < b)
    }
}
