use std::ops::Range;

use serde::Serialize;

/// How the displayed text changed.
///
/// Replace chars `replaced` of the previous text with `text` to get the new
/// text. `transliterated` is true when the last token written is a
/// dictionary entry rather than a literal, which front ends use for styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResponse {
    pub replaced: Range<usize>,
    pub text: String,
    pub caret: usize,
    pub transliterated: bool,
}

impl EditResponse {
    /// Nothing replaced; only the caret may have moved.
    pub(crate) fn unchanged(caret: usize) -> Self {
        Self {
            replaced: caret..caret,
            text: String::new(),
            caret,
            transliterated: false,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.replaced.is_empty() && self.text.is_empty()
    }

    /// Apply this change to a copy of the previous text.
    pub fn apply(&self, previous: &str) -> String {
        let mut chars: Vec<char> = previous.chars().collect();
        let end = self.replaced.end.min(chars.len());
        let start = self.replaced.start.min(end);
        chars.splice(start..end, self.text.chars());
        chars.into_iter().collect()
    }
}
