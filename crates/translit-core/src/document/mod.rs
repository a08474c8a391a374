//! Tokenized transliteration documents.
//!
//! A `Document` keeps the token sequence of one piece of text together with
//! the dictionary it was parsed against. Rendering on either side is a
//! lookup per token, and edits re-tokenize only a bounded window to the left
//! of the edit point (see `insert_at`).
//!
//! All positions are token indices unless a method says otherwise; text
//! positions count chars of the rendering on the given side, with exclusion
//! marks contributing zero width.

mod mutation;
mod position;
mod render;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use mutation::Mutation;
pub use tokenizer::tokenize;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dict::{Dictionary, ExclusionMarker, Side};
use crate::select::{EagerSelector, MatchSelector};

/// One element of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Dictionary entry, rendered by looking the index up on a side.
    Reference(usize),
    /// An input char no entry matched. Same on both sides.
    Literal(char),
    /// Start or end of a verbatim block. Zero width unless markers are shown.
    ExclusionMark(ExclusionMarker),
}

impl Token {
    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("index {index} out of range (document has {len} tokens)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid range {start}..{end} (document has {len} tokens)")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("token {position} refers to missing dictionary entry {index}")]
    InvalidElement { position: usize, index: usize },
}

impl DocumentError {
    /// Position or range outside the document.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            DocumentError::IndexOutOfRange { .. } | DocumentError::InvalidRange { .. }
        )
    }
}

/// Token sequence bound to a dictionary and a match selector.
///
/// Not synchronized: one owner performs every read and edit. The dictionary
/// is shared; if it is mutated in a way that shifts indices, rebuild the
/// document with [`Document::rebind`].
pub struct Document {
    dict: Arc<dyn Dictionary>,
    selector: Box<dyn MatchSelector>,
    tokens: Vec<Token>,
}

impl Document {
    /// Empty document using the eager (longest match) selector.
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self::with_selector(dict, Box::new(EagerSelector::default()))
    }

    pub fn with_selector(dict: Arc<dyn Dictionary>, selector: Box<dyn MatchSelector>) -> Self {
        Self {
            dict,
            selector,
            tokens: Vec::new(),
        }
    }

    /// Parse `text`, written on `side`, with the eager selector.
    pub fn parse(dict: Arc<dyn Dictionary>, text: &str, side: Side) -> Self {
        Self::parse_with(dict, text, side, Box::new(EagerSelector::default()))
    }

    pub fn parse_with(
        dict: Arc<dyn Dictionary>,
        text: &str,
        side: Side,
        selector: Box<dyn MatchSelector>,
    ) -> Self {
        let tokens = tokenize(dict.as_ref(), selector.as_ref(), text, side);
        debug!(side = %side, chars = text.chars().count(), tokens = tokens.len(), "document parsed");
        Self {
            dict,
            selector,
            tokens,
        }
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dict
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn element_at(&self, pos: usize) -> Result<Token, DocumentError> {
        self.tokens
            .get(pos)
            .copied()
            .ok_or(DocumentError::IndexOutOfRange {
                index: pos,
                len: self.tokens.len(),
            })
    }

    pub fn is_reference(&self, pos: usize) -> Result<bool, DocumentError> {
        Ok(self.element_at(pos)?.is_reference())
    }

    /// Remove `count` tokens starting at `position`.
    pub fn remove_elements(&mut self, position: usize, count: usize) -> Result<(), DocumentError> {
        let len = self.tokens.len();
        let end = position.saturating_add(count);
        if end > len {
            return Err(DocumentError::InvalidRange {
                start: position,
                end,
                len,
            });
        }
        self.tokens.drain(position..end);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Switch to another dictionary, keeping the text as rendered on `side`.
    ///
    /// The document is rendered on `side` with the current dictionary and
    /// parsed again with `dict`. Exclusion marks are carried over using the
    /// new dictionary's delimiters, so verbatim blocks survive the switch.
    pub fn rebind(&mut self, dict: Arc<dyn Dictionary>, side: Side) -> Result<(), DocumentError> {
        let mut text = String::new();
        for (position, token) in self.tokens.iter().enumerate() {
            match *token {
                Token::ExclusionMark(kind) => text.push(dict.exclusion_marker(kind)),
                _ => text.push_str(&render::token_str(
                    self.dict.as_ref(),
                    token,
                    position,
                    side,
                    false,
                )?),
            }
        }
        self.tokens = tokenize(dict.as_ref(), self.selector.as_ref(), &text, side);
        self.dict = dict;
        debug!(side = %side, tokens = self.tokens.len(), "document rebound");
        Ok(())
    }

    /// True if a token inserted at `index` would land inside an exclusion
    /// block, i.e. the closest mark before `index` is a start mark.
    pub fn in_exclusion_block(&self, index: usize) -> bool {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rev()
            .find_map(|t| match t {
                Token::ExclusionMark(kind) => Some(*kind == ExclusionMarker::Start),
                _ => None,
            })
            .unwrap_or(false)
    }
}
