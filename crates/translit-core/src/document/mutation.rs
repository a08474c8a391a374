use serde::Serialize;
use tracing::debug;

use super::tokenizer::tokenize_from;
use super::{Document, DocumentError, Token};
use crate::dict::Side;

/// What an `insert_at` did to the token sequence.
///
/// Tokens `[left_index, left_index + old_tokens.len())` were replaced by
/// `new_tokens`. `offset` is the token index the insertion point corresponds
/// to once the window has been re-parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub left_index: usize,
    pub old_tokens: Vec<Token>,
    pub new_tokens: Vec<Token>,
    pub offset: usize,
}

impl Mutation {
    /// Index just past the re-parsed tokens.
    pub fn right_index(&self) -> usize {
        self.left_index + self.new_tokens.len()
    }

    /// Whether the last re-parsed token is a dictionary reference.
    pub fn ends_with_reference(&self) -> bool {
        self.new_tokens.last().is_some_and(Token::is_reference)
    }
}

fn corrected_offset(index: usize, old: usize, new: usize) -> usize {
    let (index, old, new) = (index as isize, old as isize, new as isize);
    let mut offset = index;
    if new - 1 < old {
        offset -= old - (new - 1);
    }
    offset.max(0) as usize
}

impl Document {
    /// Insert `text`, written on `side`, before token `index`.
    ///
    /// Contiguous references left of `index` are pulled into a re-parse
    /// window while their accumulated rendering is shorter than the longest
    /// dictionary form on `side`; the window's text plus `text` is then
    /// tokenized again and spliced in its place. Literals and marks stop the
    /// window. The document is unchanged on error.
    pub fn insert_at(
        &mut self,
        index: usize,
        text: &str,
        side: Side,
    ) -> Result<Mutation, DocumentError> {
        if index > self.tokens.len() {
            return Err(DocumentError::IndexOutOfRange {
                index,
                len: self.tokens.len(),
            });
        }

        let longest = self.dict.longest_word_len(side);
        let mut left_index = index;
        let mut window_len = 0;
        let mut parts = Vec::new();
        while window_len < longest && left_index > 0 {
            let Token::Reference(entry) = self.tokens[left_index - 1] else {
                break;
            };
            let value = self
                .dict
                .value_at(entry, side)
                .ok_or(DocumentError::InvalidElement {
                    position: left_index - 1,
                    index: entry,
                })?;
            window_len += value.chars().count();
            parts.push(value);
            left_index -= 1;
        }

        let mut buffer: String = parts.iter().rev().copied().collect();
        buffer.push_str(text);

        let in_block = self.in_exclusion_block(left_index);
        let new_tokens = tokenize_from(
            self.dict.as_ref(),
            self.selector.as_ref(),
            &buffer,
            side,
            in_block,
        );
        let old_tokens: Vec<Token> = self
            .tokens
            .splice(left_index..index, new_tokens.iter().copied())
            .collect();

        let offset = corrected_offset(index, old_tokens.len(), new_tokens.len());
        debug!(
            index,
            left_index,
            old = old_tokens.len(),
            new = new_tokens.len(),
            offset,
            "insert_at"
        );
        Ok(Mutation {
            left_index,
            old_tokens,
            new_tokens,
            offset,
        })
    }
}
