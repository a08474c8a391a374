use super::render::token_width;
use super::{Document, DocumentError};
use crate::dict::Side;

impl Document {
    /// Index of the first token whose rendered end on `side` reaches
    /// `position`, or `len()` when `position` is past the end of the text.
    pub fn text_position_to_token_index(
        &self,
        position: usize,
        side: Side,
    ) -> Result<usize, DocumentError> {
        let mut end = 0;
        for (i, token) in self.tokens.iter().enumerate() {
            end += token_width(self.dict.as_ref(), token, i, side)?;
            if end >= position {
                return Ok(i);
            }
        }
        Ok(self.tokens.len())
    }

    /// Rendered length on `side` of tokens `[start, end)`.
    pub fn token_index_to_text_position(
        &self,
        start: usize,
        end: usize,
        side: Side,
    ) -> Result<usize, DocumentError> {
        let len = self.tokens.len();
        if start > end || end > len {
            return Err(DocumentError::InvalidRange { start, end, len });
        }
        self.tokens[start..end]
            .iter()
            .enumerate()
            .try_fold(0, |acc, (i, token)| {
                Ok(acc + token_width(self.dict.as_ref(), token, start + i, side)?)
            })
    }
}
