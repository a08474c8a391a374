use std::borrow::Cow;

use super::{Document, DocumentError, Token};
use crate::dict::{Dictionary, Side};

/// Rendering of one token. `position` is only used for error reporting.
pub(super) fn token_str<'d>(
    dict: &'d dyn Dictionary,
    token: &Token,
    position: usize,
    side: Side,
    show_markers: bool,
) -> Result<Cow<'d, str>, DocumentError> {
    match *token {
        Token::Reference(index) => dict
            .value_at(index, side)
            .map(Cow::Borrowed)
            .ok_or(DocumentError::InvalidElement { position, index }),
        Token::Literal(c) => Ok(Cow::Owned(c.to_string())),
        Token::ExclusionMark(kind) if show_markers => {
            Ok(Cow::Owned(dict.exclusion_marker(kind).to_string()))
        }
        Token::ExclusionMark(_) => Ok(Cow::Borrowed("")),
    }
}

/// Display width of one token in chars. Marks are zero width.
pub(super) fn token_width(
    dict: &dyn Dictionary,
    token: &Token,
    position: usize,
    side: Side,
) -> Result<usize, DocumentError> {
    match *token {
        Token::Reference(index) => dict
            .value_at(index, side)
            .map(|v| v.chars().count())
            .ok_or(DocumentError::InvalidElement { position, index }),
        Token::Literal(_) => Ok(1),
        Token::ExclusionMark(_) => Ok(0),
    }
}

/// Append the rendering of `tokens` to `out`. `base` is the document index
/// of `tokens[0]`.
pub(super) fn render_into(
    dict: &dyn Dictionary,
    tokens: &[Token],
    base: usize,
    side: Side,
    show_markers: bool,
    out: &mut String,
) -> Result<(), DocumentError> {
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&token_str(dict, token, base + i, side, show_markers)?);
    }
    Ok(())
}

impl Document {
    /// The document text on `side`, exclusion marks omitted.
    pub fn render(&self, side: Side) -> Result<String, DocumentError> {
        self.render_range(0, self.tokens.len(), side, false)
    }

    /// The document text on `side` with exclusion delimiters shown.
    pub fn render_marked(&self, side: Side) -> Result<String, DocumentError> {
        self.render_range(0, self.tokens.len(), side, true)
    }

    /// Rendering of tokens `[start, end)`.
    pub fn render_range(
        &self,
        start: usize,
        end: usize,
        side: Side,
        show_markers: bool,
    ) -> Result<String, DocumentError> {
        let len = self.tokens.len();
        if start > end || end > len {
            return Err(DocumentError::InvalidRange { start, end, len });
        }
        let mut out = String::new();
        render_into(
            self.dict.as_ref(),
            &self.tokens[start..end],
            start,
            side,
            show_markers,
            &mut out,
        )?;
        Ok(out)
    }

    pub fn render_token(&self, pos: usize, side: Side) -> Result<String, DocumentError> {
        let token = self.element_at(pos)?;
        Ok(token_str(self.dict.as_ref(), &token, pos, side, false)?.into_owned())
    }

    /// Render tokens that are not (or no longer) part of the document, such
    /// as the two halves of a [`Mutation`](super::Mutation).
    pub fn render_tokens(&self, tokens: &[Token], side: Side) -> Result<String, DocumentError> {
        let mut out = String::new();
        render_into(self.dict.as_ref(), tokens, 0, side, false, &mut out)?;
        Ok(out)
    }

    /// Width in chars of token `pos` on `side`.
    pub fn token_width(&self, pos: usize, side: Side) -> Result<usize, DocumentError> {
        let token = self.element_at(pos)?;
        token_width(self.dict.as_ref(), &token, pos, side)
    }
}
