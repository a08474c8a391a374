use std::ops::Range;

use tracing::debug;

use super::{EditResponse, EditSession, SessionError};

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Replace chars `range` of `s` with `with`.
fn splice_chars(s: &mut String, range: Range<usize>, with: &str) {
    let start = byte_offset(s, range.start);
    let end = byte_offset(s, range.end);
    s.replace_range(start..end, with);
}

impl EditSession {
    /// Type `text` at the caret.
    ///
    /// The text is read on the input side and inserted through the
    /// document's mutation engine; the displayed span of the re-parsed
    /// window is replaced by its new rendering and the caret moves past it.
    pub fn type_text(&mut self, text: &str) -> Result<EditResponse, SessionError> {
        let side = self.display_side;
        let input = self.input_side();
        let m = self.doc.insert_at(self.caret_index, text, input)?;

        let start = self.doc.token_index_to_text_position(0, m.left_index, side)?;
        let old_len = self.doc.render_tokens(&m.old_tokens, side)?.chars().count();
        let new_text = self.doc.render_tokens(&m.new_tokens, side)?;
        let replaced = start..start + old_len;
        splice_chars(&mut self.text, replaced.clone(), &new_text);

        self.caret_index = m.right_index();
        self.caret = start + new_text.chars().count();
        debug!(
            typed = text,
            replaced = ?replaced,
            caret = self.caret,
            "type_text"
        );
        Ok(EditResponse {
            replaced,
            text: new_text,
            caret: self.caret,
            transliterated: m.ends_with_reference(),
        })
    }

    /// Remove the displayed range `[offset, offset + length)`.
    ///
    /// Every token overlapping the range goes, so the removed span may be
    /// wider than asked when a token renders as several chars. The caret
    /// moves to the start of the removed span. With `length == 0` nothing is
    /// removed and the caret moves to `offset`.
    pub fn remove(&mut self, offset: usize, length: usize) -> Result<EditResponse, SessionError> {
        if length == 0 {
            let caret = self.set_caret(offset)?;
            return Ok(EditResponse::unchanged(caret));
        }
        let (first, end, span_start, span_end) = self.tokens_covering(offset, length)?;
        self.doc.remove_elements(first, end - first)?;

        let replaced = span_start..span_end;
        splice_chars(&mut self.text, replaced.clone(), "");
        self.caret_index = first;
        self.caret = span_start;
        debug!(offset, length, removed = ?replaced, "remove");
        Ok(EditResponse {
            replaced,
            text: String::new(),
            caret: self.caret,
            transliterated: false,
        })
    }

    /// Replace the displayed range `[offset, offset + length)` with typed
    /// `text`. The response covers both the removal and the insertion.
    pub fn replace(
        &mut self,
        offset: usize,
        length: usize,
        text: &str,
    ) -> Result<EditResponse, SessionError> {
        let removed = self.remove(offset, length)?;
        let inserted = self.type_text(text)?;
        Ok(EditResponse {
            replaced: inserted.replaced.start..removed.replaced.end,
            ..inserted
        })
    }

    /// Remove the char before the caret.
    pub fn backspace(&mut self) -> Result<EditResponse, SessionError> {
        if self.caret == 0 {
            return Ok(EditResponse::unchanged(0));
        }
        self.remove(self.caret - 1, 1)
    }

    /// Remove the char after the caret.
    pub fn delete_forward(&mut self) -> Result<EditResponse, SessionError> {
        if self.caret >= self.text_len() {
            return Ok(EditResponse::unchanged(self.caret));
        }
        self.remove(self.caret, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::splice_chars;

    #[test]
    fn splice_multibyte() {
        let mut s = "привет".to_string();
        splice_chars(&mut s, 1..3, "x");
        assert_eq!(s, "пxвет");
        splice_chars(&mut s, 5..5, "!");
        assert_eq!(s, "пxвет!");
        splice_chars(&mut s, 0..6, "");
        assert_eq!(s, "");
    }
}
