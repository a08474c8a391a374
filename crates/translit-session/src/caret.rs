use super::{EditSession, SessionError};

impl EditSession {
    pub(super) fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub(super) fn check_position(&self, position: usize) -> Result<(), SessionError> {
        let len = self.text_len();
        if position > len {
            return Err(SessionError::PositionOutOfRange { position, len });
        }
        Ok(())
    }

    /// First token boundary at or after display position `position`, as
    /// `(token index, display position)`. A position strictly inside a
    /// multi-char token snaps to that token's end.
    pub(super) fn boundary_at(&self, position: usize) -> Result<(usize, usize), SessionError> {
        self.check_position(position)?;
        let mut start = 0;
        for i in 0..self.doc.len() {
            if start >= position {
                return Ok((i, start));
            }
            let end = start + self.doc.token_width(i, self.display_side)?;
            if end > position {
                return Ok((i + 1, end));
            }
            start = end;
        }
        Ok((self.doc.len(), start))
    }

    /// Tokens overlapping the display range `[offset, offset + length)`, as
    /// `(first, end)` token indices plus the display span they cover.
    /// Zero-width tokens on either edge are left out.
    pub(super) fn tokens_covering(
        &self,
        offset: usize,
        length: usize,
    ) -> Result<(usize, usize, usize, usize), SessionError> {
        let stop = offset.saturating_add(length);
        self.check_position(stop)?;

        let side = self.display_side;
        let mut first = None;
        let mut span_start = 0;
        let mut start = 0;
        let mut i = 0;
        while i < self.doc.len() {
            if first.is_some() && start >= stop {
                break;
            }
            let end = start + self.doc.token_width(i, side)?;
            if first.is_none() && end > offset {
                first = Some(i);
                span_start = start;
            }
            start = end;
            i += 1;
        }
        match first {
            Some(first) => Ok((first, i, span_start, start)),
            None => Ok((self.doc.len(), self.doc.len(), start, start)),
        }
    }

    /// Move the caret to the previous token boundary left of it. Returns
    /// the new caret.
    pub fn caret_left(&mut self) -> Result<usize, SessionError> {
        let side = self.display_side;
        let mut index = self.caret_index;
        while index > 0 {
            index -= 1;
            let pos = self.doc.token_index_to_text_position(0, index, side)?;
            if pos < self.caret {
                self.caret_index = index;
                self.caret = pos;
                return Ok(pos);
            }
        }
        self.caret_index = 0;
        self.caret = 0;
        Ok(0)
    }

    /// Move the caret past the token right of it. Returns the new caret.
    pub fn caret_right(&mut self) -> Result<usize, SessionError> {
        if self.caret >= self.text_len() {
            return Ok(self.caret);
        }
        self.set_caret(self.caret + 1)
    }
}
