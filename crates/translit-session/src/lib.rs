//! Headless editing session on top of a transliteration `Document`.
//!
//! `EditSession` plays the part of a text widget: it keeps the text as shown
//! on the display side together with a caret, and forwards every edit to the
//! document. Each edit returns an `EditResponse` saying which span of the
//! displayed text to replace, so a front end can mirror the buffer without
//! re-rendering it.
//!
//! With transliteration on, typed text is read on the side opposite the
//! display side (Latin keystrokes shown as Cyrillic); with it off, typed text
//! is read on the display side itself.

mod caret;
mod edit;
mod response;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;
use translit_core::dict::{Dictionary, Side};
use translit_core::document::{Document, DocumentError};
use translit_core::settings::Settings;

pub use response::EditResponse;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("position {position} out of range (text has {len} chars)")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Editing state for one text field.
///
/// Invariant: `text()` always equals `document().render(display_side())`,
/// and the caret sits on a token boundary.
pub struct EditSession {
    doc: Document,
    text: String,
    /// Caret in chars of `text`.
    caret: usize,
    /// Token boundary the caret corresponds to. Zero-width marks make the
    /// char position alone ambiguous.
    caret_index: usize,
    translit_mode: bool,
    display_side: Side,
}

impl EditSession {
    pub fn new(dict: Arc<dyn Dictionary>) -> Self {
        Self::with_settings(dict, &Settings::default())
    }

    pub fn with_settings(dict: Arc<dyn Dictionary>, settings: &Settings) -> Self {
        Self {
            doc: Document::with_selector(dict, settings.selector()),
            text: String::new(),
            caret: 0,
            caret_index: 0,
            translit_mode: settings.session.translit_mode,
            display_side: settings.session.display_side,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn caret_token_index(&self) -> usize {
        self.caret_index
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn display_side(&self) -> Side {
        self.display_side
    }

    /// Side typed text is read on.
    pub fn input_side(&self) -> Side {
        if self.translit_mode {
            self.display_side.invert()
        } else {
            self.display_side
        }
    }

    pub fn is_translit_mode(&self) -> bool {
        self.translit_mode
    }

    pub fn set_translit_mode(&mut self, enabled: bool) {
        self.translit_mode = enabled;
    }

    /// Flip transliteration mode, returning the new state.
    pub fn toggle_translit_mode(&mut self) -> bool {
        self.translit_mode = !self.translit_mode;
        debug!(translit_mode = self.translit_mode, "translit mode toggled");
        self.translit_mode
    }

    /// Move the caret to `position`, snapping forward to a token boundary.
    /// Returns the caret actually set.
    pub fn set_caret(&mut self, position: usize) -> Result<usize, SessionError> {
        let (index, snapped) = self.boundary_at(position)?;
        self.caret_index = index;
        self.caret = snapped;
        Ok(snapped)
    }

    /// Replace the whole content with `text`, written on the display side.
    /// The caret moves to the end.
    pub fn set_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.doc.clear();
        self.doc.insert_at(0, text, self.display_side)?;
        self.text = self.doc.render(self.display_side)?;
        self.caret_index = self.doc.len();
        self.caret = self.text.chars().count();
        Ok(())
    }

    /// Switch dictionaries. The displayed text is kept and parsed again.
    pub fn set_dictionary(&mut self, dict: Arc<dyn Dictionary>) -> Result<(), SessionError> {
        self.doc.rebind(dict, self.display_side)?;
        self.text = self.doc.render(self.display_side)?;
        let caret = self.caret.min(self.text.chars().count());
        self.set_caret(caret)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.doc.clear();
        self.text.clear();
        self.caret = 0;
        self.caret_index = 0;
    }
}
