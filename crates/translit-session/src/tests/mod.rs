
use std::sync::Arc;

use translit_core::dict::{Dictionary, PairDictionary};

use super::{EditResponse, EditSession};

pub(super) fn default_dict() -> Arc<dyn Dictionary> {
    Arc::new(PairDictionary::default_profile().unwrap())
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut EditSession, s: &str) -> Vec<EditResponse> {
    let mut responses = Vec::new();
    for ch in s.chars() {
        let resp = session.type_text(&ch.to_string()).unwrap();
        responses.push(resp);
    }
    responses
}

/// Buffer and document agree and the caret sits on its token boundary.
pub(super) fn assert_consistent(session: &EditSession) {
    let side = session.display_side();
    assert_eq!(session.text(), session.document().render(side).unwrap());
    assert_eq!(
        session.caret(),
        session
            .document()
            .token_index_to_text_position(0, session.caret_token_index(), side)
            .unwrap()
    );
}
