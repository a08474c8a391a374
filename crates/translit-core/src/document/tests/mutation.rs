use super::{keyboard_dict, small_dict};
use crate::dict::{ExclusionMarker, Side};
use crate::document::{Document, DocumentError, Token};

#[test]
fn insert_at_end_reparses_window() {
    let mut doc = Document::parse(small_dict(), "schi", Side::Right);
    let m = doc.insert_at(2, "a", Side::Right).unwrap();
    // "i" (1 char) and "sch" (3 chars) are both pulled in: the window is
    // still shorter than 3 chars when "sch" is reached.
    assert_eq!(m.left_index, 0);
    assert_eq!(m.old_tokens, vec![Token::Reference(0), Token::Reference(1)]);
    assert_eq!(
        m.new_tokens,
        vec![Token::Reference(0), Token::Reference(1), Token::Reference(2)]
    );
    assert_eq!(m.offset, 2);
    assert_eq!(m.right_index(), 3);
    assert!(m.ends_with_reference());
    assert_eq!(doc.render(Side::Left).unwrap(), "щиа");
}

#[test]
fn insert_into_empty_document() {
    let mut doc = Document::new(small_dict());
    let m = doc.insert_at(0, "schia", Side::Right).unwrap();
    assert_eq!(m.left_index, 0);
    assert!(m.old_tokens.is_empty());
    assert_eq!(m.new_tokens.len(), 3);
    assert_eq!(m.offset, 0);
    assert_eq!(doc.render(Side::Left).unwrap(), "щиа");
}

#[test]
fn typing_merges_into_longer_entry() {
    let mut doc = Document::new(keyboard_dict());

    let m = doc.insert_at(0, "s", Side::Right).unwrap();
    assert_eq!(m.new_tokens, vec![Token::Reference(0)]);
    assert_eq!(doc.render(Side::Left).unwrap(), "с");

    let m = doc.insert_at(1, "c", Side::Right).unwrap();
    assert_eq!(m.old_tokens, vec![Token::Reference(0)]);
    assert_eq!(m.offset, 1);
    assert_eq!(doc.render(Side::Left).unwrap(), "сц");

    let m = doc.insert_at(2, "h", Side::Right).unwrap();
    assert_eq!(m.left_index, 0);
    assert_eq!(m.new_tokens, vec![Token::Reference(0), Token::Reference(4)]);
    assert_eq!(m.offset, 1);
    assert_eq!(doc.render(Side::Left).unwrap(), "сч");

    let m = doc.insert_at(2, "'", Side::Right).unwrap();
    assert_eq!(m.left_index, 0);
    assert_eq!(m.old_tokens.len(), 2);
    assert_eq!(m.new_tokens, vec![Token::Reference(5)]);
    assert_eq!(m.offset, 0);
    assert_eq!(doc.render(Side::Left).unwrap(), "щ");
    assert_eq!(doc.render(Side::Right).unwrap(), "sch'");
}

#[test]
fn window_bounded_by_longest_form() {
    let mut doc = Document::parse(small_dict(), "iiiii", Side::Right);
    let m = doc.insert_at(5, "a", Side::Right).unwrap();
    assert_eq!(m.left_index, 2);
    assert_eq!(m.old_tokens.len(), 3);
    assert_eq!(doc.render(Side::Left).unwrap(), "иииииа");
}

#[test]
fn window_stops_at_literal() {
    let mut doc = Document::parse(small_dict(), "i1i", Side::Right);
    let m = doc.insert_at(3, "a", Side::Right).unwrap();
    assert_eq!(m.left_index, 2);
    assert_eq!(m.old_tokens, vec![Token::Reference(1)]);
}

#[test]
fn window_stops_at_exclusion_mark() {
    let mut doc = Document::parse(small_dict(), "[k]", Side::Right);
    let m = doc.insert_at(3, "a", Side::Right).unwrap();
    assert_eq!(m.left_index, 3);
    assert!(m.old_tokens.is_empty());
    assert_eq!(m.new_tokens, vec![Token::Reference(2)]);
}

#[test]
fn insert_inside_block_stays_literal() {
    let mut doc = Document::parse(small_dict(), "[k", Side::Right);
    let m = doc.insert_at(2, "a", Side::Right).unwrap();
    assert_eq!(m.new_tokens, vec![Token::Literal('a')]);
    assert!(!m.ends_with_reference());

    let m = doc.insert_at(3, "]a", Side::Right).unwrap();
    assert_eq!(
        m.new_tokens,
        vec![
            Token::ExclusionMark(ExclusionMarker::End),
            Token::Reference(2)
        ]
    );
    assert_eq!(doc.render_marked(Side::Left).unwrap(), "[ka]а");
}

#[test]
fn insert_in_middle() {
    let mut doc = Document::parse(small_dict(), "a-a", Side::Right);
    let m = doc.insert_at(1, "i", Side::Right).unwrap();
    assert_eq!(m.left_index, 0);
    assert_eq!(doc.render(Side::Left).unwrap(), "аи-а");
    assert_eq!(doc.render(Side::Right).unwrap(), "ai-a");
}

#[test]
fn insert_out_of_range() {
    let mut doc = Document::parse(small_dict(), "ai", Side::Right);
    let err = doc.insert_at(3, "a", Side::Right).unwrap_err();
    assert_eq!(err, DocumentError::IndexOutOfRange { index: 3, len: 2 });
    assert_eq!(doc.render(Side::Right).unwrap(), "ai");
}

#[test]
fn empty_insert_keeps_text() {
    let mut doc = Document::parse(keyboard_dict(), "sch'ic", Side::Right);
    for index in 0..=doc.len() {
        doc.insert_at(index, "", Side::Right).unwrap();
        assert_eq!(doc.render(Side::Right).unwrap(), "sch'ic");
    }
}

#[test]
fn empty_insert_at_start_of_empty_document() {
    let mut doc = Document::new(small_dict());
    let m = doc.insert_at(0, "", Side::Right).unwrap();
    assert!(m.new_tokens.is_empty());
    assert_eq!(m.offset, 0);
}

#[test]
fn mutation_serializes() {
    let mut doc = Document::parse(small_dict(), "sch", Side::Right);
    let m = doc.insert_at(1, "i", Side::Right).unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["left_index"], 0);
    assert_eq!(json["new_tokens"][1]["reference"], 1);
}
