//! Property tests for the tokenizer and the mutation engine over random
//! dictionaries and texts.

use std::sync::Arc;

use proptest::prelude::*;

use crate::dict::{Dictionary, PairDictionary, Side};
use crate::document::{tokenize, Document, Token};
use crate::select::EagerSelector;

const ALPHABET: [char; 6] = ['a', 'b', 'c', 'я', 'ж', 'ш'];

fn arb_form() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_dict() -> impl Strategy<Value = Arc<PairDictionary>> {
    prop::collection::vec((arb_form(), arb_form()), 1..10)
        .prop_map(|pairs| Arc::new(PairDictionary::from_pairs(pairs).unwrap()))
}

/// Dictionary chars plus a char no entry uses and both delimiters.
fn arb_text() -> impl Strategy<Value = String> {
    "[abcяжшz\\[\\]]{0,12}"
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

proptest! {
    #[test]
    fn round_trip_on_parsed_side(dict in arb_dict(), text in arb_text(), side in arb_side()) {
        let doc = Document::parse(dict, &text, side);
        prop_assert_eq!(doc.render_marked(side).unwrap(), text.clone());
        let unmarked: String = text.chars().filter(|c| *c != '[' && *c != ']').collect();
        prop_assert_eq!(doc.render(side).unwrap(), unmarked);
    }

    #[test]
    fn tokenize_is_deterministic(dict in arb_dict(), text in arb_text(), side in arb_side()) {
        let sel = EagerSelector::default();
        let a = tokenize(&*dict, &sel, &text, side);
        let b = tokenize(&*dict, &sel, &text, side);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn references_are_longest_matches(dict in arb_dict(), text in arb_text(), side in arb_side()) {
        let doc = Document::parse(dict.clone(), &text, side);
        let mut at = 0;
        for (i, token) in doc.tokens().iter().enumerate() {
            if let Token::Reference(index) = *token {
                let chosen = dict.value_at(index, side).unwrap().chars().count();
                let longest = dict
                    .prefix_matches(&text[at..], side)
                    .iter()
                    .map(|m| m.char_len)
                    .max()
                    .unwrap();
                prop_assert_eq!(chosen, longest);
            }
            at += doc.render_range(i, i + 1, side, true).unwrap().len();
        }
        prop_assert_eq!(at, text.len());
    }

    #[test]
    fn insert_splices_text(
        dict in arb_dict(),
        text in arb_text(),
        insert in arb_text(),
        side in arb_side(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut doc = Document::parse(dict, &text, side);
        let index = at.index(doc.len() + 1);
        let before = doc.render_range(0, index, side, true).unwrap();
        let after = doc.render_range(index, doc.len(), side, true).unwrap();

        let m = doc.insert_at(index, &insert, side).unwrap();

        prop_assert_eq!(doc.render_marked(side).unwrap(), format!("{before}{insert}{after}"));
        prop_assert_eq!(m.left_index + m.old_tokens.len(), index);
        prop_assert!(m.offset <= index);
    }

    #[test]
    fn lookback_is_bounded(
        dict in arb_dict(),
        text in arb_text(),
        side in arb_side(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut doc = Document::parse(dict.clone(), &text, side);
        let index = at.index(doc.len() + 1);
        let m = doc.insert_at(index, "a", side).unwrap();

        prop_assert!(m.old_tokens.iter().all(Token::is_reference));
        // Each absorbed token was taken while the window was still shorter
        // than the longest form, so everything but the leftmost one is.
        let longest = dict.longest_word_len(side);
        let inner: usize = m
            .old_tokens
            .iter()
            .skip(1)
            .map(|t| match *t {
                Token::Reference(i) => dict.value_at(i, side).unwrap().chars().count(),
                _ => 0,
            })
            .sum();
        prop_assert!(m.old_tokens.len() <= 1 || inner < longest);
    }

    #[test]
    fn empty_insert_is_idempotent(
        dict in arb_dict(),
        text in arb_text(),
        side in arb_side(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut doc = Document::parse(dict, &text, side);
        let index = at.index(doc.len() + 1);
        let before = doc.render_marked(side).unwrap();
        doc.insert_at(index, "", side).unwrap();
        prop_assert_eq!(doc.render_marked(side).unwrap(), before);
    }
}
