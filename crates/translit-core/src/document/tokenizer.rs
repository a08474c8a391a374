use tracing::trace;

use super::Token;
use crate::dict::{Dictionary, ExclusionMarker, Side};
use crate::select::{MatchSelector, ScanContext};

/// Split `text`, written on `side`, into tokens.
///
/// Left-to-right scan without backtracking. At each position the selector
/// picks among the entries whose form is a prefix of the rest of the text;
/// with no candidate the char becomes an exclusion mark or a literal.
/// Between a start and an end delimiter no dictionary lookup happens, so
/// block contents are always literals.
pub fn tokenize(
    dict: &dyn Dictionary,
    selector: &dyn MatchSelector,
    text: &str,
    side: Side,
) -> Vec<Token> {
    tokenize_from(dict, selector, text, side, false)
}

/// Like [`tokenize`], starting inside an exclusion block if `in_block`.
pub(super) fn tokenize_from(
    dict: &dyn Dictionary,
    selector: &dyn MatchSelector,
    text: &str,
    side: Side,
    mut in_block: bool,
) -> Vec<Token> {
    let start_marker = dict.exclusion_marker(ExclusionMarker::Start);
    let end_marker = dict.exclusion_marker(ExclusionMarker::End);

    let mut tokens = Vec::new();
    let mut at = 0; // bytes
    let mut position = 0; // chars
    while at < text.len() {
        let rest = &text[at..];

        if !in_block {
            let candidates = dict.prefix_matches(rest, side);
            if !candidates.is_empty() {
                let ctx = ScanContext {
                    text,
                    position,
                    side,
                };
                let chosen = *selector.select(&ctx, &candidates);
                trace!(
                    position,
                    candidates = candidates.len(),
                    index = chosen.index,
                    len = chosen.char_len,
                    "match selected"
                );
                tokens.push(Token::Reference(chosen.index));
                at += chosen.byte_len;
                position += chosen.char_len;
                continue;
            }
        }

        let Some(c) = rest.chars().next() else {
            break;
        };
        let token = if c == start_marker {
            in_block = true;
            Token::ExclusionMark(ExclusionMarker::Start)
        } else if c == end_marker {
            in_block = false;
            Token::ExclusionMark(ExclusionMarker::End)
        } else {
            Token::Literal(c)
        };
        tokens.push(token);
        at += c.len_utf8();
        position += 1;
    }
    tokens
}
