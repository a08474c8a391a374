use std::path::Path;
use std::process;
use std::sync::Arc;

use serde::Serialize;
use translit_core::dict::{Dictionary, ExclusionMarker, Side};
use translit_core::document::{Document, DocumentError, Token};
use translit_core::settings::Settings;

use super::load;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Parse `text` read on `from` and render it on the other side.
pub fn convert_text(
    dict: Arc<dyn Dictionary>,
    settings: &Settings,
    text: &str,
    from: Side,
    marked: bool,
) -> Result<String, DocumentError> {
    let doc = Document::parse_with(dict, text, from, settings.selector());
    if marked {
        doc.render_marked(from.invert())
    } else {
        doc.render(from.invert())
    }
}

pub fn convert_cmd(
    profile: Option<&Path>,
    settings: Option<&Path>,
    text: &str,
    from: Side,
    marked: bool,
) {
    let (settings, dict) = die!(load::load(profile, settings), "Error loading: {}");
    let out = die!(
        convert_text(dict, &settings, text, from, marked),
        "Error rendering: {}"
    );
    println!("{out}");
}

/// One line of the `tokens` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRow {
    pub position: usize,
    pub token: Token,
    pub left: String,
    pub right: String,
}

pub fn token_rows(doc: &Document) -> Result<Vec<TokenRow>, DocumentError> {
    let dict = doc.dictionary();
    let marker = |kind: ExclusionMarker| dict.exclusion_marker(kind).to_string();
    doc.tokens()
        .iter()
        .enumerate()
        .map(|(position, &token)| {
            let (left, right) = match token {
                Token::ExclusionMark(kind) => (marker(kind), marker(kind)),
                _ => (
                    doc.render_token(position, Side::Left)?,
                    doc.render_token(position, Side::Right)?,
                ),
            };
            Ok(TokenRow {
                position,
                token,
                left,
                right,
            })
        })
        .collect()
}

fn pad(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

/// Human-readable token table.
pub fn format_table(rows: &[TokenRow]) -> String {
    use unicode_width::UnicodeWidthStr;
    let left_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.left.as_str()))
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    out.push_str(&format!("{:>4}  {}  {:<14}  right\n", "#", pad("left", left_width), "token"));
    for r in rows {
        let kind = match r.token {
            Token::Reference(index) => format!("ref {index}"),
            Token::Literal(_) => "literal".to_string(),
            Token::ExclusionMark(ExclusionMarker::Start) => "block start".to_string(),
            Token::ExclusionMark(ExclusionMarker::End) => "block end".to_string(),
        };
        out.push_str(&format!(
            "{:>4}  {}  {:<14}  {}\n",
            r.position,
            pad(&r.left, left_width),
            kind,
            r.right
        ));
    }
    out
}

pub fn tokens_cmd(
    profile: Option<&Path>,
    settings: Option<&Path>,
    text: &str,
    from: Side,
    json: bool,
) {
    let (settings, dict) = die!(load::load(profile, settings), "Error loading: {}");
    let doc = Document::parse_with(dict, text, from, settings.selector());
    let rows = die!(token_rows(&doc), "Error rendering: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "Error serializing: {}");
        println!("{out}");
    } else {
        print!("{}", format_table(&rows));
    }
}

pub fn lookup_cmd(profile: Option<&Path>, settings: Option<&Path>, value: &str, side: Side) {
    let (_, dict) = die!(load::load(profile, settings), "Error loading: {}");
    match dict.index_of(value, side) {
        Some(index) => println!("index: {index}"),
        None => {
            println!("{value} ({side}): not found");
            return;
        }
    }
    let opposites = dict.opposites_of(value, side);
    println!("{}: {}", side.invert(), opposites.join(", "));
}
