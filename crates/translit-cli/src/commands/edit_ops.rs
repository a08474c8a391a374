//! Keystroke simulation through an `EditSession`.
//!
//! A script is plain text typed char by char, with `{name}` escapes for
//! editing keys: `{bs}`, `{del}`, `{left}`, `{right}`, `{home}`, `{end}`
//! and `{toggle}` (transliteration on/off). `{{` types a literal `{`.

use std::path::Path;
use std::process;

use serde::Serialize;
use translit_session::{EditResponse, EditSession, SessionError};

use super::load;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown key {{{0}}}")]
    UnknownKey(String),
    #[error("unterminated key at char {0}")]
    Unterminated(usize),
}

pub fn parse_script(script: &str) -> Result<Vec<Keystroke>, ScriptError> {
    let mut keys = Vec::new();
    let mut chars = script.chars().enumerate().peekable();
    while let Some((at, c)) = chars.next() {
        if c != '{' {
            keys.push(Keystroke::Char(c));
            continue;
        }
        if chars.next_if(|&(_, c)| c == '{').is_some() {
            keys.push(Keystroke::Char('{'));
            continue;
        }
        let mut name = String::new();
        loop {
            match chars.next() {
                Some((_, '}')) => break,
                Some((_, c)) => name.push(c),
                None => return Err(ScriptError::Unterminated(at)),
            }
        }
        keys.push(match name.as_str() {
            "bs" => Keystroke::Backspace,
            "del" => Keystroke::Delete,
            "left" => Keystroke::Left,
            "right" => Keystroke::Right,
            "home" => Keystroke::Home,
            "end" => Keystroke::End,
            "toggle" => Keystroke::Toggle,
            _ => return Err(ScriptError::UnknownKey(name)),
        });
    }
    Ok(keys)
}

/// What one keystroke did.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub key: String,
    pub text: String,
    pub caret: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<EditResponse>,
}

fn key_label(key: &Keystroke) -> String {
    match key {
        Keystroke::Char(c) => c.to_string(),
        Keystroke::Backspace => "{bs}".to_string(),
        Keystroke::Delete => "{del}".to_string(),
        Keystroke::Left => "{left}".to_string(),
        Keystroke::Right => "{right}".to_string(),
        Keystroke::Home => "{home}".to_string(),
        Keystroke::End => "{end}".to_string(),
        Keystroke::Toggle => "{toggle}".to_string(),
    }
}

/// Feed `key` to the session. Caret moves and mode switches produce no
/// response.
pub fn press(
    session: &mut EditSession,
    key: &Keystroke,
) -> Result<Option<EditResponse>, SessionError> {
    let resp = match key {
        Keystroke::Char(c) => Some(session.type_text(c.encode_utf8(&mut [0; 4]))?),
        Keystroke::Backspace => Some(session.backspace()?),
        Keystroke::Delete => Some(session.delete_forward()?),
        Keystroke::Left => {
            session.caret_left()?;
            None
        }
        Keystroke::Right => {
            session.caret_right()?;
            None
        }
        Keystroke::Home => {
            session.set_caret(0)?;
            None
        }
        Keystroke::End => {
            session.set_caret(session.text().chars().count())?;
            None
        }
        Keystroke::Toggle => {
            session.toggle_translit_mode();
            None
        }
    };
    Ok(resp)
}

pub fn run_script(
    session: &mut EditSession,
    keys: &[Keystroke],
) -> Result<Vec<Step>, SessionError> {
    keys.iter()
        .map(|key| {
            let response = press(session, key)?;
            Ok(Step {
                key: key_label(key),
                text: session.text().to_string(),
                caret: session.caret(),
                response,
            })
        })
        .collect()
}

/// Show the buffer with the caret drawn as `|`.
fn with_caret(text: &str, caret: usize) -> String {
    let mut out: String = text.chars().take(caret).collect();
    out.push('|');
    out.extend(text.chars().skip(caret));
    out
}

pub fn type_cmd(
    profile: Option<&Path>,
    settings: Option<&Path>,
    script: &str,
    steps: bool,
    json: bool,
) {
    let (settings, dict) = die!(load::load(profile, settings), "Error loading: {}");
    let keys = die!(parse_script(script), "Error in script: {}");
    let mut session = EditSession::with_settings(dict, &settings);
    let trace = die!(run_script(&mut session, &keys), "Error editing: {}");

    if json {
        let out = die!(serde_json::to_string_pretty(&trace), "Error serializing: {}");
        println!("{out}");
        return;
    }
    if steps {
        for step in &trace {
            println!("{:<8} {}", step.key, with_caret(&step.text, step.caret));
        }
    } else {
        println!("{}", session.text());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use translit_core::dict::PairDictionary;

    fn session() -> EditSession {
        EditSession::new(Arc::new(PairDictionary::default_profile().unwrap()))
    }

    #[test]
    fn parse_keys() {
        let keys = parse_script("a{bs}{{{toggle}").unwrap();
        assert_eq!(
            keys,
            vec![
                Keystroke::Char('a'),
                Keystroke::Backspace,
                Keystroke::Char('{'),
                Keystroke::Toggle,
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_script("ab{nope}"),
            Err(ScriptError::UnknownKey("nope".to_string()))
        );
        assert_eq!(parse_script("a{left"), Err(ScriptError::Unterminated(1)));
    }

    #[test]
    fn script_edits_session() {
        let mut session = session();
        let keys = parse_script("priet{left}{left}v{end}!").unwrap();
        let trace = run_script(&mut session, &keys).unwrap();
        assert_eq!(session.text(), "привет!");
        assert_eq!(trace.len(), keys.len());
        assert!(trace[5].response.is_none());
        assert_eq!(trace[7].text, "привет");
        assert_eq!(trace[7].caret, 4);
    }

    #[test]
    fn toggle_types_display_side() {
        let mut session = session();
        let keys = parse_script("da{toggle}x{toggle}{home}{del}").unwrap();
        run_script(&mut session, &keys).unwrap();
        assert_eq!(session.text(), "аx");
        assert!(session.is_translit_mode());
    }

    #[test]
    fn caret_drawing() {
        assert_eq!(with_caret("щи", 1), "щ|и");
        assert_eq!(with_caret("", 0), "|");
    }
}
