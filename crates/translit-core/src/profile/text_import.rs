use super::{Markers, Profile};
use crate::dict::DictError;

/// Build a profile from a plain pair list, one `left = right` per line.
///
/// Both sides are trimmed. Blank lines and lines starting with `#` are
/// skipped. Only the first `=` separates the sides.
pub fn import_pairs_text(name: &str, text: &str) -> Result<Profile, DictError> {
    let mut pairs = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((left, right)) = line.split_once('=') else {
            return Err(DictError::Parse(format!(
                "line {}: expected 'left = right', got {line:?}",
                lineno + 1
            )));
        };
        pairs.push((left.trim().to_string(), right.trim().to_string()));
    }

    let profile = Profile {
        name: name.to_string(),
        version: Some("1.0".to_string()),
        left_description: "cyrillic".to_string(),
        right_description: "latin".to_string(),
        pairs,
        markers: Markers::default(),
    };
    profile.validate()?;
    Ok(profile)
}
