mod mutation;
mod properties;

use std::sync::Arc;

use crate::dict::{Dictionary, PairDictionary};

/// `щ/sch`, `и/i`, `а/a`: the longest right form is three chars.
pub(super) fn small_dict() -> Arc<dyn Dictionary> {
    Arc::new(PairDictionary::from_pairs([("щ", "sch"), ("и", "i"), ("а", "a")]).unwrap())
}

/// Forms reachable one keystroke at a time: `s`, `sc`, `sch`, `sch'`.
pub(super) fn keyboard_dict() -> Arc<dyn Dictionary> {
    Arc::new(
        PairDictionary::from_pairs([
            ("с", "s"),
            ("ц", "c"),
            ("х", "h"),
            ("ш", "sh"),
            ("ч", "ch"),
            ("щ", "sch'"),
            ("и", "i"),
        ])
        .unwrap(),
    )
}
