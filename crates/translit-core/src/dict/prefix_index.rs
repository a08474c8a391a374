use std::collections::HashMap;

use super::PrefixMatch;

struct Node {
    children: HashMap<char, Node>,
    /// Entry indices whose form ends at this node, ascending.
    entries: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

/// Character trie over the forms of one dictionary side.
pub(super) struct PrefixIndex {
    root: Node,
}

impl PrefixIndex {
    pub(super) fn new() -> Self {
        Self { root: Node::new() }
    }

    pub(super) fn build<'a>(forms: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = Self::new();
        for (i, form) in forms.into_iter().enumerate() {
            index.insert(form, i);
        }
        index
    }

    /// Empty forms are never indexed: they would match everywhere.
    pub(super) fn insert(&mut self, form: &str, entry: usize) {
        if form.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in form.chars() {
            node = node.children.entry(ch).or_insert_with(Node::new);
        }
        if let Err(pos) = node.entries.binary_search(&entry) {
            node.entries.insert(pos, entry);
        }
    }

    /// Every indexed form that is a prefix of `text`, shortest first.
    pub(super) fn matches(&self, text: &str) -> Vec<PrefixMatch> {
        let mut out = Vec::new();
        let mut node = &self.root;
        let mut char_len = 0;
        for (offset, ch) in text.char_indices() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            char_len += 1;
            let byte_len = offset + ch.len_utf8();
            out.extend(node.entries.iter().map(|&index| PrefixMatch {
                index,
                char_len,
                byte_len,
            }));
        }
        out
    }
}
