use std::{collections::BTreeMap, fmt};

/// A node in the trie.
#[derive(Default)]
struct TrieNode {
    // Whether some inserted word ends exactly at this node
    is_end_of_word: bool,
    // The children of this node, keyed by the character. Ordered so that
    // traversal visits siblings by ascending char code.
    children: BTreeMap<char, TrieNode>,
}

/// Prefix-matching word index.
///
/// Build it with [`Trie::insert`] (or `collect`/`extend`), then share it
/// read-only, e.g. behind an `Arc`, to answer [`Trie::search_prefix`] queries.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates a new, empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word into the trie. Inserting a word that is already present
    /// does nothing.
    pub fn insert(&mut self, word: &str) {
        let mut current_node = &mut self.root;
        for c in word.chars() {
            current_node = current_node.children.entry(c).or_default();
        }
        if !current_node.is_end_of_word {
            current_node.is_end_of_word = true;
            self.len += 1;
        }
    }

    /// Returns every inserted word starting with `prefix`, in depth-first
    /// order with siblings visited by ascending char. A word comes before
    /// its own extensions, so `"car"` precedes `"cart"`.
    ///
    /// The empty prefix returns every word.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let mut result = Vec::new();
        let Some(node) = self.find_node(prefix) else {
            return result;
        };

        let mut current_word = String::from(prefix);
        if node.is_end_of_word {
            result.push(current_word.clone());
        }

        // One children iterator per level below `node`; the word buffer holds
        // one char per iterator beyond the first.
        let mut stack = vec![node.children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((c, child)) => {
                    current_word.push(*c);
                    if child.is_end_of_word {
                        result.push(current_word.clone());
                    }
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        current_word.pop();
                    }
                }
            }
        }
        result
    }

    /// Returns `true` if exactly `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_end_of_word)
    }

    /// Returns `true` if at least one inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        // Nodes are never removed, so every non-root node leads to a word.
        self.find_node(prefix)
            .is_some_and(|node| node.is_end_of_word || !node.children.is_empty())
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie").field("len", &self.len).finish_non_exhaustive()
    }
}

// Dropping nested maps recurses once per char; unlink level by level instead.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut stack = vec![std::mem::take(&mut self.root)];
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
