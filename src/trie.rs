use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::mem;

/// One character position in a [`PrefixTree`].
#[derive(Default)]
pub struct Node {
    children: BTreeMap<char, Node>,
    is_word: bool,
}

impl Node {
    /// Outgoing edges in ascending character order.
    pub fn children(&self) -> btree_map::Iter<'_, char, Node> {
        self.children.iter()
    }

    pub fn child(&self, ch: char) -> Option<&Node> {
        self.children.get(&ch)
    }

    /// Whether the path ending at this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

impl fmt::Debug for Node {
    // children are listed by label only; a full dump would recurse per level
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("is_word", &self.is_word)
            .finish()
    }
}

/// Set of normalized words stored as a trie.
///
/// The tree only grows: nodes are created on insertion and dropped together
/// with the tree. Clone, Debug and Drop all walk the tree without recursion,
/// so word length is not bounded by the call stack.
#[derive(Default)]
pub struct PrefixTree {
    root: Node,
    len: usize,
}

impl PrefixTree {
    pub fn new() -> PrefixTree {
        PrefixTree::default()
    }

    /// Stores `word`. Returns `false` if it was empty or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }

        if current.is_word {
            return false;
        }
        current.is_word = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = &self.root;
        for ch in word.chars() {
            match current.child(ch) {
                Some(next) => current = next,
                None => return false,
            }
        }

        current.is_word
    }

    /// Every stored word, depth first.
    ///
    /// Siblings are visited in ascending character order, so the sequence is
    /// sorted and the same on every call.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Clone for PrefixTree {
    fn clone(&self) -> PrefixTree {
        self.words().collect()
    }
}

impl fmt::Debug for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}

impl Drop for PrefixTree {
    fn drop(&mut self) {
        // detach children first so no node is dropped with a subtree attached
        let mut pending: Vec<Node> = mem::take(&mut self.root.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a PrefixTree {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Words<'a> {
        self.words()
    }
}

/// Lazy depth-first walk over a [`PrefixTree`].
///
/// Uses an explicit stack, so deep trees do not grow the call stack.
pub struct Words<'a> {
    // (byte length of the parent path, edge label, node)
    stack: Vec<(usize, char, &'a Node)>,
    path: String,
}

impl<'a> Words<'a> {
    fn new(root: &'a Node) -> Words<'a> {
        let mut words = Words {
            stack: Vec::new(),
            path: String::new(),
        };
        words.push_children(0, root);
        words
    }

    fn push_children(&mut self, parent_len: usize, node: &'a Node) {
        // reversed so the smallest label is popped first
        for (&ch, child) in node.children.iter().rev() {
            self.stack.push((parent_len, ch, child));
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((parent_len, ch, node)) = self.stack.pop() {
            self.path.truncate(parent_len);
            self.path.push(ch);

            self.push_children(self.path.len(), node);

            if node.is_word {
                return Some(self.path.clone());
            }
        }

        None
    }
}
