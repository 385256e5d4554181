use typed_arena::Arena;

use crate::dictionary::trie::mutablenode::MutableTrieNode;
use crate::dictionary::trie::node::TrieNode;
use crate::dictionary::trie::trie::Trie;

/// Accumulates words into arena-allocated nodes, then freezes them into a
/// `Trie`.
///
/// ```
/// use typed_arena::Arena;
/// use word_search::dictionary::trie::TrieBuilder;
/// use word_search::dictionary::index::Index;
///
/// let arena = Arena::new();
/// let mut builder = TrieBuilder::new(&arena);
/// builder.add("word").add("wordsmith");
/// let trie = builder.build();
/// assert!(trie.contains("word"));
/// assert!(trie.contains("wordsmith"));
/// ```
pub struct TrieBuilder<'a> {
    arena: &'a Arena<MutableTrieNode<'a>>,
    root: &'a MutableTrieNode<'a>,
    count: usize,
}

impl<'a> TrieBuilder<'a> {
    pub fn new(arena: &'a Arena<MutableTrieNode<'a>>) -> TrieBuilder<'a> {
        let root: &'a MutableTrieNode<'a> = arena.alloc(MutableTrieNode::root());
        TrieBuilder { arena, root, count: 0 }
    }

    /// Adds a word. Empty words are ignored; adding a word twice changes
    /// nothing.
    pub fn add(&mut self, word: &str) -> &mut TrieBuilder<'a> {
        if word.is_empty() {
            return self;
        }
        let mut current = self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c, self.arena);
        }
        if !current.is_terminal.replace(true) {
            self.count += 1;
        }
        self
    }

    pub fn add_all<I>(&mut self, items: I) -> &mut TrieBuilder<'a>
        where I: IntoIterator, I::Item: AsRef<str> {
        items.into_iter().for_each(|x| { self.add(x.as_ref()); });
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn build(&self) -> Trie {
        Trie::new(TrieNode::from_mutable(self.root), self.count)
    }
}
