use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

/// Trie node used while words are still being added. Nodes live in an
/// arena owned by the caller and are frozen into `TrieNode`s by
/// `TrieBuilder::build`.
pub struct MutableTrieNode<'a> {
    pub(crate) letter: Option<char>,
    pub(crate) is_terminal: Cell<bool>,
    children: RefCell<BTreeMap<char, &'a MutableTrieNode<'a>>>,
}

impl<'a> MutableTrieNode<'a> {
    pub(crate) fn root() -> MutableTrieNode<'a> {
        MutableTrieNode {
            letter: None,
            is_terminal: Cell::new(false),
            children: Default::default(),
        }
    }

    fn create_child(&self, c: char, arena: &'a Arena<MutableTrieNode<'a>>) -> &'a MutableTrieNode<'a> {
        let child: &'a MutableTrieNode<'a> = arena.alloc(MutableTrieNode {
            letter: Some(c),
            is_terminal: Cell::new(false),
            children: Default::default(),
        });
        self.children.borrow_mut().insert(c, child);
        child
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&'a MutableTrieNode<'a>> {
        self.children.borrow().get(&c).copied()
    }

    pub(crate) fn get_or_create_child(&self, c: char,
                                      arena: &'a Arena<MutableTrieNode<'a>>)
                                      -> &'a MutableTrieNode<'a> {
        match self.get_child(c) {
            Some(child) => child,
            None => self.create_child(c, arena),
        }
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub(crate) fn map_child<T, F>(&self, f: &mut F) -> Vec<T>
        where F: FnMut(&'a MutableTrieNode<'a>) -> T {
        self.children.borrow().values().map(|x| f(*x)).collect()
    }
}

impl Debug for MutableTrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutableTrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal.get())
            .field("children", &self.children.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}
