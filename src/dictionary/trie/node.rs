use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::dictionary::trie::mutablenode::MutableTrieNode;

/// A frozen trie node. Each node owns its children outright; nothing is
/// added or removed once the trie is built.
#[derive(Default)]
pub struct TrieNode {
    pub(crate) letter: Option<char>,
    pub(crate) is_word_end: bool,
    pub(crate) children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// Freezes the nodes reachable from `root`. Children are finished
    /// before their parent, using an explicit stack so word length does not
    /// bound the call depth.
    pub(crate) fn from_mutable<'a>(root: &'a MutableTrieNode<'a>) -> TrieNode {
        let mut pending: Vec<(&'a MutableTrieNode<'a>, bool)> = vec![(root, false)];
        let mut finished: Vec<TrieNode> = vec![];

        while let Some((mnode, expanded)) = pending.pop() {
            if !expanded {
                pending.push((mnode, true));
                mnode.map_child(&mut |child| pending.push((child, false)));
                continue;
            }
            let children = finished
                .split_off(finished.len() - mnode.child_count())
                .into_iter()
                .filter_map(|node| {
                    let letter = node.letter;
                    letter.map(|c| (c, node))
                })
                .collect();
            finished.push(TrieNode {
                letter: mnode.letter,
                is_word_end: mnode.is_terminal.get(),
                children,
            });
        }
        finished.pop().unwrap_or_default()
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Visits every node below (and including) this one, parents first and
    /// siblings in `char` order, passing the letters spelled from the start
    /// node.
    pub(crate) fn traverse_prefix<F>(&self, f: &mut F)
        where F: FnMut(&TrieNode, &[char]) {
        let mut path: Vec<char> = vec![];
        let mut stack: Vec<(&TrieNode, usize)> = vec![(self, 0)];

        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                path.truncate(depth - 1);
                path.extend(node.letter);
            }
            f(node, &path);
            let mut letters: Vec<&char> = node.children.keys().collect();
            letters.sort_by(|a, b| b.cmp(a));
            for c in letters {
                stack.push((&node.children[c], path.len() + 1));
            }
        }
    }
}

impl Drop for TrieNode {
    // Unlinks the subtree level by level instead of letting nested maps
    // drop recursively.
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut children = self.children.keys().collect::<Vec<_>>();
        children.sort();
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_word_end", &self.is_word_end)
            .field("children", &children)
            .finish()
    }
}
