use std::fmt::{Debug, Formatter};

use crate::dictionary::index::Index;
use crate::dictionary::trie::node::TrieNode;

pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Trie {
    pub(crate) fn new(root: TrieNode, len: usize) -> Trie {
        Trie { root, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All loaded words, in lexicographic `char` order.
    pub fn words(&self) -> Vec<String> {
        let mut words = vec![];
        self.root.traverse_prefix(&mut |node, path| {
            if node.is_word_end {
                words.push(path.iter().collect());
            }
        });
        words
    }
}

impl Index for Trie {
    type Cursor<'a> = &'a TrieNode;

    fn root(&self) -> &TrieNode {
        &self.root
    }

    fn step<'a>(&'a self, at: &&'a TrieNode, c: char) -> Option<&'a TrieNode> {
        at.get_child(c)
    }

    fn is_word(&self, at: &&TrieNode) -> bool {
        at.is_word_end
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(&x);
            x.children.values().for_each(|c| stack.push(c));
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use typed_arena::Arena;

    use crate::dictionary::index::{Classification, Index};
    use crate::dictionary::trie::trie::Trie;
    use crate::dictionary::trie::trie_builder::TrieBuilder;

    fn build(words: &[&str]) -> Trie {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        builder.add_all(words);
        builder.build()
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["HELLO", "HELP", "GOODBYE", "GOOD"];
        let trie = build(&words);
        words.iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = build(&["HELLO", "HELP", "GOODBYE", "GOOD"]);
        let bad_words = vec!["HE", "H", "LOL", "BANANA", ""];
        bad_words.iter().for_each(|word| assert!(!trie.contains(word)));
    }

    #[test]
    fn classifies_prefixes() {
        let trie = build(&["word", "wordsmith"]);
        assert_eq!(trie.classify("w"), Classification::Prefix);
        assert_eq!(trie.classify("word"), Classification::Word);
        assert_eq!(trie.classify("words"), Classification::Prefix);
        assert_eq!(trie.classify("wordsmith"), Classification::Word);
        assert_eq!(trie.classify("wordsmiths"), Classification::Absent);
        assert_eq!(trie.classify("xword"), Classification::Absent);
        assert_eq!(trie.classify(""), Classification::Absent);
    }

    #[test]
    fn keeps_case() {
        let trie = build(&["java", "Shift"]);
        assert!(trie.contains("java"));
        assert!(!trie.contains("Java"));
        assert_eq!(trie.classify("s"), Classification::Absent);
        assert_eq!(trie.classify("Sh"), Classification::Prefix);
    }

    #[test]
    fn cursor_walk_matches_classify() {
        let trie = build(&["cat", "car"]);
        let root = trie.root();
        let c = trie.step(&root, 'c').unwrap();
        let a = trie.step(&c, 'a').unwrap();
        assert!(!trie.is_word(&a));
        let t = trie.step(&a, 't').unwrap();
        assert!(trie.is_word(&t));
        assert_eq!(t.letter(), Some('t'));
        assert!(t.is_word_end());
        assert_eq!(root.letter(), None);
        assert!(trie.step(&a, 'b').is_none());
        assert!(trie.step(&t, 's').is_none());
    }

    #[test]
    fn lists_words_in_order() {
        let trie = build(&["GOOD", "HELP", "GOODBYE", "HELLO", "HELP"]);
        assert_eq!(trie.words(), vec!["GOOD", "GOODBYE", "HELLO", "HELP"]);
        assert_eq!(trie.len(), 4);
    }
}
