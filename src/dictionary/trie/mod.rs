pub mod trie;
pub mod trie_builder;

mod mutablenode;
mod node;

pub use mutablenode::MutableTrieNode;
pub use node::TrieNode;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
