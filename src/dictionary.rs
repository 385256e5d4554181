pub mod dictionary;
pub mod index;
pub mod trie;

pub use dictionary::{Dictionary, FileFormat};
pub use index::{Classification, Index};
