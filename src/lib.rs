pub mod dictionary;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod search;

pub use dictionary::{Classification, Dictionary, FileFormat, Index};
pub use error::{Error, Result};
pub use grid::Grid;
pub use puzzle::Puzzle;
pub use search::{Direction, FoundWords, SearchConfig, SearchMatch, Searcher};
