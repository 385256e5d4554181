pub mod direction;
pub mod found_words;
pub mod multithreaded_search;
pub mod search;
pub mod searchconfig;

pub use direction::Direction;
pub use found_words::FoundWords;
pub use search::{SearchMatch, Searcher};
pub use searchconfig::SearchConfig;
