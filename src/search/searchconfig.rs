use typed_builder::TypedBuilder;

use crate::search::direction::Direction;

#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    #[builder(default = Direction::ALL.to_vec())]
    pub directions: Vec<Direction>,
    /// Shorter words are not reported; rays still extend through them.
    #[builder(default = 1)]
    pub min_word_len: usize,
    /// Rays stop after this many characters.
    #[builder(default, setter(strip_option))]
    pub max_length: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    /// Every direction except `Left` and `Up`.
    pub fn forward_only() -> SearchConfig {
        SearchConfig::builder().directions(Direction::FORWARD.to_vec()).build()
    }
}
