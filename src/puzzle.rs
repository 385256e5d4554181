use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::grid::Grid;

const SAMPLE_GRID: [&str; 11] = [
    "akjbvaijdsbv_d_dbv",
    "fjslkdfadsna_T_lfa",
    "asdfasdfsdfa_r_ads",
    "ckvsadfgfgjava_ajd",
    "akjbvaijdsbv_d_dbv",
    "cbvqiejdbfqi_e_qib",
    "asdjnaquekjdwdfabd",
    "asdk_word_kgrtuabd",
    "asdjnaquekjfghbdbd",
    "asewdfldfjdsfewrkf",
    "as_Shift_ejdccgabd",
];

const SAMPLE_WORDS: [&str; 5] = ["Shift", "Trade", "java", "Peter", "word"];

/// A grid together with the words to look for, as read from a JSON file:
///
/// ```json
/// { "grid": ["cat", "xdx"], "words": ["cat", "dog"] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Vec<String>,
    pub words: Vec<String>,
}

impl Puzzle {
    /// The demonstration puzzle: five words, four of them hidden.
    pub fn sample() -> Puzzle {
        Puzzle {
            grid: SAMPLE_GRID.iter().map(|s| s.to_string()).collect(),
            words: SAMPLE_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Puzzle> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Puzzle> {
        Self::from_json(&fs::read_to_string(filename)?)
    }

    pub fn dictionary(&self) -> Dictionary {
        Dictionary::load(&self.words)
    }

    pub fn grid(&self) -> Grid {
        Grid::from_rows(&self.grid)
    }
}


#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::puzzle::Puzzle;
    use crate::search::{SearchConfig, Searcher};

    #[test]
    fn solves_sample() {
        let puzzle = Puzzle::sample();
        let dict = puzzle.dictionary();
        let grid = puzzle.grid();

        let found = Searcher::new(&dict).find_words(&grid);
        assert_eq!(found.all(), ["Trade", "java", "word", "Shift"]);
        assert!(!found.contains("Peter"));

        let forward = Searcher::with_config(&dict, SearchConfig::forward_only()).find_words(&grid);
        assert_eq!(forward, found);
        assert_eq!(Searcher::new(&dict).find_words_parallel(&grid), found);
    }

    #[test]
    fn reads_json() {
        let puzzle = Puzzle::from_json(r#"{"grid": ["a", "b"], "words": ["ab"]}"#).unwrap();
        assert_eq!(puzzle.grid, vec!["a", "b"]);
        assert_eq!(puzzle.words, vec!["ab"]);
        let found = Searcher::new(&puzzle.dictionary()).find_words(&puzzle.grid());
        assert_eq!(found.into_vec(), vec!["ab"]);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Puzzle::from_json(r#"{"grid": "abc"}"#), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(Puzzle::from_file("/nonexistent/puzzle.json"), Err(Error::Io(_))));
    }
}
