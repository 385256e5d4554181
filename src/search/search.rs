use std::ops::Range;

use derive_new::new;
use metrics::counter;
use serde::Serialize;

use crate::dictionary::index::Index;
use crate::grid::Grid;
use crate::search::direction::Direction;
use crate::search::found_words::FoundWords;
use crate::search::searchconfig::SearchConfig;

/// One occurrence of a word: where its first letter is and which way it
/// reads.
#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

pub struct Searcher<'a, I: Index> {
    pub(crate) index: &'a I,
    pub(crate) config: SearchConfig,
}

impl<'a, I: Index> Searcher<'a, I> {
    pub fn new(index: &'a I) -> Searcher<'a, I> {
        Self::with_config(index, SearchConfig::new())
    }

    pub fn with_config(index: &'a I, config: SearchConfig) -> Searcher<'a, I> {
        Searcher { index, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Distinct words in the grid, in the order they are first met scanning
    /// cells row by row and, per cell, directions in configured order.
    pub fn find_words(&self, grid: &Grid) -> FoundWords {
        let mut found = FoundWords::new();
        self.scan_rows(grid, 0..grid.row_count(), &mut |word, _, _, _| {
            found.record(word);
        });
        counter!("word_search.words_found", found.len() as u64);
        found
    }

    /// Every occurrence, including repeats of the same word.
    pub fn find_matches(&self, grid: &Grid) -> Vec<SearchMatch> {
        let mut matches = vec![];
        self.scan_rows(grid, 0..grid.row_count(), &mut |word, row, col, direction| {
            matches.push(SearchMatch::new(word.to_string(), row, col, direction));
        });
        matches
    }

    pub(crate) fn scan_rows<F>(&self, grid: &Grid, rows: Range<usize>, found: &mut F)
        where F: FnMut(&str, usize, usize, Direction) {
        let mut candidate = String::new();
        let mut checks: u64 = 0;
        for row in rows {
            for col in 0..grid.row_len(row) {
                for &direction in &self.config.directions {
                    checks += self.walk_ray(grid, row, col, direction, &mut candidate,
                                            &mut |word| found(word, row, col, direction));
                }
            }
        }
        counter!("word_search.prefix_checks", checks);
    }

    /// Extends a candidate one cell at a time from `(row, col)`, reporting
    /// each complete word. Stops at the grid edge or as soon as the
    /// candidate is no longer a prefix of any word. Returns the number of
    /// prefix checks made.
    fn walk_ray<F>(&self, grid: &Grid, row: usize, col: usize, direction: Direction,
                   candidate: &mut String, found: &mut F) -> u64
        where F: FnMut(&str) {
        let (dr, dc) = direction.delta();
        let (mut r, mut c) = (row as isize, col as isize);
        let mut cursor = self.index.root();
        let mut len = 0;
        let mut checks = 0;
        candidate.clear();

        while let Some(letter) = grid.get(r, c) {
            if self.config.max_length.map_or(false, |max| len >= max) {
                break;
            }
            checks += 1;
            cursor = match self.index.step(&cursor, letter) {
                Some(next) => next,
                None => break,
            };
            candidate.push(letter);
            len += 1;
            if len >= self.config.min_word_len && self.index.is_word(&cursor) {
                found(candidate.as_str());
            }
            r += dr;
            c += dc;
        }
        checks
    }
}
