use metrics::counter;
use rayon::prelude::*;

use crate::dictionary::index::Index;
use crate::grid::Grid;
use crate::search::found_words::FoundWords;
use crate::search::search::Searcher;

impl<'a, I: Index + Sync> Searcher<'a, I> {
    /// Same result as `find_words`, with rows shared out across the rayon
    /// pool. Each row gets its own candidate buffer and collector; the
    /// collectors are merged in row order, so first-seen order is kept.
    pub fn find_words_parallel(&self, grid: &Grid) -> FoundWords {
        let per_row: Vec<FoundWords> = (0..grid.row_count())
            .into_par_iter()
            .map(|row| {
                let mut found = FoundWords::new();
                self.scan_rows(grid, row..row + 1, &mut |word, _, _, _| {
                    found.record(word);
                });
                found
            })
            .collect();

        let mut found = FoundWords::new();
        per_row.into_iter().for_each(|row| found.merge(row));
        counter!("word_search.words_found", found.len() as u64);
        found
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::dictionary::dictionary::Dictionary;
    use crate::grid::Grid;
    use crate::search::search::Searcher;
    use crate::search::searchconfig::SearchConfig;

    fn random_rows(rng: &mut StdRng, rows: usize, max_cols: usize) -> Vec<String> {
        (0..rows)
            .map(|_| {
                let cols = rng.gen_range(0..=max_cols);
                (0..cols).map(|_| rng.gen_range(b'a'..=b'd') as char).collect()
            })
            .collect()
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let words: Vec<String> = (0..200)
            .map(|_| {
                let len = rng.gen_range(1..=5);
                (0..len).map(|_| rng.gen_range(b'a'..=b'd') as char).collect()
            })
            .collect();
        let dict = Dictionary::load(&words);

        for _ in 0..10 {
            let grid = Grid::from_rows(random_rows(&mut rng, 12, 12));
            for config in [SearchConfig::new(), SearchConfig::forward_only()] {
                let searcher = Searcher::with_config(&dict, config);
                assert_eq!(searcher.find_words_parallel(&grid), searcher.find_words(&grid));
            }
        }
    }

    #[test]
    fn parallel_on_empty_grid() {
        let dict = Dictionary::load(["a"]);
        let grid = Grid::from_rows(Vec::<&str>::new());
        assert!(Searcher::new(&dict).find_words_parallel(&grid).is_empty());
    }
}
