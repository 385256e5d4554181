use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use structopt::StructOpt;

use word_search::{Dictionary, FileFormat, Grid, Puzzle, Result, SearchConfig, Searcher};

/// Find every dictionary word hidden in a grid of letters, reading in any
/// straight line.
#[derive(StructOpt)]
struct Cli {
    /// Word list, one word per line
    #[structopt(long, parse(from_os_str), requires = "grid", conflicts_with = "puzzle")]
    words: Option<PathBuf>,
    /// Column separator for the word list
    #[structopt(long, requires = "words")]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(long, requires = "delimiter")]
    column: Option<usize>,
    /// Grid file, one row per line
    #[structopt(long, parse(from_os_str), requires = "words", conflicts_with = "puzzle")]
    grid: Option<PathBuf>,
    /// JSON file with "grid" and "words" arrays
    #[structopt(long, parse(from_os_str))]
    puzzle: Option<PathBuf>,
    /// Skip leftward and upward readings
    #[structopt(long)]
    forward_only: bool,
    #[structopt(long)]
    min_len: Option<usize>,
    #[structopt(long)]
    max_len: Option<usize>,
    /// Search rows on the rayon thread pool
    #[structopt(long)]
    parallel: bool,
    /// Print every occurrence with its start cell and direction
    #[structopt(long, conflicts_with = "parallel")]
    positions: bool,
    /// Print the found words as a JSON array
    #[structopt(long)]
    json: bool,
}

impl Cli {
    fn load(&self) -> Result<(Dictionary, Grid)> {
        if let (Some(words), Some(grid)) = (&self.words, &self.grid) {
            let format = match self.delimiter {
                Some(delimiter) => FileFormat::builder()
                    .delimiter(delimiter)
                    .word_column(self.column.unwrap_or(0))
                    .build(),
                None => FileFormat::default(),
            };
            eprintln!("Reading words from {:#?}", words);
            let dict = Dictionary::from_reader_with_progress(File::open(words)?, format,
                                                             &mut io::stderr())?;
            return Ok((dict, Grid::from_file(grid)?));
        }
        let puzzle = match &self.puzzle {
            Some(path) => Puzzle::from_file(path)?,
            None => Puzzle::sample(),
        };
        Ok((puzzle.dictionary(), puzzle.grid()))
    }

    fn config(&self) -> SearchConfig {
        let mut config = if self.forward_only {
            SearchConfig::forward_only()
        } else {
            SearchConfig::new()
        };
        if let Some(min) = self.min_len {
            config.min_word_len = min;
        }
        config.max_length = self.max_len;
        config
    }
}

fn run(args: Cli) -> Result<()> {
    let (dict, grid) = args.load()?;
    let searcher = Searcher::with_config(&dict, args.config());

    let start = Instant::now();
    if args.positions {
        let matches = searcher.find_matches(&grid);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            matches.iter().for_each(|m|
                println!("{} at ({}, {}) reading {:?}", m.word, m.row, m.col, m.direction));
        }
        eprintln!("{} matches in {:#?}s", matches.len(), start.elapsed().as_millis() as f64 / 1000.0);
        return Ok(());
    }

    let found = if args.parallel {
        searcher.find_words_parallel(&grid)
    } else {
        searcher.find_words(&grid)
    };
    if args.json {
        println!("{}", serde_json::to_string(&found)?);
    } else {
        found.iter().for_each(|word| println!("{}", word));
    }
    eprintln!("{} words in {:#?}s", found.len(), start.elapsed().as_millis() as f64 / 1000.0);
    Ok(())
}

fn main() {
    let args = Cli::from_args();
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
