use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use typed_arena::Arena;
use typed_builder::TypedBuilder;

use crate::dictionary::index::Index;
use crate::dictionary::trie::{Trie, TrieBuilder, TrieNode};
use crate::error::{Error, Result};

/// The set of words searched for. Built once, read-only afterwards.
pub struct Dictionary {
    trie: Trie,
}

/// Layout of a word-list file. By default every line is one word; with a
/// delimiter, the word is taken from `word_column` (0 if unset).
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line.trim_end_matches('\r')),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.trim_end_matches('\r')
                    .split(delimiter)
                    .nth(column)
                    .ok_or(Error::MissingColumn { line: line_no, column })
            }
        }
    }
}

impl Dictionary {
    pub fn load<I>(words: I) -> Dictionary
        where I: IntoIterator, I::Item: AsRef<str> {
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        builder.add_all(words);
        Dictionary { trie: builder.build() }
    }

    /// Reads a word list without reporting progress.
    pub fn from_file<P: AsRef<Path>>(filename: P, format: FileFormat) -> Result<Dictionary> {
        Self::from_reader(File::open(filename)?, format)
    }

    pub fn from_reader<R: Read>(reader: R, format: FileFormat) -> Result<Dictionary> {
        Self::from_reader_with_progress(reader, format, &mut io::sink())
    }

    /// Like `from_reader`, writing load progress (a line every 100000 words
    /// and a closing summary) to `progress`.
    pub fn from_reader_with_progress<R: Read, W: Write>(reader: R, format: FileFormat,
                                                         progress: &mut W) -> Result<Dictionary> {
        let start = Instant::now();
        let arena = Arena::new();
        let mut builder = TrieBuilder::new(&arena);
        let mut count: usize = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = format.parse_line(&line, idx + 1)?;
            builder.add(word);
            count += 1;
            if count % 100000 == 0 {
                writeln!(progress, "{} {}", count, word)?;
            }
        }

        let elapsed = start.elapsed();
        writeln!(progress, "Read {} words ({} distinct) in {}s",
                 count, builder.len(), elapsed.as_millis() as f64 / 1000.0)?;
        Ok(Dictionary { trie: builder.build() })
    }

    delegate! {
        to self.trie {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn words(&self) -> Vec<String>;
        }
    }
}

impl Index for Dictionary {
    type Cursor<'a> = &'a TrieNode;

    fn root(&self) -> &TrieNode {
        self.trie.root()
    }

    fn step<'a>(&'a self, at: &&'a TrieNode, c: char) -> Option<&'a TrieNode> {
        self.trie.step(at, c)
    }

    fn is_word(&self, at: &&TrieNode) -> bool {
        self.trie.is_word(at)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::load(iter)
    }
}
