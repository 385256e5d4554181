use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A read-only matrix of characters. Rows may have different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn from_rows<I>(rows: I) -> Grid
        where I: IntoIterator, I::Item: AsRef<str> {
        Grid {
            rows: rows.into_iter().map(|row| row.as_ref().chars().collect()).collect(),
        }
    }

    /// One row per line. Trailing blank lines are dropped.
    pub fn from_text(text: &str) -> Grid {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().map_or(false, |l| l.is_empty()) {
            lines.pop();
        }
        Grid::from_rows(lines)
    }

    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Grid> {
        Ok(Grid::from_text(&fs::read_to_string(filename)?))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or 0 when the row does not exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.len())
    }

    pub fn at(&self, row: usize, col: usize) -> Result<char> {
        self.rows.get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(Error::OutOfBounds { row, col })
    }

    /// Like `at`, but takes signed coordinates so callers walking a ray can
    /// step off any edge.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows.get(row as usize)?.get(col as usize).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
