/// What a candidate string is, relative to the loaded words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Absent,
    Prefix,
    Word,
}

/// A prefix oracle over a fixed set of words.
///
/// Lookups are incremental: a cursor stands for the characters consumed so
/// far, and `step` extends it by one character. `step` returning `None`
/// means the extended string is not a prefix of any word.
pub trait Index {
    type Cursor<'a>: Clone
    where
        Self: 'a;

    fn root(&self) -> Self::Cursor<'_>;
    fn step<'a>(&'a self, at: &Self::Cursor<'a>, c: char) -> Option<Self::Cursor<'a>>;
    fn is_word(&self, at: &Self::Cursor<'_>) -> bool;

    fn classify(&self, candidate: &str) -> Classification {
        if candidate.is_empty() {
            return Classification::Absent;
        }
        let mut at = self.root();
        for c in candidate.chars() {
            match self.step(&at, c) {
                Some(next) => at = next,
                None => return Classification::Absent,
            }
        }
        if self.is_word(&at) {
            Classification::Word
        } else {
            Classification::Prefix
        }
    }

    fn contains(&self, word: &str) -> bool {
        self.classify(word) == Classification::Word
    }
}
