use crate::digit::Digit;

// no key is a prefix of another, so at most one word can match at an offset
#[rustfmt::skip]
const SPELLED_OUT: &[(&str, u8)] = &[
    ("one",   1),
    ("two",   2),
    ("three", 3),
    ("four",  4),
    ("five",  5),
    ("six",   6),
    ("seven", 7),
    ("eight", 8),
    ("nine",  9),
];

/// An immutable mapping from spelled-out digit words to their values.
#[derive(Copy, Clone, Debug)]
pub struct WordTable {
    entries: &'static [(&'static str, u8)],
}

impl WordTable {
    /// The standard table of the nine English words "one" through "nine".
    pub fn spelled_out() -> Self {
        WordTable {
            entries: SPELLED_OUT,
        }
    }

    /// Returns an iterator over all words and their digit values.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Digit)> {
        self.entries
            .iter()
            .map(|&(word, value)| (word, Digit::new(value)))
    }

    /// Length of the longest word in the table. Substrings longer than this
    /// can never match.
    pub fn longest_word(&self) -> usize {
        self.entries
            .iter()
            .map(|(word, _)| word.len())
            .max()
            .unwrap_or(0)
    }

    /// Searches for a word matching the start of `line[offset..]`.
    pub(crate) fn match_at(&self, line: &[u8], offset: usize) -> Option<Digit> {
        let tail = &line[offset..];
        self.entries
            .iter()
            .find(|(word, _)| tail.starts_with(word.as_bytes()))
            .and_then(|&(_, value)| Digit::new_checked(value))
    }

    /// Looks up the value of an exact word.
    pub(crate) fn value_of(&self, word: &[u8]) -> Option<Digit> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_bytes() == word)
            .and_then(|&(_, value)| Digit::new_checked(value))
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::spelled_out()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spelled_out_covers_all_digits() {
        let table = WordTable::spelled_out();
        let values = table.entries().map(|(_, digit)| digit).collect::<Vec<_>>();
        assert_eq!(values, Digit::all().collect::<Vec<_>>());
    }

    #[test]
    fn no_word_is_a_prefix_of_another() {
        let table = WordTable::spelled_out();
        for (word, _) in table.entries() {
            for (other, _) in table.entries() {
                if word != other {
                    assert!(!other.starts_with(word));
                }
            }
        }
    }

    #[test]
    fn longest_word() {
        assert_eq!(WordTable::spelled_out().longest_word(), 5);
    }
}
