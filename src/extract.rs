use crate::digit::Digit;
use crate::words::WordTable;

/// A digit found at a specific byte offset within a line, either as a
/// literal digit character or as a spelled-out word starting there.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Occurrence {
    /// Byte offset of the digit character or of the word's first character.
    pub offset: usize,
    /// The digit's value.
    pub digit: Digit,
}

/// Returns an iterator over all digit occurrences in a line, in order.
///
/// Every starting offset is probed, so occurrences may overlap: "twone"
/// yields both 2 and 1. A literal digit character takes precedence over a
/// word starting at the same offset (they cannot coexist anyway, since words
/// start with letters).
///
/// Without a word table, only literal digit characters count.
pub fn occurrences<'a>(
    line: &'a str,
    words: Option<&'a WordTable>,
) -> impl Iterator<Item = Occurrence> + 'a {
    let bytes = line.as_bytes();
    (0..bytes.len()).filter_map(move |offset| {
        let digit = Digit::from_ascii(bytes[offset])
            .or_else(|| words.and_then(|table| table.match_at(bytes, offset)))?;
        Some(Occurrence { offset, digit })
    })
}

/// Extracts the calibration value of a line: the first and last digit
/// occurrence combined as `first * 10 + last`.
///
/// Returns `None` for lines without any occurrence, including the empty
/// line. A line with exactly one occurrence uses it as both first and last.
///
/// ```
/// use calibration::WordTable;
///
/// let words = WordTable::spelled_out();
/// assert_eq!(calibration::extract("treb7uchet", None), Some(77));
/// assert_eq!(calibration::extract("two1nine", Some(&words)), Some(29));
/// ```
pub fn extract(line: &str, words: Option<&WordTable>) -> Option<u32> {
    let mut occurrences = occurrences(line, words);
    let first = occurrences.next()?;
    let last = occurrences.last().unwrap_or(first);
    Some(combine(first.digit, last.digit))
}

/// Sums the calibration values of all lines in `input`. Lines without any
/// digit occurrence contribute 0.
pub fn total(input: &str, words: Option<&WordTable>) -> u64 {
    input
        .lines()
        .filter_map(|line| extract(line, words))
        .map(u64::from)
        .sum()
}

#[inline]
pub(crate) fn combine(first: Digit, last: Digit) -> u32 {
    u32::from(first.get()) * 10 + u32::from(last.get())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn occurrences_overlap() {
        let words = WordTable::spelled_out();
        let found = occurrences("twone", Some(&words))
            .map(|occurrence| (occurrence.offset, occurrence.digit.get()))
            .collect::<Vec<_>>();
        assert_eq!(found, vec![(0, 2), (2, 1)]);
    }

    #[test]
    fn occurrences_skip_words_without_table() {
        assert_eq!(occurrences("twone", None).count(), 0);
    }

    #[test]
    fn word_behind_leading_letter() {
        let words = WordTable::spelled_out();
        let first = occurrences("zoneight234", Some(&words)).next().unwrap();
        assert_eq!(first.offset, 1);
        assert_eq!(first.digit, Digit::new(1));
    }

    #[test]
    fn zero_is_not_an_occurrence() {
        assert_eq!(extract("0a0", None), None);
        assert_eq!(extract("0a7", None), Some(77));
    }
}
