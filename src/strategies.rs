//! Alternative implementations of the calibration scan.
//!
//! The canonical implementation lives in [`crate::extract`] and
//! [`crate::total`]. The functions here compute the same totals with
//! different scanning techniques and exist for cross-checking and
//! benchmarking. Differences between them are performance only, never
//! behavior: any two of them agree on any corpus.

use std::convert::TryFrom;

use crate::digit::Digit;
use crate::extract::combine;
use crate::words::WordTable;

/// Character-by-character scan counting only literal digit characters.
///
/// Equivalent to [`crate::total`] with no word table.
pub fn digit_chars(input: &str) -> u64 {
    let mut total = 0;
    for line in input.lines() {
        let mut first = None;
        let mut last = None;
        for ch in line.chars() {
            let Ok(digit) = Digit::try_from(ch) else {
                continue;
            };
            first.get_or_insert(digit);
            last = Some(digit);
        }
        if let (Some(first), Some(last)) = (first, last) {
            total += u64::from(combine(first, last));
        }
    }
    total
}

/// Byte scan with embedded substring-against-table lookups.
///
/// Equivalent to [`crate::total`] with a word table. The scan advances one
/// byte at a time even across a multi-byte word match, so overlapping words
/// are all detected.
pub fn table_scan(input: &str, words: &WordTable) -> u64 {
    let mut total = 0;
    for line in input.lines().map(str::as_bytes) {
        let mut first = None;
        let mut last = None;
        for offset in 0..line.len() {
            let digit = Digit::from_ascii(line[offset]).or_else(|| words.match_at(line, offset));
            let Some(digit) = digit else {
                continue;
            };
            first.get_or_insert(digit);
            last = Some(digit);
        }
        if let (Some(first), Some(last)) = (first, last) {
            total += u64::from(combine(first, last));
        }
    }
    total
}

/// Anchored alternation of digit-or-word, re-tried at every offset.
///
/// The pattern is anchored at the start so a match is only ever found at the
/// probed offset itself, and the probe moves forward one byte per step like
/// the other scans.
pub fn anchored(input: &str, words: &WordTable) -> u64 {
    let mut pattern = String::from("^(?:[1-9]");
    for (word, _) in words.entries() {
        pattern.push('|');
        pattern.push_str(&regex::escape(word));
    }
    pattern.push(')');
    let pattern = regex::bytes::Regex::new(&pattern).expect("digit-word alternation is valid");

    let mut total = 0;
    for line in input.lines().map(str::as_bytes) {
        let mut first = None;
        let mut last = None;
        for offset in 0..line.len() {
            let Some(found) = pattern.find(&line[offset..]) else {
                continue;
            };
            let digit = match found.as_bytes() {
                [byte] => Digit::from_ascii(*byte),
                word => words.value_of(word),
            };
            let Some(digit) = digit else {
                continue;
            };
            first.get_or_insert(digit);
            last = Some(digit);
        }
        if let (Some(first), Some(last)) = (first, last) {
            total += u64::from(combine(first, last));
        }
    }
    total
}
