#![warn(missing_docs)]
//! The calibration library
//!
//! ## Overview
//!
//! Calibration is a library that recovers the calibration value hidden in
//! each line of a text document: the first and the last digit found in the
//! line, combined into a two-digit number. Digits are either literal digit
//! characters or, when a [`WordTable`] is supplied, spelled-out words like
//! "seven".
//!
//! Word occurrences may overlap. The scan probes every offset of a line and
//! never skips past a matched word, so "eightwo" contains both an 8 and a 2.
//! This is intentional and part of the contract.
//!
//! ## Example
//!
//! ```
//! use calibration::WordTable;
//!
//! let document = "\
//! two1nine
//! eightwothree
//! abcone2threexyz
//! xtwone3four";
//!
//! // Only literal digit characters count without a word table.
//! assert_eq!(calibration::extract("two1nine", None), Some(11));
//!
//! let words = WordTable::spelled_out();
//! assert_eq!(calibration::extract("two1nine", Some(&words)), Some(29));
//!
//! // Lines without any digit contribute nothing to the total.
//! assert_eq!(calibration::total(document, Some(&words)), 29 + 83 + 13 + 24);
//! ```

mod digit;
mod extract;
mod words;

pub mod errors;
pub mod strategies;

pub use crate::digit::Digit;
pub use crate::extract::{extract, occurrences, total, Occurrence};
pub use crate::words::WordTable;
