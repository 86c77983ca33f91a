use std::convert::TryFrom;
use std::num::NonZeroU8;

use crate::errors::NotADigit;

// calibration inputs only ever contain 1-9, so 0 is not representable
/// A digit with a value from `1..=9`, as found in a calibration line.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an ASCII byte `b'1'..=b'9'`.
    pub(crate) fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'1'..=b'9' => Self::new_checked(byte - b'0'),
            _ => None,
        }
    }

    /// Returns an iterator over all digits.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<char> for Digit {
    type Error = NotADigit;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        u8::try_from(ch)
            .ok()
            .and_then(Digit::from_ascii)
            .ok_or(NotADigit(ch))
    }
}
