//! Errors that may be encountered when converting characters to digits
#[cfg(doc)]
use crate::Digit;

/// Error for [`Digit::try_from`] on characters outside `'1'..='9'`
#[derive(Debug, thiserror::Error)]
#[error("character '{0}' is not a digit 1-9")]
pub struct NotADigit(pub(crate) char);
