use core::fmt;

/// Everything that can go wrong, which is not much: bad input text, a buffer
/// that is too small, or a checked operation that would overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A character is not a digit in the requested base.
    OutOfRange,
    /// Empty input, or a sign/point where none may be.
    InvalidFormat,
    /// The destination buffer cannot hold the complete output.
    BufferTooSmall,
    /// Raw byte import with the wrong number of bytes.
    InvalidLength,
    /// The result does not fit the fixed width.
    Overflow,
    /// Attempted division by zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => f.write_str("character is not a digit in this base"),
            Error::InvalidFormat => f.write_str("malformed number"),
            Error::BufferTooSmall => f.write_str("buffer too small"),
            Error::InvalidLength => f.write_str("wrong number of bytes"),
            Error::Overflow => f.write_str("arithmetic overflow"),
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
