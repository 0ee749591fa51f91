use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error encountered when decoding fails.
///
/// Every variant except [`DecodeError::InvalidEnvelope`] records the byte offset, counted from
/// the start of the input, at which the problem was detected.
pub enum DecodeError {
    /// The leading byte was not the version marker.
    #[fail(display = "invalid envelope: expected version byte 131, found {}", code)]
    InvalidEnvelope {
        /// The byte found instead.
        code: u8,
    },
    /// The tag byte has no decoding routine.
    #[fail(display = "unsupported tag {} at offset {}", tag, offset)]
    UnsupportedTag {
        /// The unknown tag.
        tag: u8,
        /// Offset of the tag byte.
        offset: usize,
    },
    /// Fewer bytes remain than a read requires.
    #[fail(
        display = "truncated input at offset {}: needed {} bytes, {} remaining",
        offset, needed, remaining
    )]
    TruncatedInput {
        /// Offset at which the read started.
        offset: usize,
        /// Width of the attempted read.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// A list's elements were followed by something other than the empty-list tag.
    #[fail(display = "list not closed by an empty-list tag, found tag {} at offset {}", tag, offset)]
    MissingListTerminator {
        /// The tag found where the terminator belongs.
        tag: u8,
        /// Offset of that tag.
        offset: usize,
    },
    /// Bytes cannot be read as the text encoding the tag declares.
    #[fail(display = "malformed text at offset {}", offset)]
    MalformedText {
        /// Offset of the first payload byte.
        offset: usize,
    },
    /// Bytes cannot be read as the number the tag declares.
    #[fail(display = "malformed number at offset {}", offset)]
    MalformedNumber {
        /// Offset of the first payload byte.
        offset: usize,
    },
    /// The input nests deeper than the configured limit.
    #[fail(display = "nesting deeper than {} at offset {}", limit, offset)]
    RecursionLimitExceeded {
        /// The configured depth limit.
        limit: usize,
        /// Offset of the term that would exceed it.
        offset: usize,
    },
    /// A map holds two structurally equal keys.
    #[fail(display = "duplicate map key in map at offset {}", offset)]
    DuplicateMapKey {
        /// Offset of the map's tag byte.
        offset: usize,
    },
    /// Bytes follow the top-level term and the options forbid it.
    #[fail(display = "{} trailing bytes after term ending at offset {}", remaining, offset)]
    TrailingBytes {
        /// Offset just past the top-level term.
        offset: usize,
        /// Number of unread bytes.
        remaining: usize,
    },
}

impl DecodeError {
    /// The byte offset at which the error was detected, when it has one.
    ///
    /// # Example
    ///
    /// ```
    /// use bert::prelude::*;
    ///
    /// let err = decode(&[131u8, 200][..]).unwrap_err();
    ///
    /// assert_eq!(err.offset(), Some(1));
    /// ```
    pub fn offset(&self) -> Option<usize> {
        use DecodeError::*;
        match self {
            InvalidEnvelope { .. } => None,
            UnsupportedTag { offset, .. }
            | TruncatedInput { offset, .. }
            | MissingListTerminator { offset, .. }
            | MalformedText { offset }
            | MalformedNumber { offset }
            | RecursionLimitExceeded { offset, .. }
            | DuplicateMapKey { offset }
            | TrailingBytes { offset, .. } => Some(*offset),
        }
    }
}

#[derive(Debug, Clone, Default, Fail)]
#[fail(display = "Conversion failed with error: {}", _0)]
/// An error encountered when a type-conversion from [`Term`](crate::Term) fails.
pub struct ConversionError(pub String);

impl ConversionError {
    /// Creates a new `ConversionError`
    ///
    /// # Arguments
    ///
    /// * `s: & str` - The message associated with the error.
    pub fn new(s: &str) -> Self { ConversionError(s.to_string()) }
}
