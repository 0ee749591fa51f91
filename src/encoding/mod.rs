//! # External term format decoder
//!
//! Entry points that take an encoded buffer, check its version marker, and decode the single
//! term that follows.
//!
//! # Example
//!
//! ```
//! use bert::prelude::*;
//!
//! // {ok, [1, 2]}
//! let bs = vec![131u8, 104, 2, 100, 0, 2, 111, 107, 108, 0, 0, 0, 2, 97, 1, 97, 2, 106];
//!
//! let term = decode(bs).unwrap();
//!
//! let tuple = term.to_tuple().unwrap();
//! assert_eq!(tuple[0], Term::from(Atom::from("ok")));
//! assert_eq!(tuple[1], Term::List(vec![Term::Int(1), Term::Int(2)]));
//! assert_eq!(term.to_string(), "{ok,[1,2]}");
//! ```

use crate::{errors::DecodeError, Term};
use bytes::Bytes;
use tracing::debug;

pub mod constants;
pub mod cursor;
pub mod de;
pub mod options;

pub use constants::{DEFAULT_MAX_DEPTH, VERSION};
pub use cursor::ByteCursor;
pub use de::{Decoder, Step, Tag};
pub use options::{AliasTable, DecodeOptions};

/// Decodes a buffer holding the version marker and one term, using default options.
///
/// Bytes after the term are ignored.
///
/// # Arguments
///
/// * `data` - The encoded bytes; anything convertible into [`Bytes`].
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// assert_eq!(decode(&[131u8, 97, 255][..]).unwrap(), Term::Int(255));
///
/// // no version marker
/// assert_eq!(
///     decode(&[0u8, 1, 2, 3][..]).unwrap_err(),
///     DecodeError::InvalidEnvelope { code: 0 }
/// );
/// ```
pub fn decode<B: Into<Bytes>>(data: B) -> Result<Term, DecodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decodes a buffer holding the version marker and one term.
///
/// # Arguments
///
/// * `data` - The encoded bytes.
/// * `opts` - Depth limit, atom aliases, and whether trailing bytes are an error.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let opts = DecodeOptions::default().deny_trailing_bytes(true);
///
/// assert!(decode_with(&[131u8, 97, 1][..], &opts).is_ok());
/// assert_eq!(
///     decode_with(&[131u8, 97, 1, 0][..], &opts).unwrap_err(),
///     DecodeError::TrailingBytes { offset: 3, remaining: 1 }
/// );
/// ```
pub fn decode_with<B: Into<Bytes>>(data: B, opts: &DecodeOptions) -> Result<Term, DecodeError> {
    let (term, consumed, total) = run(data.into(), opts)?;
    if opts.deny_trailing_bytes && consumed < total {
        let err = DecodeError::TrailingBytes {
            offset: consumed,
            remaining: total - consumed,
        };
        debug!(error = %err, "decode failed");
        return Err(err);
    }
    Ok(term)
}

/// Decodes the version marker and one term from the front of a buffer, returning the term and
/// the number of bytes it took, marker included.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let (term, used) = decode_prefix(&[131u8, 98, 0, 0, 1, 0, 131, 106][..]).unwrap();
///
/// assert_eq!(term, Term::Int(256));
/// assert_eq!(used, 6);
/// ```
pub fn decode_prefix<B: Into<Bytes>>(data: B) -> Result<(Term, usize), DecodeError> {
    decode_prefix_with(data, &DecodeOptions::default())
}

/// As [`decode_prefix`], with explicit options. Trailing bytes are never an error here.
pub fn decode_prefix_with<B: Into<Bytes>>(
    data: B,
    opts: &DecodeOptions,
) -> Result<(Term, usize), DecodeError> {
    run(data.into(), opts).map(|(term, consumed, _)| (term, consumed))
}

fn run(buf: Bytes, opts: &DecodeOptions) -> Result<(Term, usize, usize), DecodeError> {
    match Decoder::new(opts).decode_envelope(ByteCursor::new(&buf)) {
        Ok((term, rest)) => {
            debug!(
                consumed = rest.offset(),
                trailing = rest.remaining(),
                "decoded term"
            );
            Ok((term, rest.offset(), buf.len()))
        }
        Err(err) => {
            debug!(error = %err, "decode failed");
            Err(err)
        }
    }
}
