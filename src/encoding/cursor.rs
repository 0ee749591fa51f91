//! A read-only position in an encoded buffer.

use crate::errors::DecodeError;
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

#[derive(Copy, Clone, Debug)]
/// An offset into a shared, immutable [`Bytes`] buffer.
///
/// Reads never move the cursor they are called on. Each returns the value together with a new
/// cursor positioned just past it, so one cursor may be inspected or reused freely.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let buf = Bytes::from(vec![0u8, 1, 2]);
/// let start = ByteCursor::new(&buf);
///
/// let (n, next) = start.read_u16_be().unwrap();
/// assert_eq!(n, 1);
/// assert_eq!(next.offset(), 2);
///
/// // `start` is untouched
/// assert_eq!(start.offset(), 0);
/// ```
pub struct ByteCursor<'a> {
    buf: &'a Bytes,
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `buf`.
    pub fn new(buf: &'a Bytes) -> Self { ByteCursor { buf, offset: 0 } }

    /// Offset of the next unread byte.
    pub fn offset(&self) -> usize { self.offset }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize { self.buf.len() - self.offset }

    /// Indicates whether every byte has been read.
    pub fn is_empty(&self) -> bool { self.remaining() == 0 }

    /// Bounds-checks a read of `width` bytes, returning the end offset.
    #[inline]
    fn end_of(&self, width: usize) -> Result<usize, DecodeError> {
        match self.offset.checked_add(width) {
            Some(end) if end <= self.buf.len() => Ok(end),
            _ => Err(DecodeError::TruncatedInput {
                offset: self.offset,
                needed: width,
                remaining: self.remaining(),
            }),
        }
    }

    #[inline]
    fn advanced(&self, end: usize) -> Self {
        ByteCursor {
            buf: self.buf,
            offset: end,
        }
    }

    /// Borrows the next `width` bytes without copying.
    #[inline]
    fn window(&self, width: usize) -> Result<(&'a [u8], Self), DecodeError> {
        let end = self.end_of(width)?;
        let all: &'a [u8] = self.buf.as_ref();
        Ok((&all[self.offset..end], self.advanced(end)))
    }

    /// Reads one byte.
    #[inline]
    pub fn read_u8(&self) -> Result<(u8, Self), DecodeError> {
        let (bs, next) = self.window(1)?;
        Ok((bs[0], next))
    }

    /// Reads a big-endian `u16`.
    #[inline]
    pub fn read_u16_be(&self) -> Result<(u16, Self), DecodeError> {
        let (bs, next) = self.window(2)?;
        Ok((BigEndian::read_u16(bs), next))
    }

    /// Reads a big-endian `u32`.
    #[inline]
    pub fn read_u32_be(&self) -> Result<(u32, Self), DecodeError> {
        let (bs, next) = self.window(4)?;
        Ok((BigEndian::read_u32(bs), next))
    }

    /// Reads a big-endian two's complement `i32`.
    #[inline]
    pub fn read_i32_be(&self) -> Result<(i32, Self), DecodeError> {
        let (bs, next) = self.window(4)?;
        Ok((BigEndian::read_i32(bs), next))
    }

    /// Reads a big-endian IEEE-754 double.
    #[inline]
    pub fn read_f64_be(&self) -> Result<(f64, Self), DecodeError> {
        let (bs, next) = self.window(8)?;
        Ok((BigEndian::read_f64(bs), next))
    }

    /// Reads `len` bytes as a slice of the shared buffer.
    #[inline]
    pub fn read_slice(&self, len: usize) -> Result<(&'a [u8], Self), DecodeError> {
        self.window(len)
    }

    /// Reads `len` bytes as a [`Bytes`] handle sharing the underlying buffer.
    #[inline]
    pub fn read_bytes(&self, len: usize) -> Result<(Bytes, Self), DecodeError> {
        let end = self.end_of(len)?;
        Ok((self.buf.slice(self.offset, end), self.advanced(end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(v: &[u8]) -> Bytes { Bytes::from(v) }

    #[test]
    fn fixed_width_reads() {
        let b = buf(&[0xff, 0x80, 0, 0, 0, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
        let c = ByteCursor::new(&b);

        let (u, c) = c.read_u8().unwrap();
        assert_eq!(u, 0xff);
        assert_eq!(c.offset(), 1);

        let (i, c) = c.read_i32_be().unwrap();
        assert_eq!(i, i32::min_value());
        assert_eq!(c.offset(), 5);

        let (f, c) = c.read_f64_be().unwrap();
        assert_eq!(f, 1.0);
        assert!(c.is_empty());
    }

    #[test]
    fn unsigned_reads() {
        let b = buf(&[0x01, 0x02, 0xde, 0xad, 0xbe, 0xef]);
        let c = ByteCursor::new(&b);

        let (short, c) = c.read_u16_be().unwrap();
        assert_eq!(short, 0x0102);

        let (long, c) = c.read_u32_be().unwrap();
        assert_eq!(long, 0xdead_beef);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn reads_do_not_move_the_original() {
        let b = buf(&[1, 2, 3]);
        let c = ByteCursor::new(&b);

        let (first, _) = c.read_u8().unwrap();
        let (again, _) = c.read_u8().unwrap();

        assert_eq!(first, again);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn bytes_share_the_buffer() {
        let b = buf(b"hello world");
        let c = ByteCursor::new(&b);

        let (_, c) = c.read_slice(6).unwrap();
        let (world, c) = c.read_bytes(5).unwrap();

        assert_eq!(&world[..], b"world");
        assert!(c.is_empty());

        let (empty, _) = c.read_bytes(0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn truncation() {
        let b = buf(&[0, 1, 2]);
        let c = ByteCursor::new(&b);
        let (_, c) = c.read_u8().unwrap();

        assert_eq!(
            c.read_u32_be().unwrap_err(),
            DecodeError::TruncatedInput {
                offset: 1,
                needed: 4,
                remaining: 2,
            }
        );
        assert!(c.read_f64_be().is_err());
        assert!(c.read_bytes(3).is_err());
        assert!(c.read_bytes(usize::max_value()).is_err());

        let empty = Bytes::new();
        assert!(ByteCursor::new(&empty).read_u8().is_err());
    }
}
