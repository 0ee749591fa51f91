use super::{constants::*, cursor::ByteCursor, options::DecodeOptions};
use crate::{
    errors::DecodeError, util::latin1_to_string, vecmap::VecMap, Atom, Float, Term, Tuple,
};
use num_bigint::{BigInt, Sign};
use std::{convert::TryFrom, str};
use tracing::trace;

/// Tags the decoder understands. Any other byte in tag position is an
/// [`DecodeError::UnsupportedTag`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// 8-byte IEEE-754 float.
    NewFloat,
    /// 1-byte unsigned integer.
    SmallInteger,
    /// 4-byte signed integer.
    Integer,
    /// 31-byte ASCII float.
    FloatString,
    /// Latin-1 atom, 2-byte length, subject to aliasing.
    Atom,
    /// Tuple, 1-byte arity.
    SmallTuple,
    /// Tuple, 4-byte arity.
    LargeTuple,
    /// The empty list.
    Nil,
    /// Byte string, 2-byte length.
    String,
    /// Proper list, 4-byte length.
    List,
    /// Binary, 4-byte length.
    Binary,
    /// Bignum, 1-byte digit count.
    SmallBig,
    /// Bignum, 4-byte digit count.
    LargeBig,
    /// Latin-1 atom, 1-byte length.
    SmallAtom,
    /// Map, 4-byte pair count.
    Map,
    /// UTF-8 atom, 2-byte length.
    AtomUtf8,
    /// UTF-8 atom, 1-byte length.
    SmallAtomUtf8,
}

impl Tag {
    /// Looks a tag byte up in the table.
    pub fn from_byte(byte: u8) -> Option<Tag> {
        use Tag::*;
        match byte {
            NEW_FLOAT_EXT => Some(NewFloat),
            SMALL_INTEGER_EXT => Some(SmallInteger),
            INTEGER_EXT => Some(Integer),
            FLOAT_EXT => Some(FloatString),
            ATOM_EXT => Some(Atom),
            SMALL_TUPLE_EXT => Some(SmallTuple),
            LARGE_TUPLE_EXT => Some(LargeTuple),
            NIL_EXT => Some(Nil),
            STRING_EXT => Some(String),
            LIST_EXT => Some(List),
            BINARY_EXT => Some(Binary),
            SMALL_BIG_EXT => Some(SmallBig),
            LARGE_BIG_EXT => Some(LargeBig),
            SMALL_ATOM_EXT => Some(SmallAtom),
            MAP_EXT => Some(Map),
            ATOM_UTF8_EXT => Some(AtomUtf8),
            SMALL_ATOM_UTF8_EXT => Some(SmallAtomUtf8),
            _ => None,
        }
    }

    /// The byte this tag is written as.
    pub fn byte(self) -> u8 {
        use Tag::*;
        match self {
            NewFloat => NEW_FLOAT_EXT,
            SmallInteger => SMALL_INTEGER_EXT,
            Integer => INTEGER_EXT,
            FloatString => FLOAT_EXT,
            Atom => ATOM_EXT,
            SmallTuple => SMALL_TUPLE_EXT,
            LargeTuple => LARGE_TUPLE_EXT,
            Nil => NIL_EXT,
            String => STRING_EXT,
            List => LIST_EXT,
            Binary => BINARY_EXT,
            SmallBig => SMALL_BIG_EXT,
            LargeBig => LARGE_BIG_EXT,
            SmallAtom => SMALL_ATOM_EXT,
            Map => MAP_EXT,
            AtomUtf8 => ATOM_UTF8_EXT,
            SmallAtomUtf8 => SMALL_ATOM_UTF8_EXT,
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Tag, u8> { Tag::from_byte(byte).ok_or(byte) }
}

/// A decoded term and the cursor just past it.
pub type Step<'a> = Result<(Term, ByteCursor<'a>), DecodeError>;

type Elements<'a> = Result<(Vec<Term>, ByteCursor<'a>), DecodeError>;

#[derive(Copy, Clone, Debug)]
/// Recursive-descent decoder over a [`ByteCursor`].
///
/// Every routine takes a cursor positioned just past a tag byte and returns the term together
/// with a cursor positioned just past its payload.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// // two terms back to back, no envelope
/// let buf = Bytes::from(vec![97u8, 1, 97, 2]);
/// let opts = DecodeOptions::default();
/// let decoder = Decoder::new(&opts);
///
/// let (first, rest) = decoder.decode_term(ByteCursor::new(&buf)).unwrap();
/// let (second, rest) = decoder.decode_term(rest).unwrap();
///
/// assert_eq!((first, second), (Term::Int(1), Term::Int(2)));
/// assert!(rest.is_empty());
/// ```
pub struct Decoder<'o> {
    opts: &'o DecodeOptions,
}

impl<'o> Decoder<'o> {
    pub fn new(opts: &'o DecodeOptions) -> Self { Decoder { opts } }

    /// Checks the version marker, then decodes the term after it.
    pub fn decode_envelope<'a>(&self, cur: ByteCursor<'a>) -> Step<'a> {
        let (code, cur) = cur.read_u8()?;
        if code != VERSION {
            return Err(DecodeError::InvalidEnvelope { code });
        }
        self.decode_term(cur)
    }

    /// Decodes one term starting at its tag byte.
    pub fn decode_term<'a>(&self, cur: ByteCursor<'a>) -> Step<'a> { self.dispatch(cur, 0) }

    fn dispatch<'a>(&self, cur: ByteCursor<'a>, depth: usize) -> Step<'a> {
        let offset = cur.offset();
        let (byte, cur) = cur.read_u8()?;
        let tag = Tag::from_byte(byte).ok_or(DecodeError::UnsupportedTag { tag: byte, offset })?;
        trace!(tag = byte, offset = offset, depth = depth, "dispatching term");

        match tag {
            Tag::Nil => Ok((Term::List(Vec::new()), cur)),
            Tag::List => self.list(cur, depth),
            Tag::Map => self.map(cur, depth, offset),
            Tag::SmallTuple => {
                let (arity, cur) = cur.read_u8()?;
                self.tuple(cur, arity as usize, depth)
            }
            Tag::LargeTuple => {
                let (arity, cur) = cur.read_u32_be()?;
                self.tuple(cur, arity as usize, depth)
            }
            _ => self.scalar(tag, cur),
        }
    }

    /// Leaf terms. Kept out of line so their locals stay off the recursive path.
    #[inline(never)]
    fn scalar<'a>(&self, tag: Tag, cur: ByteCursor<'a>) -> Step<'a> {
        match tag {
            Tag::SmallInteger => {
                let (n, cur) = cur.read_u8()?;
                Ok((Term::Int(n as i64), cur))
            }
            Tag::Integer => {
                let (n, cur) = cur.read_i32_be()?;
                Ok((Term::Int(n as i64), cur))
            }
            Tag::NewFloat => {
                let (f, cur) = cur.read_f64_be()?;
                Ok((Term::Float(Float::from(f)), cur))
            }
            Tag::FloatString => float_string(cur),
            Tag::SmallBig => {
                let (len, cur) = cur.read_u8()?;
                bignum(cur, len as usize)
            }
            Tag::LargeBig => {
                let (len, cur) = cur.read_u32_be()?;
                bignum(cur, len as usize)
            }
            Tag::Atom => {
                let (len, cur) = cur.read_u16_be()?;
                let (name, cur) = cur.read_slice(len as usize)?;
                let name = latin1_to_string(name);
                match self.opts.aliases.resolve(&name) {
                    Some(alias) => Ok((alias, cur)),
                    None => Ok((Term::Atom(Atom::from(name)), cur)),
                }
            }
            Tag::SmallAtom => {
                let (len, cur) = cur.read_u8()?;
                let (name, cur) = cur.read_slice(len as usize)?;
                Ok((Term::Atom(Atom::from(latin1_to_string(name))), cur))
            }
            Tag::SmallAtomUtf8 => {
                let (len, cur) = cur.read_u8()?;
                let (name, cur) = utf8(cur, len as usize)?;
                Ok((Term::Atom(Atom::from(name)), cur))
            }
            Tag::AtomUtf8 => {
                let (len, cur) = cur.read_u16_be()?;
                let (name, cur) = utf8(cur, len as usize)?;
                Ok((Term::Atom(Atom::from(name)), cur))
            }
            Tag::String => {
                let (len, cur) = cur.read_u16_be()?;
                let (text, cur) = utf8(cur, len as usize)?;
                Ok((Term::Text(text), cur))
            }
            Tag::Binary => {
                let (len, cur) = cur.read_u32_be()?;
                let (bs, cur) = cur.read_bytes(len as usize)?;
                Ok((Term::Binary(bs), cur))
            }
            Tag::Nil | Tag::List | Tag::Map | Tag::SmallTuple | Tag::LargeTuple => {
                unreachable!("composite tag {:?} routed to scalar decoding", tag)
            }
        }
    }

    /// Fails if children of a term at `depth` would nest too deeply.
    #[inline]
    fn descend(&self, cur: &ByteCursor, depth: usize) -> Result<usize, DecodeError> {
        let limit = self.opts.max_depth;
        if depth >= limit {
            Err(DecodeError::RecursionLimitExceeded {
                limit,
                offset: cur.offset(),
            })
        } else {
            Ok(depth + 1)
        }
    }

    /// Decodes `len` consecutive terms, each starting where the previous one ended.
    fn elements<'a>(&self, mut cur: ByteCursor<'a>, len: usize, depth: usize) -> Elements<'a> {
        // every term is at least one byte
        let mut out = Vec::with_capacity(len.min(cur.remaining()));
        if len == 0 {
            return Ok((out, cur));
        }

        let depth = self.descend(&cur, depth)?;
        for _ in 0..len {
            let (t, next) = self.dispatch(cur, depth)?;
            out.push(t);
            cur = next;
        }
        Ok((out, cur))
    }

    fn tuple<'a>(&self, cur: ByteCursor<'a>, arity: usize, depth: usize) -> Step<'a> {
        let (elems, cur) = self.elements(cur, arity, depth)?;
        Ok((Term::Tuple(Tuple::from(elems)), cur))
    }

    fn list<'a>(&self, cur: ByteCursor<'a>, depth: usize) -> Step<'a> {
        let (len, cur) = cur.read_u32_be()?;
        let (elems, cur) = self.elements(cur, len as usize, depth)?;

        let offset = cur.offset();
        let (tail, cur) = cur.read_u8()?;
        if tail == NIL_EXT {
            Ok((Term::List(elems), cur))
        } else {
            Err(DecodeError::MissingListTerminator { tag: tail, offset })
        }
    }

    fn map<'a>(&self, cur: ByteCursor<'a>, depth: usize, offset: usize) -> Step<'a> {
        let (len, mut cur) = cur.read_u32_be()?;
        let len = len as usize;

        // every pair is at least two bytes
        let mut pairs = Vec::with_capacity(len.min(cur.remaining() / 2));
        if len > 0 {
            let depth = self.descend(&cur, depth)?;
            for _ in 0..len {
                let (key, next) = self.dispatch(cur, depth)?;
                let (val, next) = self.dispatch(next, depth)?;
                pairs.push((key, val));
                cur = next;
            }
        }

        match VecMap::try_from_pairs(pairs) {
            Ok(m) => Ok((Term::Map(m), cur)),
            Err(_) => Err(DecodeError::DuplicateMapKey { offset }),
        }
    }
}

/// Reads `len` bytes that must be valid UTF-8.
fn utf8(cur: ByteCursor, len: usize) -> Result<(String, ByteCursor), DecodeError> {
    let offset = cur.offset();
    let (bs, cur) = cur.read_slice(len)?;
    match str::from_utf8(bs) {
        Ok(s) => Ok((s.to_owned(), cur)),
        Err(_) => Err(DecodeError::MalformedText { offset }),
    }
}

/// Sign byte, then `len` little-endian base-256 digits.
fn bignum(cur: ByteCursor, len: usize) -> Step {
    let (sign, cur) = cur.read_u8()?;
    let (digits, cur) = cur.read_slice(len)?;
    let magnitude = BigInt::from_bytes_le(Sign::Plus, digits);
    let n = if sign == 0 { magnitude } else { -magnitude };
    Ok((Term::Bignum(n), cur))
}

/// A float printed as text into a fixed field, padded with NULs.
fn float_string(cur: ByteCursor) -> Step {
    let offset = cur.offset();
    let (field, cur) = cur.read_slice(FLOAT_STRING_LEN)?;
    let malformed = DecodeError::MalformedNumber { offset };

    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    let text = str::from_utf8(&field[..end]).map_err(|_| malformed.clone())?;
    match text.trim().parse::<f64>() {
        Ok(f) if f.is_finite() => Ok((Term::Float(Float::from(f)), cur)),
        _ => Err(malformed),
    }
}
