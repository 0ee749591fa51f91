//! # BERT
//!
//! BERT (Binary ERlang Term) is the external term format that Erlang-family runtimes use to
//! exchange data with other programs. This crate decodes it into a strongly-typed [`Term`]
//! tree.
//!
//! # Usage
//!
//! ```
//! use bert::prelude::*;
//!
//! // #{name => <<"bert">>, tags => [1, 2]}
//! let bs = vec![
//!     131u8, 116, 0, 0, 0, 2,
//!     100, 0, 4, 110, 97, 109, 101, 109, 0, 0, 0, 4, 98, 101, 114, 116,
//!     100, 0, 4, 116, 97, 103, 115, 108, 0, 0, 0, 2, 97, 1, 97, 2, 106,
//! ];
//!
//! let map = decode(bs).unwrap().into_map().unwrap();
//!
//! let name = map.get(&Term::from(Atom::from("name"))).unwrap();
//! assert_eq!(name.to_binary().unwrap(), &Bytes::from_static(b"bert"));
//! ```
//!
//! Decoding never returns a partial term: the result is either a complete [`Term`] or a
//! [`DecodeError`] naming what went wrong and the byte offset where it was found.
//!
//! [`DecodeError`]: crate::errors::DecodeError
//!
//! # An overview of term types
//!
//! | Variant | From tags |
//! | --- | --- |
//! | [`Term::Nil`], [`Term::Bool`] | atom tag 100 named `nil`, `true`, `false` |
//! | [`Term::Undefined`] | atom tag 100 named `undefined`, only with [`AliasTable::with_undefined`] |
//! | [`Term::Atom`] | 100, 115, 118, 119 |
//! | [`Term::Int`] | 97, 98 |
//! | [`Term::Bignum`] | 110, 111 |
//! | [`Term::Float`] | 70, 99 |
//! | [`Term::Text`] | 107 |
//! | [`Term::Binary`] | 109 |
//! | [`Term::List`] | 106, 108 |
//! | [`Term::Map`] | 116 |
//! | [`Term::Tuple`] | 104, 105 |
//!
//! [`AliasTable::with_undefined`]: crate::encoding::AliasTable::with_undefined
//!
//! # Format
//!
//! This section describes the subset of the binary format this crate reads.
//!
//! ## Envelope
//!
//! An encoded term starts with the version byte `131`, followed by exactly one term.
//!
//! ## Tags
//!
//! The first byte of every term is its *tag*. All multi-byte lengths and integers are
//! big-endian.
//!
//! | Tag | Name | Layout after the tag |
//! | --- | --- | --- |
//! | 97  | small integer | `u8` |
//! | 98  | integer | `i32` |
//! | 99  | float | 31 bytes of ASCII, e.g. `1.00000000000000000000e+00`, NUL padded |
//! | 70  | new float | 8-byte IEEE-754 double |
//! | 110 | small big | `u8` digit count `n`, sign byte, `n` digits |
//! | 111 | large big | `u32` digit count `n`, sign byte, `n` digits |
//! | 100 | atom | `u16` length, Latin-1 bytes |
//! | 115 | small atom | `u8` length, Latin-1 bytes |
//! | 118 | UTF-8 atom | `u16` length, UTF-8 bytes |
//! | 119 | small UTF-8 atom | `u8` length, UTF-8 bytes |
//! | 107 | string | `u16` length, bytes |
//! | 109 | binary | `u32` length, bytes |
//! | 106 | nil | nothing; the empty list |
//! | 108 | list | `u32` count, that many terms, then tag 106 |
//! | 116 | map | `u32` pair count, that many key then value terms |
//! | 104 | small tuple | `u8` arity, that many terms |
//! | 105 | large tuple | `u32` arity, that many terms |
//!
//! ## Bignums
//!
//! Bignum digits are base 256 in little-endian order, so the value is
//! `sum(digit[i] * 256^i)`. A sign byte of `0` means positive; anything else negates.

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

#[macro_use]
pub mod util;

pub mod atom;
pub mod encoding;
pub mod errors;
pub mod float;
pub mod prelude;
pub mod tuple;
pub mod vecmap;

pub use atom::Atom;
pub use float::Float;
pub use tuple::Tuple;

use bytes::Bytes;
use errors::ConversionError;
use failure::{bail, Error};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::{convert::TryInto, fmt};
use vecmap::VecMap;

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// [`Term`] and its variants.
///
/// Terms own their children outright and are never changed after decoding.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let t = decode(&[131u8, 100, 0, 4, 116, 114, 117, 101][..]).unwrap();
///
/// let val = match t {
///     Term::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// ```
pub enum Term {
    /// The atom `nil`.
    Nil,
    /// The atom `undefined`, when aliasing for it is switched on.
    Undefined,
    /// The atoms `true` and `false`.
    Bool(bool),
    /// Any other atom.
    Atom(Atom),
    /// An integer that arrived in a fixed-width tag.
    Int(i64),
    /// An integer that arrived in a bignum tag, whatever its size.
    Bignum(BigInt),
    /// Floating point number.
    Float(Float),
    /// A byte string decoded as UTF-8 text.
    Text(String),
    /// Opaque bytes.
    Binary(Bytes),
    /// A proper list.
    List(Vec<Term>),
    /// Map.
    ///
    /// ```
    /// use bert::prelude::{Term::Map, *};
    ///
    /// let m = Map(VecMap::from(vec![(Term::from(1), Term::List(vec![]))]));
    ///
    /// assert_eq!(m.to_string(), "#{1 => []}");
    /// ```
    Map(VecMap<Term, Term>),
    /// Fixed-arity tuple.
    Tuple(Tuple),
}

impl Term {
    /// Indicates whether a value is [`Term::Nil`].
    ///
    /// # Example
    ///
    /// ```
    /// use bert::Term::Nil;
    ///
    /// assert!(Nil.is_nil());
    /// ```
    pub fn is_nil(&self) -> bool {
        match self {
            Term::Nil => true,
            _ => false,
        }
    }

    /// Tries to convert a value to a [`bool`].
    /// This will return an [`Error`] if the value is not a [`Term::Bool`].
    pub fn to_bool(&self) -> Result<bool, Error> {
        match self {
            Term::Bool(b) => Ok(*b),
            _ => bail!("Value is not `Bool`"),
        }
    }

    /// Tries to convert a value to an [`Atom`].
    pub fn to_atom(&self) -> Result<&Atom, Error> {
        match self {
            Term::Atom(a) => Ok(a),
            _ => bail!("Value is not an `Atom`"),
        }
    }

    /// Tries to convert a value to an `i64`. Bignums small enough to fit are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use bert::prelude::*;
    ///
    /// assert_eq!(Term::Int(-3).to_int().unwrap(), -3);
    /// assert_eq!(Term::Bignum(BigInt::from(7)).to_int().unwrap(), 7);
    /// assert!(Term::Nil.to_int().is_err());
    /// ```
    pub fn to_int(&self) -> Result<i64, Error> {
        match self {
            Term::Int(i) => Ok(*i),
            Term::Bignum(n) => match n.to_i64() {
                Some(i) => Ok(i),
                None => bail!("Bignum {} does not fit in `i64`", n),
            },
            _ => bail!("Value is not an integer"),
        }
    }

    /// Converts any integer value to a [`BigInt`].
    pub fn to_bigint(&self) -> Result<BigInt, Error> {
        match self {
            Term::Int(i) => Ok(BigInt::from(*i)),
            Term::Bignum(n) => Ok(n.clone()),
            _ => bail!("Value is not an integer"),
        }
    }

    /// Tries to convert a value to an [`f64`].
    pub fn to_f64(&self) -> Result<f64, Error> {
        match self {
            Term::Float(f) => Ok(f.to_f64()),
            _ => bail!("Value is not a `Float`"),
        }
    }

    /// Tries to convert a value to text.
    pub fn to_text(&self) -> Result<&str, Error> {
        match self {
            Term::Text(s) => Ok(s),
            _ => bail!("Value is not `Text`"),
        }
    }

    /// Tries to convert a value to [`Bytes`].
    pub fn to_binary(&self) -> Result<&Bytes, Error> {
        match self {
            Term::Binary(b) => Ok(b),
            _ => bail!("Value is not a `Binary`"),
        }
    }

    /// Converts a [`Term`] value to a slice of its elements.
    /// This will return an [`Error`] if the value is not a [`Term::List`].
    pub fn to_list(&self) -> Result<&[Term], Error> {
        match self {
            Term::List(l) => Ok(l),
            _ => bail!("This value is not a `List`"),
        }
    }

    /// Consumes a [`Term`] value, converting it into a vector of [`Term`] values.
    pub fn into_list(self) -> Result<Vec<Term>, Error> {
        match self.try_into() {
            Ok(v) => Ok(v),
            Err(_e) => Err(ConversionError::new("This value is not a `List`").into()),
        }
    }

    /// Converts a [`Term`] value to a [`VecMap`].
    pub fn to_map(&self) -> Result<&VecMap<Term, Term>, Error> {
        match self {
            Term::Map(m) => Ok(m),
            _ => bail!("This value is not a `Map`"),
        }
    }

    /// Consumes a [`Term`] value, converting it into a [`VecMap`].
    pub fn into_map(self) -> Result<VecMap<Term, Term>, Error> {
        match self.try_into() {
            Ok(m) => Ok(m),
            Err(_e) => Err(ConversionError::new("This value is not a `Map`").into()),
        }
    }

    /// Converts a [`Term`] value to a [`Tuple`].
    pub fn to_tuple(&self) -> Result<&Tuple, Error> {
        match self {
            Term::Tuple(t) => Ok(t),
            _ => bail!("This value is not a `Tuple`"),
        }
    }

    /// Consumes a [`Term`] value, converting it into a [`Tuple`].
    pub fn into_tuple(self) -> Result<Tuple, Error> {
        match self.try_into() {
            Ok(t) => Ok(t),
            Err(_e) => Err(ConversionError::new("This value is not a `Tuple`").into()),
        }
    }
}

fn fmt_binary(bytes: &Bytes, f: &mut fmt::Formatter) -> fmt::Result {
    let printable = !bytes.is_empty() && bytes.iter().all(|b| (0x20..0x7f).contains(b));
    if printable {
        // printable ASCII is valid UTF-8
        let s = String::from_utf8_lossy(bytes);
        write!(f, "<<{:?}>>", s)
    } else {
        f.write_str("<<")?;
        for (i, b) in bytes.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", b)?;
        }
        f.write_str(">>")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Nil => f.write_str("nil"),
            Term::Undefined => f.write_str("undefined"),
            Term::Bool(b) => write!(f, "{}", b),
            Term::Atom(a) => write!(f, "{}", a),
            Term::Int(i) => write!(f, "{}", i),
            Term::Bignum(n) => write!(f, "{}", n),
            Term::Float(x) => write!(f, "{}", x),
            Term::Text(s) => write!(f, "{:?}", s),
            Term::Binary(b) => fmt_binary(b, f),
            Term::List(l) => {
                f.write_str("[")?;
                for (i, t) in l.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", t)?;
                }
                f.write_str("]")
            }
            Term::Map(m) => {
                f.write_str("#{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{} => {}", k, v)?;
                }
                f.write_str("}")
            }
            Term::Tuple(t) => write!(f, "{}", t),
        }
    }
}

impl From<Vec<Term>> for Term {
    fn from(v: Vec<Term>) -> Term { Term::List(v) }
}

impl From<&str> for Term {
    fn from(s: &str) -> Term { Term::Text(s.to_owned()) }
}

from_fn!(Term, bool, Term::Bool);
try_from_ctor!(Term, bool, Bool);

from_fn!(Term, atom::Atom, Term::Atom);
try_from_ctor!(Term, atom::Atom, Atom);

from_fn!(Term, i64, Term::Int);
try_from_ctor!(Term, i64, Int);
from_prims!(Term);

from_fn!(Term, BigInt, Term::Bignum);
try_from_ctor!(Term, BigInt, Bignum);

from_fn!(Term, float::Float, Term::Float);
try_from_ctor!(Term, float::Float, Float);
from_fn!(Term, f64, |f: f64| Term::Float(float::Float::from(f)));

from_fn!(Term, String, Term::Text);
try_from_ctor!(Term, String, Text);

from_fn!(Term, Bytes, Term::Binary);
try_from_ctor!(Term, Bytes, Binary);

try_from_ctor!(Term, Vec<Term>, List);

from_fn!(Term, VecMap<Term, Term>, Term::Map);
try_from_ctor!(Term, VecMap<Term, Term>, Map);

from_fn!(Term, tuple::Tuple, Term::Tuple);
try_from_ctor!(Term, tuple::Tuple, Tuple);
