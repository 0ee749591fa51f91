//! Fixed-arity sequences.

use crate::Term;
use std::{fmt, iter::FromIterator, ops::Index, slice::Iter};

/// An ordered sequence of terms whose arity is fixed when it is built.
///
/// Elements live in a boxed slice and the type offers no method that changes the length, so a
/// tuple decoded with arity `n` keeps arity `n` for its whole life.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let pair = Tuple::from(vec![Term::from(Atom::from("ok")), Term::from(1)]);
///
/// assert_eq!(pair.arity(), 2);
/// assert_eq!(pair[1], Term::Int(1));
/// ```
///
/// There is nothing to push onto, remove from, or truncate:
///
/// ```compile_fail
/// use bert::prelude::*;
///
/// let mut empty = Tuple::from(vec![]);
/// empty.push(Term::Nil);
/// ```
///
/// ```compile_fail
/// use bert::prelude::*;
///
/// let mut pair = Tuple::from(vec![Term::Nil, Term::Nil]);
/// pair.truncate(1);
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
pub struct Tuple(Box<[Term]>);

impl Tuple {
    /// Number of elements.
    pub fn arity(&self) -> usize { self.0.len() }

    /// Indicates whether this is the empty tuple `{}`.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Term> { self.0.get(index) }

    /// Returns an [`Iter`] over the elements.
    pub fn iter(&self) -> Iter<'_, Term> { self.0.iter() }

    pub fn as_slice(&self) -> &[Term] { &self.0 }

    /// Consumes the tuple, producing its elements as a vector.
    pub fn into_vec(self) -> Vec<Term> { self.0.into_vec() }
}

impl From<Vec<Term>> for Tuple {
    fn from(v: Vec<Term>) -> Tuple { Tuple(v.into_boxed_slice()) }
}

impl FromIterator<Term> for Tuple {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Tuple {
        Tuple::from(Vec::from_iter(iter))
    }
}

impl Index<usize> for Tuple {
    type Output = Term;

    fn index(&self, index: usize) -> &Term { &self.0[index] }
}

impl AsRef<[Term]> for Tuple {
    fn as_ref(&self) -> &[Term] { &self.0 }
}

impl<'a> IntoIterator for &'a Tuple {
    type IntoIter = Iter<'a, Term>;
    type Item = &'a Term;

    fn into_iter(self) -> Iter<'a, Term> { self.0.iter() }
}

impl IntoIterator for Tuple {
    type IntoIter = std::vec::IntoIter<Term>;
    type Item = Term;

    fn into_iter(self) -> Self::IntoIter { self.into_vec().into_iter() }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, t) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", t)?;
        }
        f.write_str("}")
    }
}
