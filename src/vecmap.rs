//! A wrapper around a sorted vector of pairs that backs [maps][`crate::Term::Map`].
//!
//! Keys may be any [`Term`](crate::Term), composite ones included. Lookups compare keys by
//! structure, so a key built independently of the decoded map still finds its entry.
//!
//! # Example
//!
//! ```
//! use bert::prelude::*;
//!
//! // #{[] => 1, a => 2}
//! let m = decode(&[131u8, 116, 0, 0, 0, 2, 106, 97, 1, 100, 0, 1, 97, 97, 2][..])
//!     .unwrap()
//!     .into_map()
//!     .unwrap();
//!
//! assert_eq!(m.get(&Term::List(vec![])), Some(&Term::Int(1)));
//! assert_eq!(m.get(&Term::from(Atom::from("a"))), Some(&Term::Int(2)));
//! ```

use std::{
    collections::HashMap,
    hash::*,
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// A map implemented as a sorted [`Vec`] of pairs.
///
/// See also: [module level documentation](`crate::vecmap`).
pub struct VecMap<K: Ord, V>(Vec<(K, V)>);

impl<K: Ord, V> VecMap<K, V> {
    /// Sorts `v` by key, handing it back if two keys are equal.
    ///
    /// # Example
    ///
    /// ```
    /// use bert::prelude::*;
    ///
    /// assert!(VecMap::try_from_pairs(vec![(2, "b"), (1, "a")]).is_ok());
    /// assert!(VecMap::try_from_pairs(vec![(1, "a"), (1, "b")]).is_err());
    /// ```
    pub fn try_from_pairs(mut v: Vec<(K, V)>) -> Result<Self, Vec<(K, V)>> {
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        if v.windows(2).any(|w| w[0].0 == w[1].0) {
            Err(v)
        } else {
            Ok(VecMap(v))
        }
    }

    /// Returns length.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`VecMap`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Looks up the value stored under a key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|i| &self.0[i].1)
    }

    /// Indicates whether a key equal to `key` is present.
    pub fn contains_key(&self, key: &K) -> bool { self.get(key).is_some() }

    /// Returns an [`Iter`] of the key value pairs, in key order.
    pub fn iter(&self) -> Iter<'_, (K, V)> { self.0.iter() }

    /// Returns the keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> { self.0.iter().map(|(k, _)| k) }
}

impl<K: Ord, V> Default for VecMap<K, V> {
    fn default() -> Self { VecMap(Vec::new()) }
}

impl<K: Ord + Hash, V> VecMap<K, V> {
    /// Consumes a [`VecMap`], producing a [`HashMap`] from the entries.
    pub fn into_hashmap<S: BuildHasher + Default>(self) -> HashMap<K, V, S> {
        self.into_iter().collect()
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    /// Sorts by key. Of several equal keys, all are kept.
    fn from(mut v: Vec<(K, V)>) -> Self {
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        VecMap(v)
    }
}

impl<K: Ord, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<'a, K: Ord, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> { self.0.iter() }
}

impl<K: Ord, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap::from(Vec::from_iter(iter))
    }
}
