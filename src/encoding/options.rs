//! Decoder configuration.

use super::constants::DEFAULT_MAX_DEPTH;
use crate::Term;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Atom names that decode to a non-atom [`Term`].
///
/// Only the legacy Latin-1 atom tag with a 16-bit length consults this table; every other atom
/// tag always yields [`Term::Atom`]. Names match case-sensitively.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let aliases = AliasTable::default();
///
/// assert_eq!(aliases.resolve("nil"), Some(Term::Nil));
/// assert_eq!(aliases.resolve("undefined"), None);
///
/// let aliases = AliasTable::with_undefined();
///
/// assert_eq!(aliases.resolve("undefined"), Some(Term::Undefined));
/// ```
pub struct AliasTable {
    nil: bool,
    booleans: bool,
    undefined: bool,
}

impl AliasTable {
    /// `nil`, `true` and `false`, plus `undefined`.
    pub fn with_undefined() -> Self {
        AliasTable {
            undefined: true,
            ..AliasTable::default()
        }
    }

    /// No aliases; every atom stays an atom.
    pub fn none() -> Self {
        AliasTable {
            nil: false,
            booleans: false,
            undefined: false,
        }
    }

    /// The term `name` stands for, if it is an alias.
    pub fn resolve(&self, name: &str) -> Option<Term> {
        match name {
            "nil" if self.nil => Some(Term::Nil),
            "true" if self.booleans => Some(Term::Bool(true)),
            "false" if self.booleans => Some(Term::Bool(false)),
            "undefined" if self.undefined => Some(Term::Undefined),
            _ => None,
        }
    }
}

impl Default for AliasTable {
    /// `nil`, `true` and `false`.
    fn default() -> Self {
        AliasTable {
            nil: true,
            booleans: true,
            undefined: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Settings for a decode call.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let opts = DecodeOptions::default()
///     .max_depth(16)
///     .aliases(AliasTable::with_undefined())
///     .deny_trailing_bytes(true);
///
/// let term = decode_with(&[131u8, 100, 0, 9, 117, 110, 100, 101, 102, 105, 110, 101, 100][..], &opts);
///
/// assert_eq!(term.unwrap(), Term::Undefined);
/// ```
pub struct DecodeOptions {
    pub(crate) max_depth: usize,
    pub(crate) aliases: AliasTable,
    pub(crate) deny_trailing_bytes: bool,
}

impl DecodeOptions {
    /// Sets how deeply lists, maps and tuples may nest. A top-level scalar has depth 0.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the atom alias table.
    pub fn aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// When set, bytes left over after the top-level term are an error.
    pub fn deny_trailing_bytes(mut self, deny: bool) -> Self {
        self.deny_trailing_bytes = deny;
        self
    }

    /// The configured nesting limit.
    pub fn depth_limit(&self) -> usize { self.max_depth }

    /// The configured alias table.
    pub fn alias_table(&self) -> &AliasTable { &self.aliases }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            aliases: AliasTable::default(),
            deny_trailing_bytes: false,
        }
    }
}
