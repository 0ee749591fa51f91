use std::{borrow::Borrow, fmt, ops::Deref};

/// A symbolic name.
///
/// Atoms carry text but are a distinct kind of value: an `Atom` never compares equal to a
/// [`Term::Text`](crate::Term::Text) with the same characters.
///
/// # Example
///
/// ```
/// use bert::prelude::*;
///
/// let ok = Atom::from("ok");
///
/// assert_eq!(ok.as_str(), "ok");
/// assert_ne!(Term::from(ok), Term::Text("ok".to_string()));
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
pub struct Atom(String);

impl Atom {
    pub fn new<S: Into<String>>(name: S) -> Atom { Atom(name.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_string(self) -> String { self.0 }
}

impl Deref for Atom {
    type Target = str;

    fn deref(&self) -> &str { &self.0 }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str { &self.0 }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str { &self.0 }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Atom { Atom(s.to_owned()) }
}

impl From<String> for Atom {
    fn from(s: String) -> Atom { Atom(s) }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

impl fmt::Display for Atom {
    /// Bare when the name is a plain lowercase identifier, single-quoted otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut chars = self.0.chars();
        let bare = match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
            }
            _ => false,
        };
        if bare {
            f.write_str(&self.0)
        } else {
            write!(f, "'{}'", self.0.replace('\\', "\\\\").replace('\'', "\\'"))
        }
    }
}
