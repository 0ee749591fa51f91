use std::fmt;

/// A double-precision float stored as its IEEE-754 bit pattern.
///
/// Storing the bits gives floats total equality, ordering and hashing, so a [`Term`] holding
/// one can still be a map key. Comparisons are over bit patterns, not numeric value: `0.0` and
/// `-0.0` are different floats.
///
/// [`Term`]: crate::Term
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
pub struct Float(u64);

impl Float {
    pub fn from_bits(bits: u64) -> Float { Float(bits) }

    pub fn to_bits(self) -> u64 { self.0 }

    pub fn to_f64(self) -> f64 { f64::from_bits(self.0) }
}

impl From<f64> for Float {
    fn from(f: f64) -> Float { Float(f.to_bits()) }
}

impl From<f32> for Float {
    fn from(f: f32) -> Float { Float::from(f as f64) }
}

impl From<Float> for f64 {
    fn from(f: Float) -> f64 { f.to_f64() }
}

impl PartialEq<f64> for Float {
    fn eq(&self, other: &f64) -> bool { self.to_f64() == *other }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:?}", self.to_f64()) }
}
