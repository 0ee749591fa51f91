/// Decodes bytes as Latin-1, one character per byte.
///
/// # Example
///
/// ```
/// use bert::util::latin1_to_string;
///
/// assert_eq!(latin1_to_string(b"caf\xe9"), "café");
/// ```
pub fn latin1_to_string(bytes: &[u8]) -> String { bytes.iter().map(|&b| b as char).collect() }

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_as {
    ($to:tt, $from:ty, $as:ty) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $to::from(f as $as) }
        }
    };
}

#[macro_export]
/// Helper macro implementing `TryFrom` for a single-field enum variant, handing the value back
/// on failure.
macro_rules! try_from_ctor {
    ($from:tt, $to:ty, $ctor:ident) => {
        impl std::convert::TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(f: $from) -> Result<$to, $from> {
                match f {
                    $from::$ctor(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

#[macro_export]
/// Implements `From` for the primitive integers narrower than `i64`.
macro_rules! from_prims {
    ($to:tt) => {
        from_as!($to, i32, i64);
        from_as!($to, i16, i64);
        from_as!($to, i8, i64);

        from_as!($to, u32, i64);
        from_as!($to, u16, i64);
        from_as!($to, u8, i64);
    };
}
