/// Version marker that opens every encoded term, 0x83
pub const VERSION: u8 = 131;

/// IEEE-754 double, big-endian, 0x46
pub(crate) const NEW_FLOAT_EXT: u8 = 70;
/// Unsigned 8-bit integer, 0x61
pub(crate) const SMALL_INTEGER_EXT: u8 = 97;
/// Signed 32-bit integer, 0x62
pub(crate) const INTEGER_EXT: u8 = 98;
/// Float as 31 bytes of ASCII, 0x63
pub(crate) const FLOAT_EXT: u8 = 99;
/// Latin-1 atom with a 16-bit length, 0x64
pub(crate) const ATOM_EXT: u8 = 100;
/// Tuple with an 8-bit arity, 0x68
pub(crate) const SMALL_TUPLE_EXT: u8 = 104;
/// Tuple with a 32-bit arity, 0x69
pub(crate) const LARGE_TUPLE_EXT: u8 = 105;
/// The empty list, also the proper-list terminator, 0x6a
pub(crate) const NIL_EXT: u8 = 106;
/// Byte string with a 16-bit length, 0x6b
pub(crate) const STRING_EXT: u8 = 107;
/// List with a 32-bit element count, 0x6c
pub(crate) const LIST_EXT: u8 = 108;
/// Binary with a 32-bit length, 0x6d
pub(crate) const BINARY_EXT: u8 = 109;
/// Bignum with an 8-bit digit count, 0x6e
pub(crate) const SMALL_BIG_EXT: u8 = 110;
/// Bignum with a 32-bit digit count, 0x6f
pub(crate) const LARGE_BIG_EXT: u8 = 111;
/// Latin-1 atom with an 8-bit length, 0x73
pub(crate) const SMALL_ATOM_EXT: u8 = 115;
/// Map with a 32-bit pair count, 0x74
pub(crate) const MAP_EXT: u8 = 116;
/// UTF-8 atom with a 16-bit length, 0x76
pub(crate) const ATOM_UTF8_EXT: u8 = 118;
/// UTF-8 atom with an 8-bit length, 0x77
pub(crate) const SMALL_ATOM_UTF8_EXT: u8 = 119;

/// Width of the ASCII payload of [`FLOAT_EXT`].
pub(crate) const FLOAT_STRING_LEN: usize = 31;

/// Default nesting limit for composite terms, safe on a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;
