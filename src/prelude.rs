pub use crate::{
    atom::Atom,
    encoding::{
        decode, decode_prefix, decode_prefix_with, decode_with, AliasTable, ByteCursor,
        DecodeOptions, Decoder, Tag,
    },
    errors::{ConversionError, DecodeError},
    float::Float,
    tuple::Tuple,
    vecmap::VecMap,
    Term,
};
pub use bytes::Bytes;
pub use num_bigint::BigInt;
pub use std::convert::TryFrom;
