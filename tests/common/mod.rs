#![allow(dead_code)]

use bert::prelude::*;
use num_bigint::Sign;
use proptest::prelude::*;

/// arbitrary bignum wider than 64 bits, for use with proptest
pub fn arb_bigint() -> impl Strategy<Value = BigInt> {
    (any::<i64>(), any::<u64>()).prop_map(|(hi, lo)| (BigInt::from(hi) << 64) + BigInt::from(lo))
}

/// arbitrary Bytes for use with proptest
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..32).prop_map(Bytes::from)
}

/// arbitrary Term for use with proptest
///
/// Only produces terms that decode back to themselves under the default aliases, so no
/// [`Term::Undefined`].
pub fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::Nil),
        any::<bool>().prop_map(Term::Bool),
        "[a-z_][a-zA-Z0-9_@]{0,10}".prop_map(|s| Term::Atom(Atom::from(s))),
        "\\PC{0,8}".prop_map(|s| Term::Atom(Atom::from(s))),
        // integers
        any::<u8>().prop_map(Term::from),
        any::<i32>().prop_map(Term::from),
        any::<i64>().prop_map(|n| Term::Bignum(BigInt::from(n))),
        arb_bigint().prop_map(Term::Bignum),
        // floats
        any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(Term::from),
        // text and bytes
        "\\PC{0,16}".prop_map(Term::Text),
        arb_bs().prop_map(Term::Binary),
    ];
    leaf.prop_recursive(
        8,  // max depth
        64, // max nodes
        8,  // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Term::List),
                prop::collection::vec(inner.clone(), 0..8)
                    .prop_map(|v| Term::Tuple(Tuple::from(v))),
                prop::collection::btree_map(inner.clone(), inner, 0..6)
                    .prop_map(|m| Term::Map(m.into_iter().collect()))
            ]
        },
    )
}

/// Writes the envelope and `t` in the wire format.
pub fn encode_full(t: &Term) -> Vec<u8> {
    let mut out = vec![131];
    encode(t, &mut out);
    out
}

fn put_u16(out: &mut Vec<u8>, n: usize) { out.extend_from_slice(&(n as u16).to_be_bytes()) }

fn put_u32(out: &mut Vec<u8>, n: usize) { out.extend_from_slice(&(n as u32).to_be_bytes()) }

fn latin1_atom(out: &mut Vec<u8>, name: &str) {
    out.push(100);
    put_u16(out, name.len());
    out.extend_from_slice(name.as_bytes());
}

/// Writes `t` without the envelope.
pub fn encode(t: &Term, out: &mut Vec<u8>) {
    match t {
        Term::Nil => latin1_atom(out, "nil"),
        Term::Undefined => latin1_atom(out, "undefined"),
        Term::Bool(b) => latin1_atom(out, if *b { "true" } else { "false" }),
        Term::Atom(a) => {
            out.push(118);
            put_u16(out, a.len());
            out.extend_from_slice(a.as_bytes());
        }
        Term::Int(n) => {
            if 0 <= *n && *n <= 255 {
                out.extend_from_slice(&[97, *n as u8]);
            } else {
                out.push(98);
                out.extend_from_slice(&(*n as i32).to_be_bytes());
            }
        }
        Term::Bignum(n) => {
            let (sign, digits) = n.to_bytes_le();
            if digits.len() < 256 {
                out.extend_from_slice(&[110, digits.len() as u8]);
            } else {
                out.push(111);
                put_u32(out, digits.len());
            }
            out.push(if sign == Sign::Minus { 1 } else { 0 });
            out.extend_from_slice(&digits);
        }
        Term::Float(f) => {
            out.push(70);
            out.extend_from_slice(&f.to_bits().to_be_bytes());
        }
        Term::Text(s) => {
            out.push(107);
            put_u16(out, s.len());
            out.extend_from_slice(s.as_bytes());
        }
        Term::Binary(bs) => {
            out.push(109);
            put_u32(out, bs.len());
            out.extend_from_slice(bs);
        }
        Term::List(v) if v.is_empty() => out.push(106),
        Term::List(v) => {
            out.push(108);
            put_u32(out, v.len());
            v.iter().for_each(|t| encode(t, out));
            out.push(106);
        }
        Term::Map(m) => {
            out.push(116);
            put_u32(out, m.len());
            for (k, v) in m {
                encode(k, out);
                encode(v, out);
            }
        }
        Term::Tuple(t) => {
            if t.arity() < 256 {
                out.extend_from_slice(&[104, t.arity() as u8]);
            } else {
                out.push(105);
                put_u32(out, t.arity());
            }
            t.iter().for_each(|e| encode(e, out));
        }
    }
}

/// `n` single-element lists nested inside each other around a small integer.
pub fn nested_lists(n: usize) -> Vec<u8> {
    let mut out = vec![131];
    for _ in 0..n {
        out.extend_from_slice(&[108, 0, 0, 0, 1]);
    }
    out.extend_from_slice(&[97, 0]);
    out.resize(out.len() + n, 106);
    out
}
