use bert::prelude::*;

fn atom(name: &str) -> Term { Term::Atom(Atom::from(name)) }

#[test]
fn integers() {
    assert_eq!(decode(&[131u8, 97, 0][..]).unwrap(), Term::Int(0));
    assert_eq!(decode(&[131u8, 97, 255][..]).unwrap(), Term::Int(255));
    assert_eq!(decode(&[131u8, 98, 0, 0, 1, 0][..]).unwrap(), Term::Int(256));
    assert_eq!(
        decode(&[131u8, 98, 127, 255, 255, 255][..]).unwrap(),
        Term::Int(2_147_483_647)
    );
    assert_eq!(
        decode(&[131u8, 98, 128, 0, 0, 0][..]).unwrap(),
        Term::Int(-2_147_483_648)
    );
    assert_eq!(decode(&[131u8, 98, 255, 255, 255, 255][..]).unwrap(), Term::Int(-1));
}

#[test]
fn bignums() {
    let bs = [
        131u8, 110, 20, 0, 199, 113, 28, 199, 113, 156, 185, 123, 128, 138, 160, 75, 22, 67, 46,
        219, 76, 61, 242, 1,
    ];
    let expected: BigInt = "1".repeat(47).parse().unwrap();
    assert_eq!(decode(&bs[..]).unwrap(), Term::Bignum(expected));

    // same magnitude through the wide tag, negated
    let mut wide = vec![131u8, 111, 0, 0, 0, 20, 1];
    wide.extend_from_slice(&bs[4..]);
    let expected: BigInt = format!("-{}", "1".repeat(47)).parse().unwrap();
    assert_eq!(decode(wide).unwrap(), Term::Bignum(expected));

    // small values stay bignums
    let t = decode(&[131u8, 110, 1, 0, 5][..]).unwrap();
    assert_eq!(t, Term::Bignum(BigInt::from(5)));
    assert_eq!(t.to_int().unwrap(), 5);

    // no digits at all is zero
    assert_eq!(
        decode(&[131u8, 110, 0, 0][..]).unwrap(),
        Term::Bignum(BigInt::from(0))
    );
}

#[test]
fn floats() {
    let t = decode(&[131u8, 70, 63, 240, 45, 14, 86, 4, 24, 147][..]).unwrap();
    assert_eq!(t.to_f64().unwrap(), 1.011);

    let mut bs = vec![131u8, 99];
    bs.extend_from_slice(b"1.01100000000000000000e+00");
    bs.resize(2 + 31, 0);
    assert_eq!(decode(bs).unwrap().to_f64().unwrap(), 1.011);

    let mut bs = vec![131u8, 99];
    bs.extend_from_slice(b"-2.50000000000000000000e+01");
    bs.resize(2 + 31, 0);
    assert_eq!(decode(bs).unwrap().to_f64().unwrap(), -25.0);
}

#[test]
fn negative_zero_is_its_own_float() {
    let pos = decode(&[131u8, 70, 0, 0, 0, 0, 0, 0, 0, 0][..]).unwrap();
    let neg = decode(&[131u8, 70, 128, 0, 0, 0, 0, 0, 0, 0][..]).unwrap();
    assert_ne!(pos, neg);
    assert_eq!(pos.to_f64().unwrap(), neg.to_f64().unwrap());
}

#[test]
fn aliased_atoms() {
    assert_eq!(decode(&[131u8, 100, 0, 3, 110, 105, 108][..]).unwrap(), Term::Nil);
    assert_eq!(
        decode(&[131u8, 100, 0, 4, 116, 114, 117, 101][..]).unwrap(),
        Term::Bool(true)
    );
    assert_eq!(
        decode(&[131u8, 100, 0, 5, 102, 97, 108, 115, 101][..]).unwrap(),
        Term::Bool(false)
    );
}

#[test]
fn undefined_is_opt_in() {
    let bs = &[131u8, 100, 0, 9, 117, 110, 100, 101, 102, 105, 110, 101, 100][..];

    assert_eq!(decode(bs).unwrap(), atom("undefined"));

    let opts = DecodeOptions::default().aliases(AliasTable::with_undefined());
    assert_eq!(decode_with(bs, &opts).unwrap(), Term::Undefined);
}

#[test]
fn aliasing_can_be_switched_off() {
    let opts = DecodeOptions::default().aliases(AliasTable::none());
    assert_eq!(
        decode_with(&[131u8, 100, 0, 4, 116, 114, 117, 101][..], &opts).unwrap(),
        atom("true")
    );
}

#[test]
fn only_the_long_latin1_tag_is_aliased() {
    // small atom, UTF-8 atom and small UTF-8 atom spelling `true`
    for bs in &[
        vec![131u8, 115, 4, 116, 114, 117, 101],
        vec![131u8, 118, 0, 4, 116, 114, 117, 101],
        vec![131u8, 119, 4, 116, 114, 117, 101],
    ] {
        assert_eq!(decode(bs.clone()).unwrap(), atom("true"));
    }
}

#[test]
fn atoms() {
    assert_eq!(decode(&[131u8, 100, 0, 2, 111, 107][..]).unwrap(), atom("ok"));
    assert_eq!(decode(&[131u8, 100, 0, 0][..]).unwrap(), atom(""));

    // Latin-1: 0xe9 is é
    assert_eq!(
        decode(&[131u8, 115, 4, 99, 97, 102, 0xe9][..]).unwrap(),
        atom("café")
    );

    assert_eq!(
        decode(&[131u8, 119, 4, 240, 157, 149, 150][..]).unwrap(),
        atom("𝕖")
    );
    assert_eq!(
        decode(&[131u8, 118, 0, 4, 240, 157, 149, 150][..]).unwrap(),
        atom("𝕖")
    );
}

#[test]
fn text_and_binaries() {
    let t = decode(&[131u8, 107, 0, 4, 116, 101, 115, 116][..]).unwrap();
    assert_eq!(t, Term::Text("test".to_owned()));
    assert_eq!(t.to_text().unwrap(), "test");
    assert_ne!(t, Term::Atom(Atom::from("test")));

    assert_eq!(
        decode(&[131u8, 107, 0, 0][..]).unwrap(),
        Term::Text(String::new())
    );

    assert_eq!(
        decode(&[131u8, 109, 0, 0, 0, 4, 116, 101, 115, 116][..]).unwrap(),
        Term::Binary(Bytes::from_static(b"test"))
    );
    assert_eq!(
        decode(&[131u8, 109, 0, 0, 0, 0][..]).unwrap(),
        Term::Binary(Bytes::new())
    );

    // binaries are not required to be text
    let t = decode(&[131u8, 109, 0, 0, 0, 2, 0xff, 0xfe][..]).unwrap();
    assert_eq!(&t.to_binary().unwrap()[..], &[0xffu8, 0xfe][..]);
    assert_eq!(t.to_string(), "<<255,254>>");
}
