#![no_main]
use ciborium::de;
use ed25519_scalar::{Error, Scalar, group_scalar::Scalar as _};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fn apply(f: impl FnOnce(&mut Scalar) -> ed25519_scalar::Result<&mut Scalar>) -> Scalar {
    let mut r = Scalar::default();
    f(&mut r).unwrap();
    r
}

fn test_field(s1: &Scalar, s2: &Scalar, s3: &Scalar) {
    let add = |a: &Scalar, b: &Scalar| apply(|r| r.add(a, b));
    let sub = |a: &Scalar, b: &Scalar| apply(|r| r.sub(a, b));
    let mul = |a: &Scalar, b: &Scalar| apply(|r| r.mul(a, b));
    let div = |a: &Scalar, b: &Scalar| apply(|r| r.div(a, b));

    // Associativity
    assert_eq!(add(s1, &add(s2, s3)), add(&add(s1, s2), s3));
    assert_eq!(mul(s1, &mul(s2, s3)), mul(&mul(s1, s2), s3));

    // Commutativity
    assert_eq!(add(s1, s2), add(s2, s1));
    assert_eq!(mul(s1, s2), mul(s2, s1));

    // Identity
    assert_eq!(add(s1, &Scalar::ZERO), *s1);
    assert_eq!(mul(s1, &Scalar::ONE), *s1);
    assert_eq!(sub(s1, s1), Scalar::ZERO);

    // Distributivity
    assert_eq!(mul(s1, &add(s2, s3)), add(&mul(s1, s2), &mul(s1, s3)));

    // Negation, inverse
    let neg = apply(|r| r.neg(s1));
    assert_eq!(add(s1, &neg), Scalar::ZERO);
    if *s2 != Scalar::ZERO {
        assert_eq!(mul(&div(s1, s2), s2), *s1);
        assert_eq!(mul(s2, &apply(|r| r.inv(s2))), Scalar::ONE);
    }

    // Encoding
    let bytes = s3.marshal_binary().unwrap();
    let mut decoded = Scalar::default();
    decoded.unmarshal_binary(&bytes).unwrap();
    assert_eq!(decoded, *s3);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    // Backup plan for decoding failures
    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    // Strict decoding either agrees with reduction or leaves the receiver untouched
    let mut s1 = Scalar::ONE;
    match s1.unmarshal_binary(&data[32..64]) {
        Ok(()) => {
            let mut reduced = Scalar::default();
            reduced.set_bytes(&data[32..64]);
            assert_eq!(s1, reduced);
            assert_eq!(s1.marshal_binary().unwrap(), &data[32..64]);
        }
        Err(Error::NonCanonical) => {
            assert_eq!(s1, Scalar::ONE);
            s1.pick(&mut rng);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }

    let s2 = de::from_reader(&data[64..]).unwrap_or(Scalar::random(&mut rng));
    assert!(bool::from(s2.is_canonical()));

    let mut s3 = Scalar::default();
    s3.set_bytes(&data[64..64 + usize::from(data[1] & 0x3f)]);

    let mut s4 = Scalar::default();
    s4.set_int64(i64::from_le_bytes(data[96..104].try_into().unwrap()));

    let s5 = Scalar::from_bytes_mod_order(&data[32..]);

    test_field(&s1, &apply(|r| r.add(&s2, &s3)), &apply(|r| r.add(&s4, &s5)));
});
