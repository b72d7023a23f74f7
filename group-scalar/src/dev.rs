/// Implement all conformance tests for a type which impls the `Scalar` trait.
///
/// The type must accept every value produced by `set_int64` as an operand.
#[macro_export]
macro_rules! test_scalar {
    ($scalar:ty) => {
        $crate::test_scalar_identity!($scalar);
        $crate::test_scalar_arithmetic!($scalar);
        $crate::test_scalar_invert!($scalar);
        $crate::test_scalar_marshalling!($scalar);
    };
}

/// Implement additive and multiplicative identity tests.
#[macro_export]
macro_rules! test_scalar_identity {
    ($scalar:ty) => {
        #[test]
        fn zero_is_additive_identity() {
            use $crate::Scalar as _;

            let mut zero = <$scalar>::default();
            zero.zero();
            let mut a = <$scalar>::default();
            a.set_int64(1234);

            let mut sum = <$scalar>::default();
            sum.add(&a, &zero).unwrap();
            assert!(sum.equal(&a).unwrap());
            sum.add(&zero, &zero).unwrap();
            assert!(sum.equal(&zero).unwrap());
        }

        #[test]
        fn one_is_multiplicative_identity() {
            use $crate::Scalar as _;

            let mut one = <$scalar>::default();
            one.one();
            let mut a = <$scalar>::default();
            a.set_int64(-77);

            let mut product = <$scalar>::default();
            product.mul(&a, &one).unwrap();
            assert!(product.equal(&a).unwrap());
            product.mul(&one, &one).unwrap();
            assert!(product.equal(&one).unwrap());
        }
    };
}

/// Implement small-integer arithmetic tests.
#[macro_export]
macro_rules! test_scalar_arithmetic {
    ($scalar:ty) => {
        #[test]
        fn small_integer_arithmetic() {
            use $crate::Scalar as _;

            let int = |v: i64| {
                let mut s = <$scalar>::default();
                s.set_int64(v);
                s
            };
            let mut r = <$scalar>::default();

            r.add(&int(5), &int(6)).unwrap();
            assert!(r.equal(&int(11)).unwrap());

            r.sub(&int(10), &int(5)).unwrap();
            assert!(r.equal(&int(5)).unwrap());

            r.sub(&int(5), &int(10)).unwrap();
            assert!(r.equal(&int(-5)).unwrap());

            r.mul(&int(10), &int(5)).unwrap();
            assert!(r.equal(&int(50)).unwrap());

            r.neg(&int(9)).unwrap();
            assert!(r.equal(&int(-9)).unwrap());

            r.div(&int(50), &int(10)).unwrap();
            assert!(r.equal(&int(5)).unwrap());

            assert!(!int(5).equal(&int(6)).unwrap());
        }

        #[test]
        fn operators_chain() {
            use $crate::Scalar as _;

            let mut a = <$scalar>::default();
            a.set_int64(3);
            let mut b = <$scalar>::default();
            b.set_int64(4);

            let mut r = <$scalar>::default();
            let r = r.add(&a, &b).unwrap();
            let seven = r.clone();
            r.mul(&seven, &seven).unwrap();

            let mut expected = <$scalar>::default();
            expected.set_int64(49);
            assert!(r.equal(&expected).unwrap());
        }

        #[test]
        fn set_copies_value() {
            use $crate::Scalar as _;

            let mut a = <$scalar>::default();
            a.set_int64(21);
            let mut b = <$scalar>::default();
            b.set(&a);
            a.set_int64(22);

            let mut expected = <$scalar>::default();
            expected.set_int64(21);
            assert!(b.equal(&expected).unwrap());
            assert!(!a.equal(&b).unwrap());
        }
    };
}

/// Implement multiplicative inverse tests.
#[macro_export]
macro_rules! test_scalar_invert {
    ($scalar:ty) => {
        #[test]
        fn invert() {
            use $crate::Scalar as _;

            let mut one = <$scalar>::default();
            one.one();

            for v in [1i64, 2, 3, 100, -1, -42] {
                let mut a = <$scalar>::default();
                a.set_int64(v);
                let mut a_inv = <$scalar>::default();
                a_inv.inv(&a).unwrap();

                let mut product = <$scalar>::default();
                product.mul(&a, &a_inv).unwrap();
                assert!(product.equal(&one).unwrap(), "{v} * {v}^-1 != 1");
            }
        }
    };
}

/// Implement binary marshalling tests.
#[macro_export]
macro_rules! test_scalar_marshalling {
    ($scalar:ty) => {
        #[test]
        fn marshal_binary_roundtrip() {
            use $crate::Scalar as _;

            for v in [0i64, 1, 2, 255, 256, -1, i64::MAX, i64::MIN] {
                let mut s = <$scalar>::default();
                s.set_int64(v);
                let bytes = s.marshal_binary().unwrap();
                assert_eq!(bytes.len(), s.marshal_size());

                let mut decoded = <$scalar>::default();
                decoded.unmarshal_binary(&bytes).unwrap();
                assert!(decoded.equal(&s).unwrap());
            }
        }

        #[test]
        fn unmarshal_binary_rejects_wrong_size() {
            use $crate::Scalar as _;

            let mut s = <$scalar>::default();
            s.set_int64(7);
            let size = s.marshal_size();
            let before = s.marshal_binary().unwrap();

            for len in [0, size - 1, size + 1] {
                let buf = $crate::__private::vec![0u8; len];
                match s.unmarshal_binary(&buf) {
                    Err($crate::Error::SizeMismatch { expected, actual }) => {
                        assert_eq!(expected, size);
                        assert_eq!(actual, len);
                    }
                    other => panic!("unexpected result for {len} bytes: {other:?}"),
                }
                assert_eq!(s.marshal_binary().unwrap(), before);
            }
        }
    };
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::{Error, Result, Scalar};
    use alloc::{vec, vec::Vec};
    use core::fmt;
    use rand_core::{CryptoRng, RngCore};

    /// Integers modulo 251, one byte wide.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub(crate) struct Mod251(pub(crate) u8);

    impl fmt::Display for Mod251 {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:02x}", self.0)
        }
    }

    impl Scalar for Mod251 {
        fn marshal_size(&self) -> usize {
            1
        }

        fn marshal_binary(&self) -> Result<Vec<u8>> {
            Ok(vec![self.0])
        }

        fn unmarshal_binary(&mut self, buf: &[u8]) -> Result<()> {
            match buf {
                [b] if *b < 251 => {
                    self.0 = *b;
                    Ok(())
                }
                [_] => Err(Error::NonCanonical),
                _ => Err(Error::SizeMismatch {
                    expected: 1,
                    actual: buf.len(),
                }),
            }
        }

        fn set(&mut self, a: &Self) -> &mut Self {
            *self = *a;
            self
        }

        fn zero(&mut self) -> &mut Self {
            self.0 = 0;
            self
        }

        fn one(&mut self) -> &mut Self {
            self.0 = 1;
            self
        }

        fn set_int64(&mut self, v: i64) -> &mut Self {
            self.0 = v.rem_euclid(251) as u8;
            self
        }

        fn set_bytes(&mut self, b: &[u8]) -> &mut Self {
            self.0 = b.iter().rev().fold(0u16, |acc, &x| (acc * 256 + x as u16) % 251) as u8;
            self
        }

        fn pick<R: CryptoRng + RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
            self.0 = (rng.next_u32() % 251) as u8;
            self
        }

        fn add(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
            self.0 = ((a.0 as u16 + b.0 as u16) % 251) as u8;
            Ok(self)
        }

        fn sub(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
            self.0 = ((a.0 as u16 + 251 - b.0 as u16) % 251) as u8;
            Ok(self)
        }

        fn neg(&mut self, a: &Self) -> Result<&mut Self> {
            self.0 = ((251 - a.0 as u16) % 251) as u8;
            Ok(self)
        }

        fn mul(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
            self.0 = ((a.0 as u16 * b.0 as u16) % 251) as u8;
            Ok(self)
        }

        fn div(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
            let mut b_inv = Self::default();
            b_inv.inv(b)?;
            self.mul(a, &b_inv)
        }

        fn inv(&mut self, a: &Self) -> Result<&mut Self> {
            // a^(p-2) by repeated multiplication
            let mut acc = 1u16;
            for _ in 0..249 {
                acc = acc * a.0 as u16 % 251;
            }
            self.0 = acc as u8;
            Ok(self)
        }

        fn equal(&self, other: &Self) -> Result<bool> {
            Ok(self.0 == other.0)
        }
    }

    crate::test_scalar!(Mod251);
}
