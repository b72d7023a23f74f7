//! edwards25519 group order parameters.

use crate::{
    Scalar,
    int::{self, ModInt, Modulus},
};
use bigint::{U256, U512};
use once_cell::sync::Lazy;

/// Order ℓ of the prime-order subgroup:
/// 2^252 + 27742317777372353535851937790883648493
pub const ORDER: U256 =
    U256::from_be_hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");

/// Cofactor of the full curve group.
pub const COFACTOR: u64 = 8;

/// Order of the full curve group, `ℓ * 8`.
pub const FULL_ORDER: U256 =
    U256::from_be_hex("80000000000000000000000000000000a6f7cef517bce6b2c09318d2e7ae9f68");

static PARAMS: Lazy<ScalarParams> = Lazy::new(ScalarParams::new);

/// Moduli and fixed scalars derived from the group order.
///
/// Built once on first use and immutable afterwards.
#[derive(Clone, Copy, Debug)]
pub struct ScalarParams {
    prime_order: Modulus,
    full_order: Modulus,
    cofactor: u64,
    prime_order_scalar: Scalar,
    cofactor_scalar: Scalar,
}

impl ScalarParams {
    /// Shared instance.
    pub fn get() -> &'static Self {
        &PARAMS
    }

    fn new() -> Self {
        let order = int::widen(&ORDER);
        let prime_order = Modulus::new(order).expect("ℓ is a non-zero 253-bit integer");
        let full_order = Modulus::new(order.wrapping_mul(&U512::from_u64(COFACTOR)))
            .expect("ℓ * 8 is a non-zero 256-bit integer");

        Self {
            prime_order,
            full_order,
            cofactor: COFACTOR,
            prime_order_scalar: Scalar::from_mod_int(&ModInt::from_uint(order, full_order)),
            cofactor_scalar: Scalar::from_mod_int(&ModInt::from_uint(
                U512::from_u64(COFACTOR),
                full_order,
            )),
        }
    }

    /// ℓ, the modulus of every scalar encoding.
    pub fn prime_order(&self) -> &Modulus {
        &self.prime_order
    }

    /// `ℓ * cofactor`. Only used to build the fixed scalars below.
    pub fn full_order(&self) -> &Modulus {
        &self.full_order
    }

    /// Cofactor of the full curve group.
    pub fn cofactor(&self) -> u64 {
        self.cofactor
    }

    /// ℓ reduced modulo the full group order.
    ///
    /// The stored bytes are ℓ itself, which is not a canonical encoding:
    /// arithmetic and equality on this scalar fail, while its binary
    /// encoding is zero.
    ///
    /// `==` is `false` even between two copies of this scalar, so
    /// `assert_eq!` cannot be used on it. Compare with
    /// [`group_scalar::Scalar::equal`], which reports
    /// [`Error::NonCanonical`](crate::Error::NonCanonical), or compare
    /// [`Scalar::to_bytes`].
    pub fn prime_order_scalar(&self) -> Scalar {
        self.prime_order_scalar
    }

    /// The cofactor reduced modulo the full group order.
    pub fn cofactor_scalar(&self) -> Scalar {
        self.cofactor_scalar
    }
}
