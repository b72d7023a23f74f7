//! Scalars modulo ℓ, the order of the edwards25519 prime-order subgroup.

use crate::{
    Error, Result, ScalarParams, canonical,
    int::{ModInt, Modulus},
};
use alloc::vec::Vec;
use bigint::U512;
use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use group_scalar::Scalar as GroupScalar;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Size of a scalar encoding in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Little-endian scalar encoding.
pub type ScalarBytes = [u8; SCALAR_SIZE];

/// Element of the scalar field of the edwards25519 prime-order subgroup.
///
/// The only state is a 32-byte little-endian integer. Scalars built by this
/// crate's constructors are always below ℓ; see
/// [`ScalarParams::prime_order_scalar`] for the one fixed exception.
///
/// # Trait impls
///
/// Most functionality comes from [`group_scalar::Scalar`]:
///
/// - setters (`zero`, `one`, `set_int64`, `set_bytes`, `pick`, `set`) write
///   into `self` and return it;
/// - operators (`add`, `sub`, `neg`, `mul`, `div`, `inv`) run in constant
///   time in the canonical field and fail with [`Error::NonCanonical`] if an
///   operand's stored bytes are not canonical;
/// - `equal` compares in the canonical field, never the raw bytes.
///
/// [`Display`] renders the canonical encoding as 64 lower-case hex digits.
#[derive(Clone, Copy, Default)]
pub struct Scalar {
    bytes: ScalarBytes,
}

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Self {
        bytes: [0; SCALAR_SIZE],
    };

    /// The multiplicative identity.
    pub const ONE: Self = {
        let mut bytes = [0; SCALAR_SIZE];
        bytes[0] = 1;
        Self { bytes }
    };

    fn prime_order() -> Modulus {
        *ScalarParams::get().prime_order()
    }

    pub(crate) fn from_mod_int(int: &ModInt) -> Self {
        Self {
            bytes: int.to_le_bytes(),
        }
    }

    fn to_mod_int(self) -> ModInt {
        ModInt::from_le_bytes(&self.bytes, Self::prime_order())
    }

    /// Reduce a little-endian integer of any length modulo ℓ.
    pub fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::from_mod_int(&ModInt::from_le_bytes(bytes, Self::prime_order()))
    }

    /// Attempt to construct a `Scalar` from a canonical byte representation.
    ///
    /// # Return
    ///
    /// - `Some(s)`, where `s` is the `Scalar` corresponding to `bytes`,
    ///   if `bytes` is a canonical byte representation;
    /// - `None` if `bytes` encodes a value `≥ ℓ`.
    pub fn from_canonical_bytes(bytes: ScalarBytes) -> CtOption<Self> {
        let is_canonical = canonical::decode(&bytes).is_some();
        CtOption::new(Self { bytes }, is_canonical)
    }

    /// Return a `Scalar` chosen uniformly at random from `[0, ℓ)`.
    pub fn random<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::from_mod_int(&ModInt::random(rng, Self::prime_order()))
    }

    /// The stored bytes, verbatim.
    pub fn to_bytes(&self) -> ScalarBytes {
        self.bytes
    }

    /// The stored value reduced modulo ℓ and encoded little-endian.
    pub fn to_canonical_bytes(&self) -> ScalarBytes {
        self.to_mod_int().to_le_bytes()
    }

    /// Do the stored bytes encode a value below ℓ?
    pub fn is_canonical(&self) -> Choice {
        canonical::decode(&self.bytes).is_some()
    }

    fn write_hex(bytes: &ScalarBytes, f: &mut Formatter<'_>, upper: bool) -> fmt::Result {
        for b in bytes {
            if upper {
                write!(f, "{b:02X}")?;
            } else {
                write!(f, "{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl GroupScalar for Scalar {
    fn marshal_size(&self) -> usize {
        SCALAR_SIZE
    }

    fn marshal_binary(&self) -> Result<Vec<u8>> {
        Ok(self.to_mod_int().marshal_binary())
    }

    /// Accepts exactly 32 bytes encoding a value below ℓ.
    fn unmarshal_binary(&mut self, buf: &[u8]) -> Result<()> {
        let bytes = ScalarBytes::try_from(buf).map_err(|_| {
            log::debug!("rejected {}-byte scalar encoding", buf.len());
            Error::SizeMismatch {
                expected: SCALAR_SIZE,
                actual: buf.len(),
            }
        })?;
        canonical::to_field(&bytes)?;
        self.bytes = bytes;
        Ok(())
    }

    fn set(&mut self, a: &Self) -> &mut Self {
        self.bytes = a.bytes;
        self
    }

    fn zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    fn one(&mut self) -> &mut Self {
        *self = Self::ONE;
        self
    }

    fn set_int64(&mut self, v: i64) -> &mut Self {
        *self = Self::from_mod_int(&ModInt::from_i64(v, Self::prime_order()));
        self
    }

    fn set_bytes(&mut self, b: &[u8]) -> &mut Self {
        *self = Self::from_bytes_mod_order(b);
        self
    }

    fn pick<R: CryptoRng + RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        *self = Self::random(rng);
        self
    }

    fn add(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
        self.bytes = canonical::binary_op(&a.bytes, &b.bytes, |a, b| a + b)?;
        Ok(self)
    }

    fn sub(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
        self.bytes = canonical::binary_op(&a.bytes, &b.bytes, |a, b| a - b)?;
        Ok(self)
    }

    fn neg(&mut self, a: &Self) -> Result<&mut Self> {
        self.bytes = canonical::unary_op(&a.bytes, |a| -a)?;
        Ok(self)
    }

    fn mul(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
        self.bytes = canonical::binary_op(&a.bytes, &b.bytes, |a, b| a * b)?;
        Ok(self)
    }

    /// `a * b^-1`. Dividing by zero yields zero.
    fn div(&mut self, a: &Self, b: &Self) -> Result<&mut Self> {
        self.bytes = canonical::binary_op(&a.bytes, &b.bytes, |a, b| a * &b.invert())?;
        Ok(self)
    }

    /// The inverse of zero is zero.
    fn inv(&mut self, a: &Self) -> Result<&mut Self> {
        self.bytes = canonical::unary_op(&a.bytes, |a| a.invert())?;
        Ok(self)
    }

    fn equal(&self, other: &Self) -> Result<bool> {
        canonical::equal(&self.bytes, &other.bytes)
    }
}

/// Non-canonical scalars are unequal to everything, themselves included.
impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        let a = canonical::decode(&self.bytes);
        let b = canonical::decode(&other.bytes);
        let zero = canonical::FieldElement::ZERO;
        a.is_some() & b.is_some() & a.unwrap_or(zero).ct_eq(&b.unwrap_or(zero))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(")?;
        Self::write_hex(&self.bytes, f, false)?;
        f.write_str(")")
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::write_hex(&self.to_canonical_bytes(), f, false)
    }
}

impl LowerHex for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::write_hex(&self.to_canonical_bytes(), f, false)
    }
}

impl UpperHex for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::write_hex(&self.to_canonical_bytes(), f, true)
    }
}

impl DefaultIsZeroes for Scalar {}

impl From<u8> for Scalar {
    fn from(a: u8) -> Self {
        Self::from(u64::from(a))
    }
}

impl From<u16> for Scalar {
    fn from(a: u16) -> Self {
        Self::from(u64::from(a))
    }
}

impl From<u32> for Scalar {
    fn from(a: u32) -> Self {
        Self::from(u64::from(a))
    }
}

impl From<u64> for Scalar {
    fn from(a: u64) -> Self {
        Self::from_mod_int(&ModInt::from_uint(U512::from_u64(a), Self::prime_order()))
    }
}

impl From<Scalar> for ScalarBytes {
    fn from(scalar: Scalar) -> ScalarBytes {
        scalar.to_canonical_bytes()
    }
}

impl From<&Scalar> for ScalarBytes {
    fn from(scalar: &Scalar) -> ScalarBytes {
        scalar.to_canonical_bytes()
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let mut scalar = Self::ZERO;
        scalar.unmarshal_binary(bytes)?;
        Ok(scalar)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, s: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_canonical_bytes(), s)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(d: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut bytes = ScalarBytes::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, d)?;
        Option::from(Self::from_canonical_bytes(bytes))
            .ok_or_else(|| de::Error::custom("scalar was not canonically encoded"))
    }
}
