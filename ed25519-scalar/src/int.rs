//! Reduced-integer view: little-endian integers of any length reduced modulo
//! a fixed modulus of at most 256 bits.
//!
//! None of this is constant-time. It is used to build scalars from integers,
//! byte strings and random streams, and to produce canonical encodings.
//! Arithmetic on scalars goes through [`crate::canonical`] instead.

use alloc::vec::Vec;
use bigint::{Encoding, NonZero, U256, U512};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Width of a reduced value in bytes.
const NARROW_BYTES: usize = 32;

/// Width of the intermediate accumulator in bytes.
const WIDE_BYTES: usize = 64;

/// Zero-extend a 256-bit integer to 512 bits.
pub fn widen(x: &U256) -> U512 {
    let mut wide = [0u8; WIDE_BYTES];
    wide[..NARROW_BYTES].copy_from_slice(&x.to_le_bytes());
    U512::from_le_slice(&wide)
}

/// Number of significant bits in a little-endian byte string.
fn bit_len(le: &[u8]) -> usize {
    le.iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i * 8 + (8 - le[i].leading_zeros() as usize))
}

/// Non-zero modulus of at most 256 bits.
#[derive(Clone, Copy, Debug)]
pub struct Modulus {
    value: NonZero<U512>,
    bits: usize,
}

impl Modulus {
    /// Returns `None` if `value` is zero or wider than 256 bits.
    pub fn new(value: U512) -> Option<Self> {
        let bytes = value.to_le_bytes();
        if bytes[NARROW_BYTES..].iter().any(|&b| b != 0) {
            return None;
        }
        let bits = bit_len(&bytes);
        let value = Option::<NonZero<U512>>::from(NonZero::new(value))?;
        Some(Self { value, bits })
    }

    /// The modulus as an integer.
    pub fn get(&self) -> &U512 {
        &self.value
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Length in bytes of a value reduced by this modulus.
    pub fn byte_len(&self) -> usize {
        self.bits.div_ceil(8)
    }
}

impl PartialEq for Modulus {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for Modulus {}

/// Integer in `[0, m)` bound to its modulus `m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModInt {
    value: U512,
    modulus: Modulus,
}

impl ModInt {
    /// Reduce `value` modulo `modulus`.
    pub fn from_uint(value: U512, modulus: Modulus) -> Self {
        Self {
            value: value.rem(&modulus.value),
            modulus,
        }
    }

    /// Reduce a signed integer modulo `modulus`. Negative values map to
    /// `m - (|v| mod m)`.
    pub fn from_i64(v: i64, modulus: Modulus) -> Self {
        let magnitude = Self::from_uint(U512::from_u64(v.unsigned_abs()), modulus);
        if v < 0 { magnitude.neg() } else { magnitude }
    }

    /// Interpret `bytes` as a little-endian integer of any length and reduce
    /// it modulo `modulus`.
    pub fn from_le_bytes(bytes: &[u8], modulus: Modulus) -> Self {
        // Horner's rule over 32-byte limbs, most significant limb first:
        // acc = (acc * 2^(8 * len) + limb) mod m, with acc < m < 2^256
        let mut acc = U512::ZERO;
        for limb in bytes.rchunks(NARROW_BYTES) {
            let mut wide = [0u8; WIDE_BYTES];
            wide[..limb.len()].copy_from_slice(limb);
            wide[limb.len()..limb.len() + NARROW_BYTES]
                .copy_from_slice(&acc.to_le_bytes()[..NARROW_BYTES]);
            acc = U512::from_le_slice(&wide).rem(&modulus.value);
            wide.zeroize();
        }

        Self {
            value: acc,
            modulus,
        }
    }

    /// Draw a uniformly random value in `[0, m)` by rejection sampling:
    /// sample `bits(m)` random bits and retry while the candidate is `≥ m`.
    ///
    /// Each draw is accepted with probability above one half.
    pub fn random<R: CryptoRng + RngCore + ?Sized>(rng: &mut R, modulus: Modulus) -> Self {
        let byte_len = modulus.byte_len();
        let mask = 0xffu8 >> (byte_len * 8 - modulus.bits());
        let mut buf = [0u8; WIDE_BYTES];

        loop {
            rng.fill_bytes(&mut buf[..byte_len]);
            buf[byte_len - 1] &= mask;
            let candidate = U512::from_le_slice(&buf);

            if candidate < *modulus.get() {
                buf.zeroize();
                return Self {
                    value: candidate,
                    modulus,
                };
            }
        }
    }

    /// `m - self`, or zero if `self` is zero.
    pub fn neg(&self) -> Self {
        Self {
            value: U512::ZERO.sub_mod(&self.value, self.modulus.get()),
            modulus: self.modulus,
        }
    }

    /// The reduced value.
    pub fn value(&self) -> &U512 {
        &self.value
    }

    /// The modulus this value is reduced by.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Little-endian encoding zero-padded to `N` bytes.
    ///
    /// `N` must be at least 32, the widest value any [`Modulus`] admits, so
    /// the encoding is never truncated:
    ///
    /// ```compile_fail
    /// use ed25519_scalar::{ORDER, int::{self, ModInt, Modulus}};
    ///
    /// let m = Modulus::new(int::widen(&ORDER)).unwrap();
    /// let _ = ModInt::from_i64(1, m).to_le_bytes::<16>();
    /// ```
    pub fn to_le_bytes<const N: usize>(&self) -> [u8; N] {
        const { assert!(N >= NARROW_BYTES, "encoding narrower than 32 bytes") };
        let wide = self.value.to_le_bytes();
        let mut out = [0u8; N];
        let len = N.min(WIDE_BYTES);
        out[..len].copy_from_slice(&wide[..len]);
        out
    }

    /// Little-endian encoding of exactly [`Modulus::byte_len`] bytes.
    pub fn marshal_binary(&self) -> Vec<u8> {
        self.value.to_le_bytes()[..self.modulus.byte_len()].to_vec()
    }
}
