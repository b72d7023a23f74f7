#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dev;
mod error;
#[cfg(feature = "std")]
pub mod marshalling;

pub use crate::error::{Error, Result};
pub use rand_core;

/// Items used by the exported test macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::vec;
}

use alloc::vec::Vec;
use core::fmt::{Debug, Display};
use rand_core::{CryptoRng, RngCore};

/// Scalar capability consumed by a group library.
///
/// Setters and operators write into `self` and hand it back so calls can be
/// chained. Operators read both operands before writing, so a result can be
/// stored over a clone of one of its inputs.
///
/// String rendering is provided by [`Display`]; cloning by [`Clone`].
pub trait Scalar: Clone + Debug + Default + Display + Sized {
    /// Length in bytes of the binary encoding.
    fn marshal_size(&self) -> usize;

    /// Encode this scalar.
    fn marshal_binary(&self) -> Result<Vec<u8>>;

    /// Decode a scalar from exactly [`Scalar::marshal_size`] bytes.
    ///
    /// On error `self` is left untouched.
    fn unmarshal_binary(&mut self, buf: &[u8]) -> Result<()>;

    /// Write the binary encoding to `w`, returning the number of bytes written.
    #[cfg(feature = "std")]
    fn marshal_to<W: std::io::Write + ?Sized>(&self, w: &mut W) -> Result<usize> {
        marshalling::scalar_marshal_to(self, w)
    }

    /// Read exactly [`Scalar::marshal_size`] bytes from `r` and decode them.
    #[cfg(feature = "std")]
    fn unmarshal_from<R: std::io::Read + ?Sized>(&mut self, r: &mut R) -> Result<usize> {
        marshalling::scalar_unmarshal_from(self, r)
    }

    /// Copy the value of `a` into `self`.
    fn set(&mut self, a: &Self) -> &mut Self;

    /// Set to the additive identity.
    fn zero(&mut self) -> &mut Self;

    /// Set to the multiplicative identity.
    fn one(&mut self) -> &mut Self;

    /// Set to `v` reduced into the scalar field.
    fn set_int64(&mut self, v: i64) -> &mut Self;

    /// Set to `b`, read as a little-endian integer of any length and reduced
    /// into the scalar field.
    fn set_bytes(&mut self, b: &[u8]) -> &mut Self;

    /// Set to a uniformly random element drawn from `rng`.
    fn pick<R: CryptoRng + RngCore + ?Sized>(&mut self, rng: &mut R) -> &mut Self;

    /// Set to `a + b`.
    fn add(&mut self, a: &Self, b: &Self) -> Result<&mut Self>;

    /// Set to `a - b`.
    fn sub(&mut self, a: &Self, b: &Self) -> Result<&mut Self>;

    /// Set to `-a`.
    fn neg(&mut self, a: &Self) -> Result<&mut Self>;

    /// Set to `a * b`.
    fn mul(&mut self, a: &Self, b: &Self) -> Result<&mut Self>;

    /// Set to `a / b`.
    fn div(&mut self, a: &Self, b: &Self) -> Result<&mut Self>;

    /// Set to `a^-1`.
    fn inv(&mut self, a: &Self) -> Result<&mut Self>;

    /// Field equality. Must not be a raw comparison of stored bytes.
    fn equal(&self, other: &Self) -> Result<bool>;
}
