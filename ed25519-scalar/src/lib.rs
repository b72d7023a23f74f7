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
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(not(any(feature = "std", feature = "critical-section")))]
compile_error!("either the `std` or the `critical-section` feature must be enabled");

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod canonical;
pub mod int;
mod params;
mod scalar;

pub use bigint;
pub use curve25519_dalek;
pub use group_scalar::{self, Error, Result};
pub use rand_core;
pub use subtle;

pub use crate::{
    params::{COFACTOR, FULL_ORDER, ORDER, ScalarParams},
    scalar::{SCALAR_SIZE, Scalar, ScalarBytes},
};
