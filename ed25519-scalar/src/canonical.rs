//! Canonical-field view: conversion between stored scalar bytes and the
//! constant-time scalar field of `curve25519-dalek`.
//!
//! Only canonical encodings, little-endian values below ℓ, are accepted.
//! Every arithmetic operation and every equality test on
//! [`Scalar`](crate::Scalar) goes through this module.

use crate::{Error, Result, ScalarBytes};
use subtle::{ConstantTimeEq, CtOption};

/// Element of the scalar field as represented by the field engine.
pub type FieldElement = curve25519_dalek::Scalar;

/// Decode a canonical encoding without logging or allocating an error.
pub fn decode(bytes: &ScalarBytes) -> CtOption<FieldElement> {
    FieldElement::from_canonical_bytes(*bytes)
}

/// Decode a canonical encoding, failing with [`Error::NonCanonical`] if
/// `bytes` encodes a value `≥ ℓ`.
pub fn to_field(bytes: &ScalarBytes) -> Result<FieldElement> {
    Option::<FieldElement>::from(decode(bytes)).ok_or_else(|| {
        log::debug!("rejected non-canonical scalar encoding");
        Error::NonCanonical
    })
}

/// Canonical encoding of a field element.
pub fn from_field(fe: &FieldElement) -> ScalarBytes {
    fe.to_bytes()
}

/// Apply `op` to one encoded operand and encode the result.
pub fn unary_op<F>(a: &ScalarBytes, op: F) -> Result<ScalarBytes>
where
    F: FnOnce(&FieldElement) -> FieldElement,
{
    let a = to_field(a)?;
    Ok(from_field(&op(&a)))
}

/// Apply `op` to two encoded operands and encode the result.
///
/// Both operands are decoded before `op` runs, so nothing is computed when
/// either one is rejected.
pub fn binary_op<F>(a: &ScalarBytes, b: &ScalarBytes, op: F) -> Result<ScalarBytes>
where
    F: FnOnce(&FieldElement, &FieldElement) -> FieldElement,
{
    let a = to_field(a)?;
    let b = to_field(b)?;
    Ok(from_field(&op(&a, &b)))
}

/// Constant-time field equality of two encodings.
pub fn equal(a: &ScalarBytes, b: &ScalarBytes) -> Result<bool> {
    let a = to_field(a)?;
    let b = to_field(b)?;
    Ok(a.ct_eq(&b).into())
}
