//! Cholesky decomposition and SPD inversion over [`Matrix`] views.
//!
//! Only the pieces the filter recursion needs: an in-place lower-triangular
//! decomposition and a full inverse reconstructed from the factor. Both are
//! unchecked — a non-positive-definite input propagates NaN through the
//! result rather than reporting an error, which keeps the hot path free of
//! branches and is part of the caller contract.
//!
//! [`Matrix`]: crate::Matrix

pub(crate) mod cholesky;

pub use cholesky::{cholesky_in_place, invert_lower};
