//! # kfcore
//!
//! Allocation-free linear Kalman filtering over caller-owned buffers,
//! no-std compatible. Built for resource-constrained control loops: the
//! caller provides every buffer once at configuration time, and the
//! predict/correct recursion then runs with zero dynamic allocation and
//! no hidden temporaries.
//!
//! ## Quick start
//!
//! ```
//! use kfcore::Kalman;
//!
//! // 1-D constant-value filter, no input model.
//! let mut a = [1.0];
//! let mut x = [0.0];
//! let mut b: [f64; 0] = [];
//! let mut u: [f64; 0] = [];
//! let mut p = [1.0];
//! let mut q: [f64; 0] = [];
//! let mut aux = [0.0];
//! let mut predicted_x = [0.0];
//! let mut temp_p = [0.0];
//! let mut temp_bq: [f64; 0] = [];
//!
//! let mut kf = Kalman::new(
//!     1, 0,
//!     &mut a, &mut x, &mut b, &mut u, &mut p, &mut q,
//!     &mut aux, &mut predicted_x, &mut temp_p, &mut temp_bq,
//! );
//! kf.predict(1.0); // fading factor λ = 1: no covariance inflation
//! ```
//!
//! ## Modules
//!
//! - [`filter`] — The core recursion. [`Kalman`] binds the process model
//!   (`A`, `B`, `Q`), the estimate (`x`, `P`), and predict scratch;
//!   [`Measurement`] binds one observation channel (`H`, `z`, `R`, plus
//!   `y`, `S`, `K` and correct scratch). Runtime entry points are
//!   [`Kalman::predict`] and [`Kalman::correct`].
//!
//! - [`matrix`] — Fixed-shape [`Matrix`] views over caller-owned flat
//!   row-major buffers, with the multiply/transpose-multiply/in-place
//!   add-sub kernels the recursion is built from.
//!
//! - [`linalg`] — In-place lower-triangular Cholesky decomposition and
//!   SPD inversion from the factor, used to invert the residual
//!   covariance in the correct step.
//!
//! - [`traits`] — Element traits: [`Scalar`] for all matrix elements,
//!   [`FloatScalar`] for the float-only paths (`f32`, `f64`).
//!
//! ## Caller contract
//!
//! The hot path carries no checks and no error reporting: dimension
//! consistency between separately-bound buffers, a fading factor in
//! `(0, 1]`, and a positive-definite residual covariance are the caller's
//! responsibility, and violations yield undefined numeric results (NaN
//! propagation), not recoverable errors. The one enforcement point is at
//! configuration time, where binding a buffer shorter than its declared
//! shape panics.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod filter;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use filter::{Kalman, Measurement};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
