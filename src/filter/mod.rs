//! The predict/correct recursion over caller-owned buffers.
//!
//! A [`Kalman`] binds the process model and estimate, a [`Measurement`]
//! binds one observation channel, and an external driver alternates
//! [`Kalman::predict`] (possibly skipped on ticks with no new model) and
//! [`Kalman::correct`] (once per available measurement), reading the state
//! estimate after each call. Nothing here allocates, blocks, or spawns
//! work; every buffer is bound once at configuration time.
//!
//! # Example
//!
//! Constant-velocity model with a position-only sensor:
//!
//! ```
//! use kfcore::{Kalman, Measurement};
//!
//! // Filter buffers: 2 states [position, velocity], no input model.
//! let mut a = [1.0, 0.1, 0.0, 1.0];
//! let mut x = [0.0, 1.0];
//! let mut b: [f64; 0] = [];
//! let mut u: [f64; 0] = [];
//! let mut p = [1.0, 0.0, 0.0, 1.0];
//! let mut q: [f64; 0] = [];
//! let mut aux = [0.0; 2];
//! let mut predicted_x = [0.0; 2];
//! let mut temp_p = [0.0; 4];
//! let mut temp_bq: [f64; 0] = [];
//!
//! let mut kf = Kalman::new(
//!     2, 0,
//!     &mut a, &mut x, &mut b, &mut u, &mut p, &mut q,
//!     &mut aux, &mut predicted_x, &mut temp_p, &mut temp_bq,
//! );
//!
//! // Measurement buffers: 1 measured quantity (position).
//! let mut h = [1.0, 0.0];
//! let mut z = [0.0];
//! let mut r = [0.5];
//! let mut y = [0.0];
//! let mut s = [0.0];
//! let mut k = [0.0; 2];
//! let mut m_aux = [0.0; 2];
//! let mut chol = [0.0];
//! let mut s_inv = [0.0];
//! let mut hp = [0.0; 2];
//! let mut pht = [0.0; 2];
//! let mut khp = [0.0; 4];
//!
//! let mut position = Measurement::new(
//!     2, 1,
//!     &mut h, &mut z, &mut r, &mut y, &mut s, &mut k,
//!     &mut m_aux, &mut chol, &mut s_inv, &mut hp, &mut pht, &mut khp,
//! );
//!
//! kf.predict(1.0);
//! position.measurement_vector_mut()[(0, 0)] = 0.12;
//! kf.correct(&mut position);
//!
//! let pos = kf.state()[(0, 0)];
//! assert!(pos > 0.1 && pos < 0.12);
//! ```

mod kalman;
mod measurement;


pub use kalman::Kalman;
pub use measurement::Measurement;
