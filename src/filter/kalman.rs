use crate::linalg::{cholesky_in_place, invert_lower};
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

use super::Measurement;

/// Linear Kalman filter state over caller-owned buffers.
///
/// Holds the process model (`A`, `B`, `Q`), the current estimate (`x`, `P`),
/// the reserved input vector `u`, and the scratch storage the predict step
/// needs to run without allocating. All buffers are bound once at
/// construction and referenced for the filter's lifetime.
///
/// `P` must be symmetric positive semi-definite when the filter starts and
/// both operations preserve that invariant for valid inputs.
///
/// # Example
///
/// ```
/// use kfcore::Kalman;
///
/// // 1-D constant-value filter, no input model.
/// let mut a = [1.0];
/// let mut x = [0.0];
/// let mut b: [f64; 0] = [];
/// let mut u: [f64; 0] = [];
/// let mut p = [1.0];
/// let mut q: [f64; 0] = [];
/// let mut aux = [0.0];
/// let mut predicted_x = [0.0];
/// let mut temp_p = [0.0];
/// let mut temp_bq: [f64; 0] = [];
///
/// let mut kf = Kalman::new(
///     1, 0,
///     &mut a, &mut x, &mut b, &mut u, &mut p, &mut q,
///     &mut aux, &mut predicted_x, &mut temp_p, &mut temp_bq,
/// );
///
/// kf.predict(1.0);
/// assert_eq!(kf.state()[(0, 0)], 0.0);
/// assert_eq!(kf.covariance()[(0, 0)], 1.0);
/// ```
pub struct Kalman<'a, T> {
    pub(crate) a: Matrix<'a, T>,
    pub(crate) x: Matrix<'a, T>,
    pub(crate) b: Matrix<'a, T>,
    pub(crate) u: Matrix<'a, T>,
    pub(crate) p: Matrix<'a, T>,
    pub(crate) q: Matrix<'a, T>,
    temp: PredictScratch<'a, T>,
}

/// Predict-step scratch. Clobbered on every call; carries no state.
struct PredictScratch<'a, T> {
    /// Column scratch for the multiplication kernels, length ≥ max(n, m).
    aux: &'a mut [T],
    /// Predicted state, n×1. `A·x` lands here before being copied back
    /// into `x`, so the multiply never aliases its own input.
    predicted_x: Matrix<'a, T>,
    /// Intermediate `A·P`, n×n.
    p: Matrix<'a, T>,
    /// Intermediate `B·Q`, n×m.
    bq: Matrix<'a, T>,
}

impl<'a, T> Kalman<'a, T> {
    /// Bind a filter to `(num_states, num_inputs)` = (n, m) and its twelve
    /// caller-owned buffers. Pure wiring: no computation, no copies.
    ///
    /// Buffer shapes:
    /// - `a` — state transition, n×n
    /// - `x` — state estimate, n×1
    /// - `b` — input transition, n×m (m may be 0: no input model)
    /// - `u` — input vector, m×1 (reserved for a control term)
    /// - `p` — state covariance, n×n
    /// - `q` — input covariance, m×m
    /// - `aux` — multiplication scratch, length ≥ max(n, m)
    /// - `predicted_x` — predicted-state scratch, n×1
    /// - `temp_p` — covariance scratch, n×n
    /// - `temp_bq` — `B·Q` scratch, n×m
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_states: usize,
        num_inputs: usize,
        a: &'a mut [T],
        x: &'a mut [T],
        b: &'a mut [T],
        u: &'a mut [T],
        p: &'a mut [T],
        q: &'a mut [T],
        aux: &'a mut [T],
        predicted_x: &'a mut [T],
        temp_p: &'a mut [T],
        temp_bq: &'a mut [T],
    ) -> Self {
        assert!(
            aux.len() >= num_states.max(num_inputs),
            "aux buffer too small: {} < {}",
            aux.len(),
            num_states.max(num_inputs)
        );

        Self {
            a: Matrix::new(num_states, num_states, a),
            x: Matrix::new(num_states, 1, x),
            b: Matrix::new(num_states, num_inputs, b),
            u: Matrix::new(num_inputs, 1, u),
            p: Matrix::new(num_states, num_states, p),
            q: Matrix::new(num_inputs, num_inputs, q),
            temp: PredictScratch {
                aux,
                predicted_x: Matrix::new(num_states, 1, predicted_x),
                p: Matrix::new(num_states, num_states, temp_p),
                bq: Matrix::new(num_states, num_inputs, temp_bq),
            },
        }
    }

    /// The state estimate `x`.
    #[inline]
    pub fn state(&self) -> &Matrix<'a, T> {
        &self.x
    }

    /// Mutable access to the state estimate `x`.
    #[inline]
    pub fn state_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.x
    }

    /// The state covariance `P`.
    #[inline]
    pub fn covariance(&self) -> &Matrix<'a, T> {
        &self.p
    }

    /// Mutable access to the state covariance `P`.
    #[inline]
    pub fn covariance_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.p
    }

    /// Mutable access to the state transition matrix `A`.
    #[inline]
    pub fn state_transition_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.a
    }

    /// Mutable access to the input transition matrix `B`.
    #[inline]
    pub fn input_transition_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.b
    }

    /// The input vector `u`. Bound for a future control term; the
    /// recursion itself does not consume it.
    #[inline]
    pub fn input_vector(&self) -> &Matrix<'a, T> {
        &self.u
    }

    /// Mutable access to the input vector `u`.
    #[inline]
    pub fn input_vector_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.u
    }

    /// Mutable access to the input covariance `Q`.
    #[inline]
    pub fn input_covariance_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.q
    }
}

impl<T: FloatScalar> Kalman<'_, T> {
    /// Time update: advance the estimate one step through the process model.
    ///
    /// Computes `x ← A·x` and `P ← (A·P·Aᵀ)/λ² + B·Q·Bᵀ`, the input term
    /// only when an input model is bound. `lambda` is the fading-memory
    /// factor, `0 < λ ≤ 1`: one means no covariance inflation, smaller
    /// values inflate `P` to absorb untracked process drift. Passing zero
    /// divides by zero and floods `P` with inf/NaN; the caller owns that
    /// contract, nothing here checks it.
    pub fn predict(&mut self, lambda: T) {
        // x = A·x, through the predicted-state buffer; the product must
        // not be formed in place over x.
        self.a.mult_rowvector(&self.x, &mut self.temp.predicted_x);
        self.temp.predicted_x.copy_to(&mut self.x);

        let inflation = T::one() / (lambda * lambda);

        // P = (A·P)·Aᵀ / λ², the intermediate absorbing the read of P
        // before P is overwritten.
        self.a.mult(&self.p, &mut self.temp.p, self.temp.aux);
        self.temp.p.multscale_transb(&self.a, inflation, &mut self.p);

        // P += (B·Q)·Bᵀ. A zero-width input model is the designed way to
        // express "no process-noise injection".
        if self.b.rows() > 0 {
            self.b.mult(&self.q, &mut self.temp.bq, self.temp.aux);
            self.temp.bq.multadd_transb(&self.b, &mut self.p);
        }
    }

    /// Measurement update: fuse one observation into the estimate.
    ///
    /// Reads `H`, `z`, `R` from the measurement block, updates `x` and `P`
    /// in place, and leaves the innovation `y`, residual covariance `S`,
    /// and gain `K` readable for diagnostics.
    ///
    /// `S = H·P·Hᵀ + R` must come out symmetric positive definite; the
    /// decomposition is unchecked and a non-PD `S` propagates NaN through
    /// the update.
    pub fn correct(&mut self, m: &mut Measurement<'_, T>) {
        // y = z − H·x
        m.h.mult_rowvector(&self.x, &mut m.y);
        m.z.sub_inplace_b(&mut m.y);

        // S = H·P·Hᵀ + R
        m.h.mult(&self.p, &mut m.temp.hp, m.temp.aux);
        m.temp.hp.mult_transb(&m.h, &mut m.s);
        m.s.add_inplace(&m.r);

        // K = P·Hᵀ·S⁻¹. The decomposition runs on a working copy so S
        // itself survives the call.
        m.s.copy_to(&mut m.temp.chol);
        cholesky_in_place(&mut m.temp.chol);
        invert_lower(&m.temp.chol, &mut m.temp.s_inv, m.temp.aux);
        self.p.mult_transb(&m.h, &mut m.temp.pht);
        m.temp.pht.mult(&m.temp.s_inv, &mut m.k, m.temp.aux);

        // x += K·y
        m.k.multadd_rowvector(&m.y, &mut self.x);

        // P −= K·(H·P), the cheaper equivalent of (I − K·H)·P. H·P is
        // recomputed from the still-prior P, after which P is overwritten.
        m.h.mult(&self.p, &mut m.temp.hp, m.temp.aux);
        m.k.mult(&m.temp.hp, &mut m.temp.khp, m.temp.aux);
        self.p.sub_inplace_a(&m.temp.khp);
    }
}
