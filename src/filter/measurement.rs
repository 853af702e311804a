use crate::matrix::Matrix;

/// One observation channel for a [`Kalman`](super::Kalman) filter state.
///
/// Holds the measurement model (`H`, `z`, `R`), the outputs of the correct
/// step (`y`, `S`, `K`), and the scratch storage that step needs to run
/// without allocating. A filter may be paired with any number of
/// measurement blocks over its lifetime — one per sensor, each with its
/// own measurement count `k`, fused sequentially against the shared state
/// dimension `n`.
///
/// The caller writes `z` before each correct call; `y`, `S`, and `K` are
/// populated by the call and readable afterward for diagnostics, but are
/// not meaningful inputs to the next one.
pub struct Measurement<'a, T> {
    pub(crate) h: Matrix<'a, T>,
    pub(crate) z: Matrix<'a, T>,
    pub(crate) r: Matrix<'a, T>,
    pub(crate) y: Matrix<'a, T>,
    pub(crate) s: Matrix<'a, T>,
    pub(crate) k: Matrix<'a, T>,
    pub(crate) temp: CorrectScratch<'a, T>,
}

/// Correct-step scratch. Clobbered on every call; carries no state.
pub(crate) struct CorrectScratch<'a, T> {
    /// Column scratch for multiplication and substitution, length ≥ max(k, n).
    pub(crate) aux: &'a mut [T],
    /// Working copy of `S` that receives the Cholesky factor, k×k.
    pub(crate) chol: Matrix<'a, T>,
    /// Inverted residual covariance `S⁻¹`, k×k.
    pub(crate) s_inv: Matrix<'a, T>,
    /// Intermediate `H·P`, k×n.
    pub(crate) hp: Matrix<'a, T>,
    /// Intermediate `P·Hᵀ`, n×k.
    pub(crate) pht: Matrix<'a, T>,
    /// Intermediate `K·(H·P)`, n×n.
    pub(crate) khp: Matrix<'a, T>,
}

impl<'a, T> Measurement<'a, T> {
    /// Bind an observation channel to `(num_states, num_measurements)` =
    /// (n, k) and its twelve caller-owned buffers. Pure wiring, like
    /// [`Kalman::new`](super::Kalman::new).
    ///
    /// Buffer shapes:
    /// - `h` — measurement transformation, k×n
    /// - `z` — measurement vector, k×1
    /// - `r` — measurement noise covariance, k×k
    /// - `y` — innovation, k×1
    /// - `s` — residual covariance, k×k
    /// - `k` — Kalman gain, n×k
    /// - `aux` — multiplication/substitution scratch, length ≥ max(k, n)
    /// - `temp_chol` — Cholesky working copy of `S`, k×k
    /// - `temp_s_inv` — `S⁻¹` scratch, k×k
    /// - `temp_hp` — `H·P` scratch, k×n
    /// - `temp_pht` — `P·Hᵀ` scratch, n×k
    /// - `temp_khp` — `K·(H·P)` scratch, n×n
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_states: usize,
        num_measurements: usize,
        h: &'a mut [T],
        z: &'a mut [T],
        r: &'a mut [T],
        y: &'a mut [T],
        s: &'a mut [T],
        k: &'a mut [T],
        aux: &'a mut [T],
        temp_chol: &'a mut [T],
        temp_s_inv: &'a mut [T],
        temp_hp: &'a mut [T],
        temp_pht: &'a mut [T],
        temp_khp: &'a mut [T],
    ) -> Self {
        assert!(
            aux.len() >= num_states.max(num_measurements),
            "aux buffer too small: {} < {}",
            aux.len(),
            num_states.max(num_measurements)
        );

        Self {
            h: Matrix::new(num_measurements, num_states, h),
            z: Matrix::new(num_measurements, 1, z),
            r: Matrix::new(num_measurements, num_measurements, r),
            y: Matrix::new(num_measurements, 1, y),
            s: Matrix::new(num_measurements, num_measurements, s),
            k: Matrix::new(num_states, num_measurements, k),
            temp: CorrectScratch {
                aux,
                chol: Matrix::new(num_measurements, num_measurements, temp_chol),
                s_inv: Matrix::new(num_measurements, num_measurements, temp_s_inv),
                hp: Matrix::new(num_measurements, num_states, temp_hp),
                pht: Matrix::new(num_states, num_measurements, temp_pht),
                khp: Matrix::new(num_states, num_states, temp_khp),
            },
        }
    }

    /// Mutable access to the measurement transformation `H`.
    #[inline]
    pub fn transformation_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.h
    }

    /// The measurement vector `z`.
    #[inline]
    pub fn measurement_vector(&self) -> &Matrix<'a, T> {
        &self.z
    }

    /// Mutable access to the measurement vector `z`. Written by the caller
    /// before each correct call.
    #[inline]
    pub fn measurement_vector_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.z
    }

    /// Mutable access to the measurement noise covariance `R`.
    #[inline]
    pub fn noise_covariance_mut(&mut self) -> &mut Matrix<'a, T> {
        &mut self.r
    }

    /// The innovation `y = z − H·x` from the last correct call.
    #[inline]
    pub fn innovation(&self) -> &Matrix<'a, T> {
        &self.y
    }

    /// The residual covariance `S = H·P·Hᵀ + R` from the last correct call.
    #[inline]
    pub fn residual_covariance(&self) -> &Matrix<'a, T> {
        &self.s
    }

    /// The Kalman gain `K = P·Hᵀ·S⁻¹` from the last correct call.
    #[inline]
    pub fn gain(&self) -> &Matrix<'a, T> {
        &self.k
    }
}
