use crate::traits::Scalar;

use super::Matrix;

// ── Plain multiplication ────────────────────────────────────────────

impl<T: Scalar> Matrix<'_, T> {
    /// Matrix multiplication into a fresh destination: `dst = self · b`.
    ///
    /// `aux` is caller-supplied scratch of length ≥ `b.rows()`; it holds one
    /// column of `b` during accumulation so the inner dot products run over
    /// two contiguous slices. `dst` must not overlap either operand.
    pub fn mult(&self, b: &Matrix<'_, T>, dst: &mut Matrix<'_, T>, aux: &mut [T]) {
        let inner = b.rows();
        for j in 0..b.cols() {
            for (k, slot) in aux[..inner].iter_mut().enumerate() {
                *slot = b[(k, j)];
            }
            for i in 0..self.rows() {
                let mut sum = T::zero();
                for (&a, &x) in self.row(i).iter().zip(&aux[..inner]) {
                    sum = sum + a * x;
                }
                dst[(i, j)] = sum;
            }
        }
    }

    /// Column-vector multiplication: `dst = self · x`.
    ///
    /// `x` and `dst` are column vectors (`n`×1 and `rows`×1); both are
    /// contiguous, so no scratch is needed.
    pub fn mult_rowvector(&self, x: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) {
        for i in 0..self.rows() {
            let mut sum = T::zero();
            for (&a, &v) in self.row(i).iter().zip(x.as_slice()) {
                sum = sum + a * v;
            }
            dst[(i, 0)] = sum;
        }
    }

    /// Accumulating column-vector multiplication: `dst += self · x`.
    pub fn multadd_rowvector(&self, x: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) {
        for i in 0..self.rows() {
            let mut sum = dst[(i, 0)];
            for (&a, &v) in self.row(i).iter().zip(x.as_slice()) {
                sum = sum + a * v;
            }
            dst[(i, 0)] = sum;
        }
    }
}

// ── Transposed-B multiplication ─────────────────────────────────────
//
// `self · bᵀ` pairs rows of `self` with rows of `b`; with row-major
// storage both run contiguously, so these kernels take no scratch.

impl<T: Scalar> Matrix<'_, T> {
    /// Transposed multiplication into a fresh destination: `dst = self · bᵀ`.
    pub fn mult_transb(&self, b: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) {
        for i in 0..self.rows() {
            for j in 0..b.rows() {
                let mut sum = T::zero();
                for (&a, &v) in self.row(i).iter().zip(b.row(j)) {
                    sum = sum + a * v;
                }
                dst[(i, j)] = sum;
            }
        }
    }

    /// Accumulating transposed multiplication: `dst += self · bᵀ`.
    pub fn multadd_transb(&self, b: &Matrix<'_, T>, dst: &mut Matrix<'_, T>) {
        for i in 0..self.rows() {
            for j in 0..b.rows() {
                let mut sum = dst[(i, j)];
                for (&a, &v) in self.row(i).iter().zip(b.row(j)) {
                    sum = sum + a * v;
                }
                dst[(i, j)] = sum;
            }
        }
    }

    /// Scaled transposed multiplication: `dst = (self · bᵀ) · scale`.
    pub fn multscale_transb(&self, b: &Matrix<'_, T>, scale: T, dst: &mut Matrix<'_, T>) {
        for i in 0..self.rows() {
            for j in 0..b.rows() {
                let mut sum = T::zero();
                for (&a, &v) in self.row(i).iter().zip(b.row(j)) {
                    sum = sum + a * v;
                }
                dst[(i, j)] = sum * scale;
            }
        }
    }
}
