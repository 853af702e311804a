use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Cholesky decomposition in place: `A = L · Lᵀ`.
///
/// On return, the lower triangle of `a` (including diagonal) contains `L`.
/// The upper triangle is left unchanged.
///
/// The input must be symmetric positive definite; this is not checked.
/// A non-PD input takes the square root of a non-positive diagonal and
/// propagates NaN/inf through the remaining columns.
pub fn cholesky_in_place<T: FloatScalar>(a: &mut Matrix<'_, T>) {
    let n = a.rows();
    assert_eq!(n, a.cols(), "Cholesky decomposition requires a square matrix");

    for j in 0..n {
        for k in 0..j {
            let ljk = a[(j, k)];
            for i in j..n {
                a[(i, j)] = a[(i, j)] - ljk * a[(i, k)];
            }
        }

        let ljj = a[(j, j)].sqrt();
        a[(j, j)] = ljj;

        let inv_ljj = T::one() / ljj;
        for i in (j + 1)..n {
            a[(i, j)] = a[(i, j)] * inv_ljj;
        }
    }
}

/// Invert a symmetric positive-definite matrix from its in-place Cholesky
/// factor: `dst = A⁻¹ = L⁻ᵀ · L⁻¹`.
///
/// `l` holds `L` in its lower triangle (as left by [`cholesky_in_place`];
/// the upper triangle is ignored). Each column of the inverse is obtained
/// by forward/back substitution against an identity column; `aux` is
/// caller scratch of length ≥ `l.rows()` holding the intermediate
/// substitution vector. `dst` must be a separate `n`×`n` destination.
pub fn invert_lower<T: FloatScalar>(l: &Matrix<'_, T>, dst: &mut Matrix<'_, T>, aux: &mut [T]) {
    let n = l.rows();
    let y = &mut aux[..n];

    for col in 0..n {
        // Forward substitution, L·y = e_col. Entries above `col` are zero.
        y[col] = T::one() / l[(col, col)];
        for i in (col + 1)..n {
            let mut sum = T::zero();
            for j in col..i {
                sum = sum + l[(i, j)] * y[j];
            }
            y[i] = -sum / l[(i, i)];
        }

        // Back substitution, Lᵀ·x = y, written directly into column `col`.
        for i in (0..n).rev() {
            let mut sum = if i >= col { y[i] } else { T::zero() };
            for j in (i + 1)..n {
                sum = sum - l[(j, i)] * dst[(j, col)];
            }
            dst[(i, col)] = sum / l[(i, i)];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "expected {} ≈ {} (diff = {}, tol = {})",
            a,
            b,
            (a - b).abs(),
            tol
        );
    }

    const SPD_3X3: [f64; 9] = [4.0, 2.0, 1.0, 2.0, 10.0, 3.5, 1.0, 3.5, 4.5];

    #[test]
    fn cholesky_2x2() {
        let mut buf = [4.0, 2.0, 2.0, 3.0];
        let mut a = Matrix::new(2, 2, &mut buf);
        cholesky_in_place(&mut a);

        // L = [[2, 0], [1, sqrt(2)]]
        approx_eq(a[(0, 0)], 2.0, 1e-12);
        approx_eq(a[(1, 0)], 1.0, 1e-12);
        approx_eq(a[(1, 1)], 2.0_f64.sqrt(), 1e-12);
        // Upper triangle untouched
        assert_eq!(a[(0, 1)], 2.0);
    }

    #[test]
    fn cholesky_reconstructs_3x3() {
        let mut buf = SPD_3X3;
        let mut a = Matrix::new(3, 3, &mut buf);
        cholesky_in_place(&mut a);

        // L·Lᵀ over the lower triangle must reproduce the input.
        for i in 0..3 {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..=j {
                    sum += a[(i, k)] * a[(j, k)];
                }
                approx_eq(sum, SPD_3X3[i * 3 + j], 1e-12);
            }
        }
    }

    #[test]
    fn cholesky_identity() {
        let mut buf = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let mut a = Matrix::new(3, 3, &mut buf);
        cholesky_in_place(&mut a);
        for i in 0..3 {
            for j in 0..=i {
                let expected = if i == j { 1.0 } else { 0.0 };
                approx_eq(a[(i, j)], expected, 1e-15);
            }
        }
    }

    #[test]
    fn invert_lower_gives_spd_inverse() {
        let mut buf = SPD_3X3;
        let mut inv_buf = [0.0; 9];
        let mut aux = [0.0; 3];

        let mut a = Matrix::new(3, 3, &mut buf);
        let mut inv = Matrix::new(3, 3, &mut inv_buf);
        cholesky_in_place(&mut a);
        invert_lower(&a, &mut inv, &mut aux);

        // A · A⁻¹ = I, using the original entries.
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += SPD_3X3[i * 3 + k] * inv[(k, j)];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                approx_eq(sum, expected, 1e-10);
            }
        }
    }

    #[test]
    fn invert_lower_scalar() {
        let mut buf = [2.0];
        let mut inv_buf = [0.0];
        let mut aux = [0.0];

        let mut a = Matrix::new(1, 1, &mut buf);
        let mut inv = Matrix::new(1, 1, &mut inv_buf);
        cholesky_in_place(&mut a);
        invert_lower(&a, &mut inv, &mut aux);
        approx_eq(inv[(0, 0)], 0.5, 1e-15);
    }

    #[test]
    fn invert_result_symmetric() {
        let mut buf = SPD_3X3;
        let mut inv_buf = [0.0; 9];
        let mut aux = [0.0; 3];

        let mut a = Matrix::new(3, 3, &mut buf);
        let mut inv = Matrix::new(3, 3, &mut inv_buf);
        cholesky_in_place(&mut a);
        invert_lower(&a, &mut inv, &mut aux);

        for i in 0..3 {
            for j in 0..3 {
                approx_eq(inv[(i, j)], inv[(j, i)], 1e-12);
            }
        }
    }
}
