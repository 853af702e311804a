mod ops;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Fixed-shape matrix view over a caller-owned flat buffer.
///
/// Storage is row-major: element `(r, c)` lives at `data[r * cols + c]`.
/// The view holds a mutable borrow of the backing slice for its entire
/// lifetime and never copies or allocates; dimensions are fixed at
/// construction. A row/column count of zero is valid and yields a view
/// whose arithmetic operations are no-ops.
///
/// # Examples
///
/// ```
/// use kfcore::Matrix;
///
/// let mut buf = [1.0, 2.0, 3.0, 4.0];
/// let a = Matrix::new(2, 2, &mut buf);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.rows(), 2);
/// assert_eq!(a.cols(), 2);
/// ```
#[derive(Debug)]
pub struct Matrix<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a mut [T],
}

impl<'a, T> Matrix<'a, T> {
    /// Bind a `rows` × `cols` view to a caller-owned buffer.
    ///
    /// This is configuration-time wiring, not a hot-path operation.
    /// Panics if the slice is shorter than `rows * cols`; this is the only
    /// shape enforcement the primitive performs — consistency *between*
    /// separately-bound views is a caller contract.
    #[inline]
    pub fn new(rows: usize, cols: usize, data: &'a mut [T]) -> Self {
        assert!(
            data.len() >= rows * cols,
            "matrix backing buffer too small: {} < {}",
            data.len(),
            rows * cols
        );
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The backing buffer, in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.rows * self.cols]
    }

    /// Mutable access to the backing buffer, in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.rows * self.cols]
    }

    /// Row `r` as a contiguous slice.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Row `r` as a contiguous mutable slice.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }
}

impl<T: Scalar> Matrix<'_, T> {
    /// Copy this matrix into an equally-shaped destination.
    pub fn copy_to(&self, dst: &mut Matrix<'_, T>) {
        dst.as_mut_slice().copy_from_slice(self.as_slice());
    }

    /// In-place elementwise addition: `self += b`.
    pub fn add_inplace(&mut self, b: &Matrix<'_, T>) {
        for (s, &v) in self.as_mut_slice().iter_mut().zip(b.as_slice()) {
            *s = *s + v;
        }
    }

    /// In-place elementwise subtraction into the left operand: `self -= b`.
    pub fn sub_inplace_a(&mut self, b: &Matrix<'_, T>) {
        for (s, &v) in self.as_mut_slice().iter_mut().zip(b.as_slice()) {
            *s = *s - v;
        }
    }

    /// Elementwise subtraction stored into the right operand's slot:
    /// `b = self - b`.
    pub fn sub_inplace_b(&self, b: &mut Matrix<'_, T>) {
        for (&s, v) in self.as_slice().iter().zip(b.as_mut_slice()) {
            *v = s - *v;
        }
    }
}

// Index by (row, col) tuple
impl<T> Index<(usize, usize)> for Matrix<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}
