//! Dense 2D integer matrix

use crate::error::{Error, Result};
use std::fmt;

/// Dense 2-dimensional integer matrix
///
/// Elements are stored in a single flat buffer in row-major order, with the
/// element at `(r, c)` living at offset `r * cols + c`. The matrix exclusively
/// owns its storage: `Clone` is a deep copy and two matrices never alias.
///
/// Arithmetic uses exact native `i64` operations. Overflow during `matmul`
/// dot products is not checked; this is a documented limitation.
///
/// Not intended for concurrent mutation of a shared instance; give each
/// thread its own copy.
///
/// # Example
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])?;
/// assert_eq!(a.shape(), (2, 3));
/// assert_eq!(a.get(1, 2)?, 6);
/// # Ok::<(), densemat::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Row-major element buffer, `rows * cols` long
    data: Vec<i64>,
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension {
                reason: format!("matrix dimensions must be positive, got {rows}x{cols}"),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        })
    }

    /// Create a matrix from a 2D literal, inferring dimensions
    ///
    /// The row count is the outer length and the column count is the first
    /// row's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the literal is empty, the first
    /// row is empty, or any row's length differs from the first.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]])?;
    /// assert_eq!(m.shape(), (2, 2));
    /// # Ok::<(), densemat::Error>(())
    /// ```
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidDimension {
                reason: "matrix literal has no rows".to_string(),
            });
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(Error::InvalidDimension {
                reason: "matrix literal has empty rows".to_string(),
            });
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidDimension {
                    reason: format!(
                        "ragged matrix literal: row {i} has {} elements, expected {cols}",
                        row.len()
                    ),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Create a matrix from a flat row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// `data.len()` does not equal `rows * cols`.
    pub fn from_vec(data: Vec<i64>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension {
                reason: format!("matrix dimensions must be positive, got {rows}x{cols}"),
            });
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidDimension {
                reason: format!(
                    "shape {rows}x{cols} requires {} elements, but got {}",
                    rows * cols,
                    data.len()
                ),
            });
        }
        Ok(Self { rows, cols, data })
    }

    // ===== Accessors =====

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Flat row-major view of the element buffer
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Row-major offset for `(r, c)`, bounds-checked
    fn offset(&self, r: usize, c: usize) -> Result<usize> {
        if r >= self.rows || c >= self.cols {
            return Err(Error::IndexOutOfRange {
                index: vec![r, c],
                shape: vec![self.rows, self.cols],
            });
        }
        Ok(r * self.cols + c)
    }

    /// Read the element at `(r, c)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> Result<i64> {
        let idx = self.offset(r, c)?;
        Ok(self.data[idx])
    }

    /// Write the element at `(r, c)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `r >= rows` or `c >= cols`.
    pub fn set(&mut self, r: usize, c: usize, value: i64) -> Result<()> {
        let idx = self.offset(r, c)?;
        self.data[idx] = value;
        Ok(())
    }

    // ===== Operations =====

    /// Elementwise sum, returning a new matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both matrices have the
    /// same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::DimensionMismatch {
                op: "add",
                lhs: vec![self.rows, self.cols],
                rhs: vec![other.rows, other.cols],
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Standard matrix product: `self[m,k] * other[k,n] -> [m,n]`
    ///
    /// Each entry is the exact integer dot product of the corresponding row
    /// of `self` and column of `other`. Overflow is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless `self.cols == other.rows`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])?;
    /// let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]])?;
    /// let c = a.matmul(&b)?;
    /// assert_eq!(c.as_slice(), &[22, 28, 49, 64]);
    /// # Ok::<(), densemat::Error>(())
    /// ```
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::DimensionMismatch {
                op: "matmul",
                lhs: vec![self.rows, self.cols],
                rhs: vec![other.rows, other.cols],
            });
        }
        let mut data = vec![0i64; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0i64;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = acc;
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Transposed copy: `result[j][i] == self[i][j]`
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0i64; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl fmt::Display for Matrix {
    /// One row per line, values separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_zeros_rejects_zero_dims() {
        assert!(matches!(
            Matrix::zeros(0, 3),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Matrix::zeros(3, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_rows_infers_shape() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(0, 2).unwrap(), 3);
        assert_eq!(m.get(1, 0).unwrap(), 4);
    }

    #[test]
    fn test_from_rows_rejects_empty_and_ragged() {
        assert!(matches!(
            Matrix::from_rows(&[]),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Matrix::from_rows(&[vec![]]),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Matrix::from_rows(&[vec![1, 2], vec![3]]),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(Matrix::from_vec(vec![1, 2, 3, 4], 2, 2).is_ok());
        assert!(matches!(
            Matrix::from_vec(vec![1, 2, 3], 2, 2),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.set(1, 1, 7).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 7);

        assert!(matches!(
            m.get(2, 0),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            m.set(0, 2, 1),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_leaves_operands_unmodified() {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(&[vec![10, 20], vec![30, 40]]).unwrap();
        let c = a.add(&b).unwrap();
        assert_eq!(c.as_slice(), &[11, 22, 33, 44]);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(b.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = Matrix::zeros(2, 2).unwrap();
        let b = Matrix::zeros(3, 3).unwrap();
        assert_eq!(
            a.add(&b),
            Err(Error::DimensionMismatch {
                op: "add",
                lhs: vec![2, 2],
                rhs: vec![3, 3],
            })
        );
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[22, 28, 49, 64]);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 2).unwrap();
        assert!(matches!(
            a.matmul(&b),
            Err(Error::DimensionMismatch { op: "matmul", .. })
        ));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_transpose_involution() {
        let m = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }

    #[test]
    fn test_clone_is_deep() {
        let mut a = Matrix::zeros(1, 2).unwrap();
        let b = a.clone();
        a.set(0, 0, 9).unwrap();
        assert_eq!(b.get(0, 0).unwrap(), 0);
    }
}
