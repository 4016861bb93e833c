//! Dense 3D integer tensor

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::fmt;

/// Dense 3-dimensional integer tensor addressed as `[slice][row][col]`
///
/// Elements are stored in a single flat buffer in slice-major order: the
/// element at `(i, j, k)` lives at offset `i * d2 * d3 + j * d3 + k`. Like
/// [`Matrix`], the tensor exclusively owns its storage and `Clone` is a deep
/// copy.
///
/// The flat layout makes the [`reshape`](Tensor3::reshape) flattening
/// contract hold by construction: flattening in `i -> j -> k` nested order is
/// exactly the buffer order, so reshaping only rewrites the dimensions.
///
/// Not intended for concurrent mutation of a shared instance.
///
/// # Example
///
/// ```
/// use densemat::Tensor3;
///
/// let t = Tensor3::zeros(2, 3, 4)?;
/// assert_eq!(t.dims(), (2, 3, 4));
/// # Ok::<(), densemat::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Tensor3 {
    /// First-axis size (number of slices)
    d1: usize,
    /// Second-axis size (rows per slice)
    d2: usize,
    /// Third-axis size (columns per row)
    d3: usize,
    /// Slice-major element buffer, `d1 * d2 * d3` long
    data: Vec<i64>,
}

impl Tensor3 {
    /// Create a zero-filled `d1 x d2 x d3` tensor
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is zero.
    pub fn zeros(d1: usize, d2: usize, d3: usize) -> Result<Self> {
        if d1 == 0 || d2 == 0 || d3 == 0 {
            return Err(Error::InvalidDimension {
                reason: format!("tensor dimensions must be positive, got {d1}x{d2}x{d3}"),
            });
        }
        Ok(Self {
            d1,
            d2,
            d3,
            data: vec![0; d1 * d2 * d3],
        })
    }

    /// Create a tensor from a 3D literal, inferring dimensions
    ///
    /// Dimensions are inferred from the outer length, the first slice's
    /// length, and the first row's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the literal is empty at any
    /// nesting level or any inner shape is irregular.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Tensor3;
    ///
    /// let t = Tensor3::from_nested(&[
    ///     vec![vec![1, 2], vec![3, 4]],
    ///     vec![vec![5, 6], vec![7, 8]],
    /// ])?;
    /// assert_eq!(t.dims(), (2, 2, 2));
    /// assert_eq!(t.get(1, 0, 1)?, 6);
    /// # Ok::<(), densemat::Error>(())
    /// ```
    pub fn from_nested(slices: &[Vec<Vec<i64>>]) -> Result<Self> {
        if slices.is_empty() {
            return Err(Error::InvalidDimension {
                reason: "tensor literal has no slices".to_string(),
            });
        }
        let d2 = slices[0].len();
        if d2 == 0 {
            return Err(Error::InvalidDimension {
                reason: "tensor literal has empty slices".to_string(),
            });
        }
        let d3 = slices[0][0].len();
        if d3 == 0 {
            return Err(Error::InvalidDimension {
                reason: "tensor literal has empty rows".to_string(),
            });
        }
        let mut data = Vec::with_capacity(slices.len() * d2 * d3);
        for (i, slice) in slices.iter().enumerate() {
            if slice.len() != d2 {
                return Err(Error::InvalidDimension {
                    reason: format!(
                        "ragged tensor literal: slice {i} has {} rows, expected {d2}",
                        slice.len()
                    ),
                });
            }
            for (j, row) in slice.iter().enumerate() {
                if row.len() != d3 {
                    return Err(Error::InvalidDimension {
                        reason: format!(
                            "ragged tensor literal: row ({i}, {j}) has {} elements, expected {d3}",
                            row.len()
                        ),
                    });
                }
                data.extend_from_slice(row);
            }
        }
        Ok(Self {
            d1: slices.len(),
            d2,
            d3,
            data,
        })
    }

    /// Create a tensor from a flat slice-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is zero or
    /// `data.len()` does not equal `d1 * d2 * d3`.
    pub fn from_vec(data: Vec<i64>, d1: usize, d2: usize, d3: usize) -> Result<Self> {
        if d1 == 0 || d2 == 0 || d3 == 0 {
            return Err(Error::InvalidDimension {
                reason: format!("tensor dimensions must be positive, got {d1}x{d2}x{d3}"),
            });
        }
        if data.len() != d1 * d2 * d3 {
            return Err(Error::InvalidDimension {
                reason: format!(
                    "shape {d1}x{d2}x{d3} requires {} elements, but got {}",
                    d1 * d2 * d3,
                    data.len()
                ),
            });
        }
        Ok(Self { d1, d2, d3, data })
    }

    // ===== Accessors =====

    /// Dimensions as `(d1, d2, d3)`
    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.d1, self.d2, self.d3)
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements
    ///
    /// Always false for a constructed tensor; dimensions are positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat slice-major view of the element buffer
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Slice-major offset for `(i, j, k)`, bounds-checked
    fn offset(&self, i: usize, j: usize, k: usize) -> Result<usize> {
        if i >= self.d1 || j >= self.d2 || k >= self.d3 {
            return Err(Error::IndexOutOfRange {
                index: vec![i, j, k],
                shape: vec![self.d1, self.d2, self.d3],
            });
        }
        Ok(i * self.d2 * self.d3 + j * self.d3 + k)
    }

    /// Read the element at `(i, j, k)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside `[0,d1) x [0,d2) x [0,d3)`.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<i64> {
        let idx = self.offset(i, j, k)?;
        Ok(self.data[idx])
    }

    /// Write the element at `(i, j, k)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside `[0,d1) x [0,d2) x [0,d3)`.
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: i64) -> Result<()> {
        let idx = self.offset(i, j, k)?;
        self.data[idx] = value;
        Ok(())
    }

    // ===== Operations =====

    /// Check that `other` has identical dimensions for elementwise ops
    fn check_same_dims(&self, other: &Tensor3, op: &'static str) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: vec![self.d1, self.d2, self.d3],
                rhs: vec![other.d1, other.d2, other.d3],
            });
        }
        Ok(())
    }

    /// Elementwise sum, returning a new tensor
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless all three dimensions match.
    pub fn add(&self, other: &Tensor3) -> Result<Tensor3> {
        self.check_same_dims(other, "add")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Tensor3 {
            d1: self.d1,
            d2: self.d2,
            d3: self.d3,
            data,
        })
    }

    /// Elementwise product, returning a new tensor
    ///
    /// Position-wise scaling; contrast with [`contract`](Tensor3::contract),
    /// which applies a matrix as a linear map along the third axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless all three dimensions match.
    pub fn mul_elementwise(&self, other: &Tensor3) -> Result<Tensor3> {
        self.check_same_dims(other, "mul_elementwise")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Tensor3 {
            d1: self.d1,
            d2: self.d2,
            d3: self.d3,
            data,
        })
    }

    /// Extract the `d2 x d3` plane at slice index `d` as a standalone matrix
    ///
    /// The result is a deep copy; it never aliases the tensor's storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `d < d1`.
    pub fn slice(&self, d: usize) -> Result<Matrix> {
        if d >= self.d1 {
            return Err(Error::IndexOutOfRange {
                index: vec![d],
                shape: vec![self.d1, self.d2, self.d3],
            });
        }
        let plane = self.d2 * self.d3;
        let data = self.data[d * plane..(d + 1) * plane].to_vec();
        Matrix::from_vec(data, self.d2, self.d3)
    }

    /// Reinterpret the dimensions in place, preserving flattened element order
    ///
    /// The flattened sequence is the nested `i -> j -> k` traversal, which for
    /// this flat buffer is the buffer itself, so only the dimensions change.
    /// The element-count precondition is validated before any field is
    /// touched; a failed reshape leaves the tensor unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReshape`] unless
    /// `nd1 * nd2 * nd3 == d1 * d2 * d3`, and [`Error::InvalidDimension`] if
    /// any new dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Tensor3;
    ///
    /// let mut t = Tensor3::from_vec((1..=8).collect(), 2, 2, 2)?;
    /// t.reshape(2, 4, 1)?;
    /// assert_eq!(t.dims(), (2, 4, 1));
    /// assert_eq!(t.get(1, 0, 0)?, 5);
    /// # Ok::<(), densemat::Error>(())
    /// ```
    pub fn reshape(&mut self, nd1: usize, nd2: usize, nd3: usize) -> Result<()> {
        if nd1 == 0 || nd2 == 0 || nd3 == 0 {
            return Err(Error::InvalidDimension {
                reason: format!("tensor dimensions must be positive, got {nd1}x{nd2}x{nd3}"),
            });
        }
        if nd1 * nd2 * nd3 != self.data.len() {
            return Err(Error::InvalidReshape {
                from: vec![self.d1, self.d2, self.d3],
                to: vec![nd1, nd2, nd3],
            });
        }
        self.d1 = nd1;
        self.d2 = nd2;
        self.d3 = nd3;
        Ok(())
    }

    /// Contract the third axis against a matrix: `[d1,d2,d3] * [d3,n] -> [d1,d2,n]`
    ///
    /// The tensor is treated as a stack of `d1 * d2` row vectors of length
    /// `d3`, each transformed by the matrix. Overflow in the dot products is
    /// not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless `d3 == matrix.rows()`.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::{Matrix, Tensor3};
    ///
    /// let t = Tensor3::from_vec(vec![1, 2, 3], 1, 1, 3)?;
    /// let m = Matrix::from_rows(&[vec![1, 0], vec![0, 1], vec![1, 1]])?;
    /// let out = t.contract(&m)?;
    /// assert_eq!(out.dims(), (1, 1, 2));
    /// assert_eq!(out.as_slice(), &[4, 5]);
    /// # Ok::<(), densemat::Error>(())
    /// ```
    pub fn contract(&self, matrix: &Matrix) -> Result<Tensor3> {
        if self.d3 != matrix.rows() {
            return Err(Error::DimensionMismatch {
                op: "contract",
                lhs: vec![self.d1, self.d2, self.d3],
                rhs: vec![matrix.rows(), matrix.cols()],
            });
        }
        let n = matrix.cols();
        let mdata = matrix.as_slice();
        let mut data = vec![0i64; self.d1 * self.d2 * n];
        for d in 0..self.d1 {
            for i in 0..self.d2 {
                let row = &self.data[(d * self.d2 + i) * self.d3..(d * self.d2 + i + 1) * self.d3];
                let out = &mut data[(d * self.d2 + i) * n..(d * self.d2 + i + 1) * n];
                for (k, &v) in row.iter().enumerate() {
                    for (c, acc) in out.iter_mut().enumerate() {
                        *acc += v * mdata[k * n + c];
                    }
                }
            }
        }
        Ok(Tensor3 {
            d1: self.d1,
            d2: self.d2,
            d3: n,
            data,
        })
    }
}

impl fmt::Display for Tensor3 {
    /// Each slice as a labelled block, blank line between slices
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plane = self.d2 * self.d3;
        for d in 0..self.d1 {
            writeln!(f, "Slice {d}:")?;
            for j in 0..self.d2 {
                let row = &self.data[d * plane + j * self.d3..d * plane + (j + 1) * self.d3];
                for (k, value) in row.iter().enumerate() {
                    if k > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{value}")?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tensor3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor3")
            .field("dims", &(self.d1, self.d2, self.d3))
            .field("data", &self.data)
            .finish()
    }
}
