//! # densemat
//!
//! **Dense integer matrices and 3D tensors with exact arithmetic.**
//!
//! densemat provides two in-memory containers for a single-process,
//! synchronous caller: a 2-dimensional [`Matrix`] and a 3-dimensional
//! [`Tensor3`], both backed by a single flat buffer with computed row-major
//! offsets.
//!
//! ## Features
//!
//! - **Matrix**: elementwise addition, matrix product, transpose
//! - **Tensor3**: elementwise addition/multiplication, plane extraction into
//!   a `Matrix`, in-place reshape, contraction against a matrix along the
//!   third axis
//! - **Bounds-checked access**: every precondition violation is reported as a
//!   structured [`Error`], never a panic
//! - **Value semantics**: containers own their storage; `Clone` is a deep
//!   copy and results never alias their operands
//!
//! ## Quick Start
//!
//! ```
//! use densemat::{Matrix, Tensor3};
//!
//! let a = Matrix::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]])?;
//! let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]])?;
//! let c = a.matmul(&b)?;
//! assert_eq!(c.as_slice(), &[22, 28, 49, 64]);
//!
//! let t = Tensor3::from_vec(vec![1, 2, 3], 1, 1, 3)?;
//! let contracted = t.contract(&b)?;
//! assert_eq!(contracted.dims(), (1, 1, 2));
//! assert_eq!(contracted.as_slice(), &[22, 28]);
//! # Ok::<(), densemat::Error>(())
//! ```
//!
//! ## Limitations
//!
//! - Elements are `i64`; arithmetic is exact but overflow in `matmul` and
//!   `contract` dot products is not checked
//! - No broadcasting, no sparse storage, no parallel execution
//! - Types are not intended for concurrent mutation of a shared instance;
//!   the deep-copy value semantics exist so each thread can hold its own copy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod matrix;
pub mod tensor3;


pub use error::{Error, Result};
pub use matrix::Matrix;
pub use tensor3::Tensor3;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::tensor3::Tensor3;
}
