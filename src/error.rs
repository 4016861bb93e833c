//! Error types for densemat

use thiserror::Error;

/// Result type alias using densemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in densemat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-positive, empty, or ragged dimensions supplied at construction
    #[error("Invalid dimension: {reason}")]
    InvalidDimension {
        /// Why the construction input was rejected
        reason: String,
    },

    /// Binary operation invoked on operands with incompatible shapes
    #[error("{op}: dimension mismatch between {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Element access or slice outside valid bounds
    #[error("Index {index:?} out of range for shape {shape:?}")]
    IndexOutOfRange {
        /// The offending indices
        index: Vec<usize>,
        /// Shape of the container being indexed
        shape: Vec<usize>,
    },

    /// Reshape requested with a different total element count
    #[error("Cannot reshape {from:?} into {to:?}: element counts differ")]
    InvalidReshape {
        /// Current shape
        from: Vec<usize>,
        /// Requested shape
        to: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::DimensionMismatch {
            op: "add",
            lhs: vec![2, 2],
            rhs: vec![3, 3],
        };
        assert_eq!(
            err.to_string(),
            "add: dimension mismatch between [2, 2] and [3, 3]"
        );

        let err = Error::IndexOutOfRange {
            index: vec![5, 0],
            shape: vec![2, 3],
        };
        assert_eq!(err.to_string(), "Index [5, 0] out of range for shape [2, 3]");

        let err = Error::InvalidReshape {
            from: vec![2, 2, 2],
            to: vec![3, 3, 1],
        };
        assert_eq!(
            err.to_string(),
            "Cannot reshape [2, 2, 2] into [3, 3, 1]: element counts differ"
        );
    }
}
