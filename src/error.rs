//! Error types for engine construction and sequence preprocessing.

/// Errors from engine construction and input validation.
///
/// All variants are raised eagerly by [`Dtw::new`](crate::Dtw::new) before
/// any matrix is allocated; a successfully constructed engine never fails.
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// Returned when the variable list is empty.
    #[error("at least one series variable is required")]
    NoVariables,

    /// Returned when a sequence has no values.
    #[error("variable {variable} has an empty sequence")]
    EmptySeries {
        /// Index of the offending variable.
        variable: usize,
    },

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("variable {variable} contains a non-finite value at index {index}")]
    NonFiniteValue {
        /// Index of the offending variable.
        variable: usize,
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when a variable's series A length differs from the first variable's.
    #[error("variable {variable} has series A length {found}, expected {expected}")]
    SeriesALengthMismatch {
        /// Index of the offending variable.
        variable: usize,
        /// Length of the first variable's series A.
        expected: usize,
        /// Length actually found.
        found: usize,
    },

    /// Returned when a variable's series B length differs from the first variable's.
    #[error("variable {variable} has series B length {found}, expected {expected}")]
    SeriesBLengthMismatch {
        /// Index of the offending variable.
        variable: usize,
        /// Length of the first variable's series B.
        expected: usize,
        /// Length actually found.
        found: usize,
    },

    /// Returned when a slope constraint is requested with a zero diagonal step.
    #[error("diagonal slope step must be at least 1")]
    SlopeDiagonalZero,

    /// Wraps a preprocessing failure for one variable.
    #[error("preprocessing failed for variable {variable}: {source}")]
    Preprocess {
        /// Index of the offending variable.
        variable: usize,
        /// The underlying preprocessing error.
        #[source]
        source: PreprocessError,
    },
}

/// Errors from sequence preprocessing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreprocessError {
    /// Returned when a transform needs a non-zero range or variance but all
    /// values are identical.
    #[error("all {len} values equal {value}; range/variance is zero")]
    ConstantSequence {
        /// Sequence length.
        len: usize,
        /// The repeated value.
        value: f64,
    },

    /// Returned when standardization is applied to a sequence with fewer than
    /// two values (the n−1 divisor would be zero).
    #[error("sequence of length {len} is too short to standardize")]
    TooShort {
        /// Sequence length.
        len: usize,
    },
}
