//! Sequence preprocessing transforms applied per variable before distance
//! computation.

use std::fmt;

use crate::error::PreprocessError;

/// A stateless transform applied to a raw sequence before local distances are
/// computed. Closed set; dispatched by match rather than trait objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preprocessor {
    /// Return the sequence unchanged.
    Identity,

    /// Subtract the arithmetic mean from every value.
    Centralization,

    /// Linearly rescale so the sequence minimum maps to `min` and the maximum
    /// maps to `max`. The conventional range is `[0, 1]`, available via
    /// [`Preprocessor::unit_normalization`].
    Normalization {
        /// Lower bound of the target range.
        min: f64,
        /// Upper bound of the target range.
        max: f64,
    },

    /// Subtract the mean and divide by the sample standard deviation
    /// (Bessel-corrected, n−1 divisor).
    Standardization,
}

impl Preprocessor {
    /// Min-max normalization onto the conventional `[0, 1]` range.
    #[must_use]
    pub fn unit_normalization() -> Self {
        Self::Normalization { min: 0.0, max: 1.0 }
    }

    /// Apply the transform, producing a new sequence of equal length.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`PreprocessError::ConstantSequence`] | Normalization of a zero-range sequence, or standardization of a zero-variance sequence |
    /// | [`PreprocessError::TooShort`] | Standardization of a sequence with fewer than 2 values |
    #[must_use = "returns a new sequence; the input is unchanged"]
    pub fn apply(&self, data: &[f64]) -> Result<Vec<f64>, PreprocessError> {
        match *self {
            Self::Identity => Ok(data.to_vec()),
            Self::Centralization => {
                let mean = mean(data);
                Ok(data.iter().map(|&x| x - mean).collect())
            }
            Self::Normalization { min, max } => {
                let data_min = data.iter().cloned().fold(f64::INFINITY, f64::min);
                let data_max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                if data_max == data_min {
                    return Err(PreprocessError::ConstantSequence {
                        len: data.len(),
                        value: data[0],
                    });
                }
                let factor = (max - min) / (data_max - data_min);
                Ok(data.iter().map(|&x| (x - data_min) * factor + min).collect())
            }
            Self::Standardization => {
                let n = data.len();
                if n < 2 {
                    return Err(PreprocessError::TooShort { len: n });
                }
                let mean = mean(data);
                let std_dev = (data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>()
                    / (n - 1) as f64)
                    .sqrt();
                if std_dev == 0.0 {
                    return Err(PreprocessError::ConstantSequence {
                        len: n,
                        value: data[0],
                    });
                }
                Ok(data.iter().map(|&x| (x - mean) / std_dev).collect())
            }
        }
    }
}

impl fmt::Display for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "None"),
            Self::Centralization => write!(f, "Centralization"),
            Self::Normalization { .. } => write!(f, "Normalization"),
            Self::Standardization => write!(f, "Standardization"),
        }
    }
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}
