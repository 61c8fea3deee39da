//! Distance measures combining per-variable contributions into one scalar
//! local distance.

use std::fmt;

/// How per-variable distances are aggregated into the local distance for one
/// cell of the alignment grid.
///
/// With per-variable weight `w_v` and difference `Δ_v = A_v[i] − B_v[j]`:
///
/// | Measure | `D[i][j]` |
/// |---|---|
/// | `Manhattan` | `Σ_v w_v·\|Δ_v\|` |
/// | `Euclidean` | `sqrt(Σ_v (w_v·Δ_v)²)` |
/// | `SquaredEuclidean` | `Σ_v (w_v·Δ_v)²` |
/// | `Maximum` | `max_v w_v·\|Δ_v\|` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceMeasure {
    /// L1: sum of weighted absolute differences (default).
    #[default]
    Manhattan,

    /// L2: square root of the sum of squared weighted differences. The root
    /// is applied per cell after all variables are summed.
    Euclidean,

    /// Squared L2: sum of squared weighted differences, no root.
    SquaredEuclidean,

    /// Chebyshev: the largest weighted absolute difference across variables.
    /// The weight is applied before taking the maximum, so a small-weight
    /// variable can still dominate when the others are weighted smaller.
    Maximum,
}

impl fmt::Display for DistanceMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => write!(f, "Manhattan"),
            Self::Euclidean => write!(f, "Euclidean"),
            Self::SquaredEuclidean => write!(f, "SquaredEuclidean"),
            Self::Maximum => write!(f, "Maximum"),
        }
    }
}
