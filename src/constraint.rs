//! Global band and local slope constraints on the warping path.

use crate::error::DtwError;

/// Global constraint on how far the warping path may deviate from the
/// diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandConstraint {
    /// No constraint — the full grid is admissible.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band with the given maximum index shift.
    ///
    /// For sequences of unequal length the band is widened asymmetrically by
    /// the length difference on the side of the longer series, so the
    /// diagonal band still reaches both corners.
    SakoeChiba(usize),
}

impl BandConstraint {
    /// Return true when cell `(i, j)` falls outside the admissible band for
    /// an `x_len × y_len` alignment grid and must be pruned.
    ///
    /// The `|x_len − y_len|` slack is granted to whichever leg runs along the
    /// longer series: with `x_len ≥ y_len` the `i − j` leg, otherwise the
    /// `j − i` leg.
    #[must_use]
    pub fn excludes(&self, i: usize, j: usize, x_len: usize, y_len: usize) -> bool {
        match *self {
            Self::Unconstrained => false,
            Self::SakoeChiba(max_shift) => {
                let diff = x_len.abs_diff(y_len);
                if x_len >= y_len {
                    (j > i && j - i > max_shift) || (i > j && i - j > max_shift + diff)
                } else {
                    (j > i && j - i > max_shift + diff) || (i > j && i - j > max_shift)
                }
            }
        }
    }
}

/// Local slope constraint: after at most `aside` consecutive moves along one
/// axis the path must advance `diagonal` diagonal steps, yielding an
/// Itakura-parallelogram-shaped admissible region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlopeConstraint {
    diagonal: usize,
    aside: usize,
}

impl SlopeConstraint {
    /// Create a slope constraint from the diagonal and aside step counts.
    ///
    /// Both values are always specified together; an absent constraint is
    /// expressed by leaving [`DtwConfig::with_slope`](crate::DtwConfig::with_slope)
    /// uncalled.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::SlopeDiagonalZero`] | `diagonal` is zero |
    pub fn new(diagonal: usize, aside: usize) -> Result<Self, DtwError> {
        if diagonal == 0 {
            return Err(DtwError::SlopeDiagonalZero);
        }
        Ok(Self { diagonal, aside })
    }

    /// Return the number of forced diagonal steps.
    #[must_use]
    pub fn diagonal(&self) -> usize {
        self.diagonal
    }

    /// Return the maximum number of consecutive same-axis steps.
    #[must_use]
    pub fn aside(&self) -> usize {
        self.aside
    }

    /// Return how far past the grid edge the recurrence looks ahead, which is
    /// also the sentinel padding added to both matrix dimensions.
    #[must_use]
    pub fn lookahead(&self) -> usize {
        self.diagonal + self.aside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_excludes_nothing() {
        let band = BandConstraint::Unconstrained;
        assert!(!band.excludes(0, 99, 100, 100));
        assert!(!band.excludes(99, 0, 100, 100));
    }

    #[test]
    fn equal_lengths_symmetric_band() {
        let band = BandConstraint::SakoeChiba(2);
        assert!(!band.excludes(5, 7, 10, 10));
        assert!(band.excludes(5, 8, 10, 10));
        assert!(!band.excludes(7, 5, 10, 10));
        assert!(band.excludes(8, 5, 10, 10));
    }

    #[test]
    fn zero_shift_is_diagonal_only() {
        let band = BandConstraint::SakoeChiba(0);
        assert!(!band.excludes(3, 3, 5, 5));
        assert!(band.excludes(3, 4, 5, 5));
        assert!(band.excludes(4, 3, 5, 5));
    }

    #[test]
    fn longer_x_widens_i_leg() {
        // x_len 8, y_len 5, diff 3, max_shift 1: i - j may reach 4.
        let band = BandConstraint::SakoeChiba(1);
        assert!(!band.excludes(7, 3, 8, 5));
        assert!(band.excludes(7, 2, 8, 5));
        // j - i stays tight.
        assert!(!band.excludes(2, 3, 8, 5));
        assert!(band.excludes(2, 4, 8, 5));
    }

    #[test]
    fn longer_y_widens_j_leg() {
        let band = BandConstraint::SakoeChiba(1);
        assert!(!band.excludes(3, 7, 5, 8));
        assert!(band.excludes(2, 7, 5, 8));
        assert!(!band.excludes(3, 2, 5, 8));
        assert!(band.excludes(4, 2, 5, 8));
    }

    #[test]
    fn corners_always_inside_feasible_band() {
        // The asymmetric widening must keep both corners admissible.
        let band = BandConstraint::SakoeChiba(0);
        assert!(!band.excludes(0, 0, 7, 4));
        assert!(!band.excludes(6, 3, 7, 4));
        assert!(!band.excludes(0, 0, 4, 7));
        assert!(!band.excludes(3, 6, 4, 7));
    }

    #[test]
    fn slope_rejects_zero_diagonal() {
        let result = SlopeConstraint::new(0, 2);
        assert!(matches!(result, Err(DtwError::SlopeDiagonalZero)));
    }

    #[test]
    fn slope_accessors_and_lookahead() {
        let slope = SlopeConstraint::new(2, 3).unwrap();
        assert_eq!(slope.diagonal(), 2);
        assert_eq!(slope.aside(), 3);
        assert_eq!(slope.lookahead(), 5);
    }

    #[test]
    fn slope_zero_aside_allowed() {
        // aside = 0 forces a strictly diagonal path.
        let slope = SlopeConstraint::new(1, 0).unwrap();
        assert_eq!(slope.lookahead(), 1);
    }
}
