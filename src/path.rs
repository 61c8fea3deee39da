//! Warping path types and the compact per-cell predecessor codes.

/// A single step of a warping path, pairing index `x` in series A with index
/// `y` in series B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpingStep {
    /// Index into series A.
    pub x: usize,
    /// Index into series B.
    pub y: usize,
}

/// An ordered sequence of index pairs from the chosen start cell to the
/// chosen end cell, monotonically non-decreasing in both coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarpingPath(Vec<WarpingStep>);

impl WarpingPath {
    pub(crate) fn new(steps: Vec<WarpingStep>) -> Self {
        Self(steps)
    }

    /// Return the steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpingStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a WarpingPath {
    type Item = &'a WarpingStep;
    type IntoIter = std::slice::Iter<'a, WarpingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How the optimal path advances from one cell toward increasing indices.
///
/// A leap encodes the whole canonical multi-step move of the
/// slope-constrained recurrence: `k` same-axis unit steps followed by the
/// configured number of diagonal steps. Storing `(direction, k)` instead of
/// the expanded step list keeps the per-cell footprint fixed; the walk
/// expands it on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    /// One step `(Δx, Δy) = (1, 1)`.
    Diagonal,
    /// One step `(1, 0)`.
    Down,
    /// One step `(0, 1)`.
    Right,
    /// `k` steps `(1, 0)` then `diagonal` steps `(1, 1)`.
    LeapDown(usize),
    /// `k` steps `(0, 1)` then `diagonal` steps `(1, 1)`.
    LeapRight(usize),
}

impl Move {
    /// Append the unit steps of this move to `out` as `(Δx, Δy)` pairs.
    /// `diagonal` is the slope constraint's forced diagonal step count
    /// (irrelevant for single-step moves).
    pub(crate) fn expand(self, diagonal: usize, out: &mut Vec<(usize, usize)>) {
        match self {
            Self::Diagonal => out.push((1, 1)),
            Self::Down => out.push((1, 0)),
            Self::Right => out.push((0, 1)),
            Self::LeapDown(k) => {
                for _ in 0..k {
                    out.push((1, 0));
                }
                for _ in 0..diagonal {
                    out.push((1, 1));
                }
            }
            Self::LeapRight(k) => {
                for _ in 0..k {
                    out.push((0, 1));
                }
                for _ in 0..diagonal {
                    out.push((1, 1));
                }
            }
        }
    }
}
