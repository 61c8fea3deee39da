//! Engine configuration: distance measure, boundary conditions, and path
//! constraints.

use crate::constraint::{BandConstraint, SlopeConstraint};
use crate::measure::DistanceMeasure;

/// Configuration for a [`Dtw`](crate::Dtw) engine.
///
/// Construct via [`DtwConfig::new`], then chain `with_*` methods to override
/// defaults.
///
/// # Defaults
///
/// | Parameter | Default |
/// |---|---|
/// | `measure` | [`DistanceMeasure::Manhattan`] |
/// | `boundary_start` | `true` (path starts at `(0, 0)`) |
/// | `boundary_end` | `true` (path ends at `(x_len−1, y_len−1)`) |
/// | `slope` | `None` (no local slope limit) |
/// | `band` | [`BandConstraint::Unconstrained`] |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DtwConfig {
    measure: DistanceMeasure,
    boundary_start: bool,
    boundary_end: bool,
    slope: Option<SlopeConstraint>,
    band: BandConstraint,
}

impl DtwConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            measure: DistanceMeasure::default(),
            boundary_start: true,
            boundary_end: true,
            slope: None,
            band: BandConstraint::default(),
        }
    }

    /// Set the distance measure combining per-variable contributions.
    #[must_use]
    pub fn with_measure(mut self, measure: DistanceMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Set whether the path must start exactly at `(0, 0)`. When `false`,
    /// the path may start anywhere along row 0 or column 0 and the cheapest
    /// such start is chosen.
    #[must_use]
    pub fn with_boundary_start(mut self, boundary_start: bool) -> Self {
        self.boundary_start = boundary_start;
        self
    }

    /// Set whether the path must end exactly at `(x_len−1, y_len−1)`. When
    /// `false`, the path may end anywhere along the far edges.
    #[must_use]
    pub fn with_boundary_end(mut self, boundary_end: bool) -> Self {
        self.boundary_end = boundary_end;
        self
    }

    /// Set the local slope constraint.
    #[must_use]
    pub fn with_slope(mut self, slope: SlopeConstraint) -> Self {
        self.slope = Some(slope);
        self
    }

    /// Set the global band constraint.
    #[must_use]
    pub fn with_band(mut self, band: BandConstraint) -> Self {
        self.band = band;
        self
    }

    /// Return the distance measure.
    #[must_use]
    pub fn measure(&self) -> DistanceMeasure {
        self.measure
    }

    /// Return whether the path start is pinned to `(0, 0)`.
    #[must_use]
    pub fn boundary_start(&self) -> bool {
        self.boundary_start
    }

    /// Return whether the path end is pinned to `(x_len−1, y_len−1)`.
    #[must_use]
    pub fn boundary_end(&self) -> bool {
        self.boundary_end
    }

    /// Return the slope constraint, if one is configured.
    #[must_use]
    pub fn slope(&self) -> Option<SlopeConstraint> {
        self.slope
    }

    /// Return the band constraint.
    #[must_use]
    pub fn band(&self) -> BandConstraint {
        self.band
    }
}

impl Default for DtwConfig {
    fn default() -> Self {
        Self::new()
    }
}
