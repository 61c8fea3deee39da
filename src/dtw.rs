//! The DTW engine: constrained dynamic-programming alignment of two
//! (possibly multivariate) series.

use std::cell::OnceCell;

use tracing::{debug, instrument};

use crate::config::DtwConfig;
use crate::constraint::SlopeConstraint;
use crate::error::DtwError;
use crate::matrix::Matrix;
use crate::measure::DistanceMeasure;
use crate::path::{Move, WarpingPath, WarpingStep};
use crate::series::SeriesVariable;

/// Dynamic time warping engine for one alignment problem.
///
/// Inputs are validated and preprocessed once at construction and are
/// immutable afterwards. The distance and cost matrices are computed lazily
/// on the first accessor call and memoized for the lifetime of the engine,
/// so repeated queries are cheap and guaranteed identical.
///
/// The engine is single-threaded by design; the interior memoization cell is
/// not `Sync`, so sharing across threads requires external synchronization
/// or eager computation followed by read-only access to the extracted
/// results.
#[derive(Debug)]
pub struct Dtw {
    variables: Vec<SeriesVariable>,
    config: DtwConfig,
    x_len: usize,
    y_len: usize,
    pad: usize,
    series_a: Vec<Vec<f64>>,
    series_b: Vec<Vec<f64>>,
    weights: Vec<f64>,
    state: OnceCell<Computed>,
}

#[derive(Debug)]
struct Computed {
    distances: Matrix,
    costs: Matrix,
    /// Chosen predecessor move per real cell, row-major `x_len × y_len`.
    /// `None` marks terminal seeds and pruned cells.
    moves: Vec<Option<Move>>,
}

impl Dtw {
    /// Create an engine for a collection of series variables.
    ///
    /// All per-variable series A sequences must share one length, and
    /// likewise for series B; the two lengths may differ, producing an
    /// `x_len × y_len` alignment problem. Preprocessors run here, once per
    /// series, so preprocessing failures surface before any computation.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::NoVariables`] | `variables` is empty |
    /// | [`DtwError::SeriesALengthMismatch`] | A variable's series A length differs from the first variable's |
    /// | [`DtwError::SeriesBLengthMismatch`] | A variable's series B length differs from the first variable's |
    /// | [`DtwError::Preprocess`] | A preprocessor fails (zero range, zero variance, too short) |
    pub fn new(variables: Vec<SeriesVariable>, config: DtwConfig) -> Result<Self, DtwError> {
        if variables.is_empty() {
            return Err(DtwError::NoVariables);
        }

        let x_len = variables[0].raw_a().len();
        let y_len = variables[0].raw_b().len();
        for (index, variable) in variables.iter().enumerate() {
            if variable.raw_a().len() != x_len {
                return Err(DtwError::SeriesALengthMismatch {
                    variable: index,
                    expected: x_len,
                    found: variable.raw_a().len(),
                });
            }
            if variable.raw_b().len() != y_len {
                return Err(DtwError::SeriesBLengthMismatch {
                    variable: index,
                    expected: y_len,
                    found: variable.raw_b().len(),
                });
            }
        }

        let mut series_a = Vec::with_capacity(variables.len());
        let mut series_b = Vec::with_capacity(variables.len());
        let mut weights = Vec::with_capacity(variables.len());
        for (index, variable) in variables.iter().enumerate() {
            let wrap = |source| DtwError::Preprocess {
                variable: index,
                source,
            };
            series_a.push(variable.effective_a().map_err(wrap)?.into_owned());
            series_b.push(variable.effective_b().map_err(wrap)?.into_owned());
            weights.push(variable.weight());
        }

        let pad = config.slope().map_or(1, |slope| slope.lookahead());

        Ok(Self {
            variables,
            config,
            x_len,
            y_len,
            pad,
            series_a,
            series_b,
            weights,
            state: OnceCell::new(),
        })
    }

    /// Convenience constructor for a single unnamed, unweighted variable.
    ///
    /// # Errors
    ///
    /// Propagates sequence validation failures from
    /// [`SeriesVariable::new`] and everything [`Dtw::new`] raises.
    pub fn from_series(a: Vec<f64>, b: Vec<f64>, config: DtwConfig) -> Result<Self, DtwError> {
        Self::new(vec![SeriesVariable::new(a, b)?], config)
    }

    /// Return the length of series A.
    #[must_use]
    pub fn x_len(&self) -> usize {
        self.x_len
    }

    /// Return the length of series B.
    #[must_use]
    pub fn y_len(&self) -> usize {
        self.y_len
    }

    /// Return the input variables.
    #[must_use]
    pub fn variables(&self) -> &[SeriesVariable] {
        &self.variables
    }

    /// Return the engine configuration.
    #[must_use]
    pub fn config(&self) -> &DtwConfig {
        &self.config
    }

    /// Return the minimum warping cost, computing the matrices on first call.
    ///
    /// With a closed start boundary this is the cumulative cost at `(0, 0)`;
    /// with an open start it is the cheapest cumulative cost found along row
    /// 0 and column 0. The result is `+∞` when the configured constraints
    /// admit no path at all.
    #[must_use]
    pub fn cost(&self) -> f64 {
        let costs = &self.computed().costs;
        if self.config.boundary_start() {
            return costs.get(0, 0);
        }
        self.edge_start(costs).1
    }

    /// Return the optimal warping path, computing the matrices on first call.
    ///
    /// The path starts at `(0, 0)` (closed start) or at the cheapest edge
    /// cell (open start, row scanned before column, first-seen tie win), and
    /// stops at the far corner (closed end) or as soon as either index
    /// reaches its maximum (open end). Start and end cells are always
    /// included.
    ///
    /// # Panics
    ///
    /// Panics if the configured band/slope combination admits no path from
    /// the start cell — the same configurations for which [`Dtw::cost`]
    /// returns `+∞`. Feasibility is deliberately not pre-validated.
    #[must_use]
    pub fn path(&self) -> WarpingPath {
        let computed = self.computed();
        let (mut x, mut y) = if self.config.boundary_start() {
            (0, 0)
        } else {
            self.edge_start(&computed.costs).0
        };
        let diagonal = self.config.slope().map_or(0, |slope| slope.diagonal());

        let mut steps = vec![WarpingStep { x, y }];
        let mut expansion = Vec::new();
        while !self.at_terminus(x, y) {
            let mv = match computed.moves[x * self.y_len + y] {
                Some(mv) => mv,
                None => panic!(
                    "no admissible warping path from cell ({x}, {y}) \
                     under the configured constraints"
                ),
            };
            expansion.clear();
            mv.expand(diagonal, &mut expansion);
            for &(dx, dy) in &expansion {
                x += dx;
                y += dy;
                steps.push(WarpingStep { x, y });
            }
        }
        WarpingPath::new(steps)
    }

    /// Return the local-distance matrix, including the sentinel pad region
    /// beyond `x_len × y_len`.
    #[must_use]
    pub fn distance_matrix(&self) -> &Matrix {
        &self.computed().distances
    }

    /// Return the cumulative-cost matrix, including the sentinel pad region.
    #[must_use]
    pub fn cost_matrix(&self) -> &Matrix {
        &self.computed().costs
    }

    fn computed(&self) -> &Computed {
        self.state.get_or_init(|| self.compute())
    }

    /// Scan row 0 then column 0 for the cheapest start cell. Strict
    /// comparison keeps the first cell encountered on ties.
    fn edge_start(&self, costs: &Matrix) -> ((usize, usize), f64) {
        let mut best = (0, 0);
        let mut best_cost = costs.get(0, 0);
        for j in 1..self.y_len {
            if costs.get(0, j) < best_cost {
                best_cost = costs.get(0, j);
                best = (0, j);
            }
        }
        for i in 1..self.x_len {
            if costs.get(i, 0) < best_cost {
                best_cost = costs.get(i, 0);
                best = (i, 0);
            }
        }
        (best, best_cost)
    }

    fn at_terminus(&self, x: usize, y: usize) -> bool {
        if self.config.boundary_end() {
            x == self.x_len - 1 && y == self.y_len - 1
        } else {
            x == self.x_len - 1 || y == self.y_len - 1
        }
    }

    #[instrument(
        skip(self),
        fields(
            x_len = self.x_len,
            y_len = self.y_len,
            variables = self.variables.len(),
            pad = self.pad,
        )
    )]
    fn compute(&self) -> Computed {
        let rows = self.x_len + self.pad;
        let cols = self.y_len + self.pad;
        let mut distances = Matrix::zeroed(rows, cols);
        let mut costs = Matrix::zeroed(rows, cols);

        // Sentinel band: every pad row and pad column is infinite cost so the
        // recurrence lookahead falls off the grid cleanly. Distance pad cells
        // stay zero; the slope lookahead sums them as empty contributions.
        for extra in 1..=self.pad {
            let row = self.x_len - 1 + extra;
            for j in 0..cols {
                costs.set(row, j, f64::INFINITY);
            }
            let col = self.y_len - 1 + extra;
            for i in 0..rows {
                costs.set(i, col, f64::INFINITY);
            }
        }

        self.fill_distances(&mut distances);

        let mut moves = vec![None; self.x_len * self.y_len];
        match self.config.slope() {
            None => self.fill_costs(&mut costs, &distances, &mut moves),
            Some(slope) => self.fill_costs_sloped(slope, &mut costs, &distances, &mut moves),
        }

        debug!(corner_cost = costs.get(0, 0), "alignment matrices computed");
        Computed {
            distances,
            costs,
            moves,
        }
    }

    /// Accumulate local distances variable by variable over the real region.
    fn fill_distances(&self, distances: &mut Matrix) {
        let measure = self.config.measure();
        for ((a, b), &weight) in self
            .series_a
            .iter()
            .zip(&self.series_b)
            .zip(&self.weights)
        {
            for i in 0..self.x_len {
                let x_val = a[i];
                for j in 0..self.y_len {
                    let delta = x_val - b[j];
                    match measure {
                        DistanceMeasure::Manhattan => {
                            distances.add(i, j, delta.abs() * weight);
                        }
                        DistanceMeasure::Maximum => {
                            distances.max_in_place(i, j, delta.abs() * weight);
                        }
                        DistanceMeasure::Euclidean | DistanceMeasure::SquaredEuclidean => {
                            let weighted = delta * weight;
                            distances.add(i, j, weighted * weighted);
                        }
                    }
                }
            }
        }

        // The root is taken only after all variables are summed.
        if measure == DistanceMeasure::Euclidean {
            for i in 0..self.x_len {
                for j in 0..self.y_len {
                    let value = distances.get(i, j).sqrt();
                    distances.set(i, j, value);
                }
            }
        }
    }

    /// Backward recurrence without a slope limit. Cell `(i, j)` depends only
    /// on `(i+1, j)`, `(i, j+1)` and `(i+1, j+1)`, so rows are filled from
    /// high indices to low.
    fn fill_costs(&self, costs: &mut Matrix, distances: &Matrix, moves: &mut [Option<Move>]) {
        let band = self.config.band();
        let corner_edge = self.x_len as i64 - self.y_len as i64;

        for i in (0..self.x_len).rev() {
            for j in (0..self.y_len).rev() {
                if band.excludes(i, j, self.x_len, self.y_len) {
                    costs.set(i, j, f64::INFINITY);
                    continue;
                }

                let diag = costs.get(i + 1, j + 1);
                let down = costs.get(i + 1, j);
                let right = costs.get(i, j + 1);
                let local = distances.get(i, j);

                if diag.is_infinite()
                    && (!self.config.boundary_end() || i as i64 - j as i64 == corner_edge)
                {
                    // Terminal seed: the path ends here at just its local cost.
                    costs.set(i, j, local);
                    continue;
                }

                let (chosen, mv) = if diag <= down && diag <= right {
                    (diag, Move::Diagonal)
                } else if down <= right {
                    (down, Move::Down)
                } else {
                    (right, Move::Right)
                };
                if chosen.is_infinite() {
                    // No admissible continuation; leave the move unset so a
                    // path walk cannot wander through the cell.
                    costs.set(i, j, f64::INFINITY);
                } else {
                    costs.set(i, j, chosen + local);
                    moves[i * self.y_len + j] = Some(mv);
                }
            }
        }
    }

    /// Backward recurrence under an Itakura slope limit. Besides the plain
    /// diagonal neighbour (evaluated first, so it wins ties), each aside
    /// count `k` contributes one leap per axis: `k` same-axis unit steps
    /// followed by `diagonal` forced diagonal steps, scored as the local
    /// distances along the intermediate cells plus the cumulative cost at
    /// the landing cell.
    fn fill_costs_sloped(
        &self,
        slope: SlopeConstraint,
        costs: &mut Matrix,
        distances: &Matrix,
        moves: &mut [Option<Move>],
    ) {
        let band = self.config.band();
        let corner_edge = self.x_len as i64 - self.y_len as i64;
        let diagonal = slope.diagonal();
        let aside = slope.aside();

        for i in (0..self.x_len).rev() {
            for j in (0..self.y_len).rev() {
                if band.excludes(i, j, self.x_len, self.y_len) {
                    costs.set(i, j, f64::INFINITY);
                    continue;
                }

                let mut lowest = costs.get(i + 1, j + 1);
                let mut best = Move::Diagonal;

                for k in 1..=aside {
                    let mut cost_down = 0.0;
                    let mut cost_right = 0.0;
                    for step in 1..=k {
                        cost_down += distances.get(i + step, j);
                        cost_right += distances.get(i, j + step);
                    }
                    for forward in 1..diagonal {
                        cost_down += distances.get(i + k + forward, j + forward);
                        cost_right += distances.get(i + forward, j + k + forward);
                    }
                    cost_down += costs.get(i + k + diagonal, j + diagonal);
                    cost_right += costs.get(i + diagonal, j + k + diagonal);

                    if cost_down < lowest {
                        lowest = cost_down;
                        best = Move::LeapDown(k);
                    }
                    if cost_right < lowest {
                        lowest = cost_right;
                        best = Move::LeapRight(k);
                    }
                }

                let local = distances.get(i, j);
                if lowest.is_infinite() {
                    if !self.config.boundary_end() || i as i64 - j as i64 == corner_edge {
                        costs.set(i, j, local);
                    } else {
                        costs.set(i, j, f64::INFINITY);
                    }
                } else {
                    costs.set(i, j, lowest + local);
                    moves[i * self.y_len + j] = Some(best);
                }
            }
        }
    }
}
