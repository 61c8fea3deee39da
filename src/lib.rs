//! Constrained dynamic time warping for multivariate series.
//!
//! Pure math library — zero I/O. Computes the optimal alignment (cost and
//! warping path) between two possibly multivariate series under a
//! configurable distance measure, Sakoe-Chiba band, Itakura-style slope
//! limit, and open or closed boundary conditions, with per-variable
//! preprocessing and weighting.
//!
//! # Example
//!
//! ```
//! use timewarp::{Dtw, DtwConfig, DistanceMeasure};
//!
//! let config = DtwConfig::new().with_measure(DistanceMeasure::Euclidean);
//! let dtw = Dtw::from_series(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 0.0, 1.0, 2.0, 3.0],
//!     config,
//! )?;
//! assert_eq!(dtw.cost(), 0.0);
//! assert_eq!(dtw.path().len(), 5);
//! # Ok::<(), timewarp::DtwError>(())
//! ```

mod config;
mod constraint;
mod dtw;
mod error;
mod matrix;
mod measure;
mod path;
mod preprocess;
mod series;

pub use config::DtwConfig;
pub use constraint::{BandConstraint, SlopeConstraint};
pub use dtw::Dtw;
pub use error::{DtwError, PreprocessError};
pub use matrix::Matrix;
pub use measure::DistanceMeasure;
pub use path::{WarpingPath, WarpingStep};
pub use preprocess::Preprocessor;
pub use series::SeriesVariable;
