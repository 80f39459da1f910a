//! Data types for escape-time fractal evaluation.
//!
//! Coordinates, sample grids, result arrays, configuration and errors. The
//! iteration engines live in `fractalgrid-compute`.

pub mod arrays;
pub mod complex;
pub mod config;
pub mod error;
pub mod grid;
pub mod region;

pub use arrays::{EscapeTimeArray, IntensityArray};
pub use complex::{ComplexPoint, BAILOUT_RADIUS_SQ};
pub use config::{
    get_fractal_config, FractalConfig, FractalKind, RenderParams, FRACTAL_CONFIGS, JULIA_CONFIG,
    MANDELBROT_CONFIG,
};
pub use error::{validate_max_iterations, FractalError};
pub use grid::{build_grid, ComplexGrid};
pub use region::Region;
