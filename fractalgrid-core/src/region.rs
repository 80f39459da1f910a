use crate::grid::grid_dimensions;
use crate::{build_grid, ComplexGrid, ComplexPoint, FractalError};
use serde::{Deserialize, Serialize};

/// Rectangular region of the complex plane plus sample spacing.
///
/// `top_left` is included in the sampled grid, `bottom_right` is not.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub top_left: ComplexPoint,
    pub bottom_right: ComplexPoint,
    pub step: f64,
}

impl Region {
    pub fn new(top_left: ComplexPoint, bottom_right: ComplexPoint, step: f64) -> Self {
        Self {
            top_left,
            bottom_right,
            step,
        }
    }

    /// Region centered on `center` spanning `width × height` in the plane.
    pub fn centered(center: ComplexPoint, width: f64, height: f64, step: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            top_left: ComplexPoint::new(center.re - half_w, center.im + half_h),
            bottom_right: ComplexPoint::new(center.re + half_w, center.im - half_h),
            step,
        }
    }

    /// Check step, corners and grid size without building the grid.
    pub fn validate(&self) -> Result<(), FractalError> {
        self.dimensions().map(|_| ())
    }

    /// `(rows, cols)` of the grid this region samples to.
    pub fn dimensions(&self) -> Result<(usize, usize), FractalError> {
        grid_dimensions(self.top_left, self.bottom_right, self.step)
    }

    pub fn build_grid(&self) -> Result<ComplexGrid, FractalError> {
        build_grid(self.top_left, self.bottom_right, self.step)
    }
}
