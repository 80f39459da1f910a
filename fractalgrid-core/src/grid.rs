//! Sample grid construction.
//!
//! A grid is the cartesian product of a real axis (columns, ascending) and an
//! imaginary axis (rows, descending). Both axes are half-open: the top-left
//! corner is the first sample, the bottom-right corner is never sampled.

use crate::{ComplexPoint, FractalError};
use serde::Serialize;

/// Largest number of samples along one axis.
pub const MAX_AXIS_LEN: usize = 1 << 24;

/// Largest number of cells in one grid.
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Number of samples in the half-open interval `[start, start + span)` at the given step.
///
/// Inverted or empty intervals yield zero samples. Kept in f64 so an
/// oversized count can be rejected before it is cast.
fn axis_len(span: f64, step: f64) -> f64 {
    if span > 0.0 {
        (span / step).ceil()
    } else {
        0.0
    }
}

/// Validate grid inputs and compute `(rows, cols)` without allocating.
pub(crate) fn grid_dimensions(
    top_left: ComplexPoint,
    bottom_right: ComplexPoint,
    step: f64,
) -> Result<(usize, usize), FractalError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(FractalError::InvalidStep { step });
    }
    for corner in [top_left, bottom_right] {
        if !corner.is_finite() {
            return Err(FractalError::NonFiniteCoordinate {
                re: corner.re,
                im: corner.im,
            });
        }
    }

    let rows = axis_len(top_left.im - bottom_right.im, step);
    let cols = axis_len(bottom_right.re - top_left.re, step);
    // `as u64` saturates, so infinite counts report as u64::MAX
    let too_large = FractalError::GridTooLarge {
        rows: rows as u64,
        cols: cols as u64,
    };

    let limit = MAX_AXIS_LEN as f64;
    if rows > limit || cols > limit {
        return Err(too_large);
    }
    let (rows, cols) = (rows as usize, cols as usize);
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_GRID_CELLS => Ok((rows, cols)),
        _ => Err(too_large),
    }
}

/// Immutable 2D array of complex sample points, row-major.
///
/// Only the two axes are stored; `(row, col)` is `real[col] + i*imag[row]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComplexGrid {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl ComplexGrid {
    pub fn rows(&self) -> usize {
        self.imag.len()
    }

    pub fn cols(&self) -> usize {
        self.real.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Real coordinate of each column, ascending.
    pub fn real_axis(&self) -> &[f64] {
        &self.real
    }

    /// Imaginary coordinate of each row, descending.
    pub fn imag_axis(&self) -> &[f64] {
        &self.imag
    }

    pub fn get(&self, row: usize, col: usize) -> Option<ComplexPoint> {
        let im = *self.imag.get(row)?;
        let re = *self.real.get(col)?;
        Some(ComplexPoint::new(re, im))
    }

    /// All cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = ComplexPoint> + '_ {
        self.imag
            .iter()
            .flat_map(move |&im| self.real.iter().map(move |&re| ComplexPoint::new(re, im)))
    }

    /// Whether `point` is exactly one of the grid's samples.
    pub fn contains(&self, point: ComplexPoint) -> bool {
        self.real.contains(&point.re) && self.imag.contains(&point.im)
    }

    /// Locate the cell holding exactly `point`.
    pub fn position(&self, point: ComplexPoint) -> Option<(usize, usize)> {
        let row = self.imag.iter().position(|&im| im == point.im)?;
        let col = self.real.iter().position(|&re| re == point.re)?;
        Some((row, col))
    }
}

/// Build the grid of samples covering `[top_left, bottom_right)` at spacing `step`.
///
/// Coordinates are computed as `start ± k*step` rather than accumulated, so the
/// last sample carries no drift. Inverted corners give an empty dimension, not
/// an error. Grids beyond [`MAX_AXIS_LEN`] samples per axis or
/// [`MAX_GRID_CELLS`] cells fail with `GridTooLarge` before anything is allocated.
pub fn build_grid(
    top_left: ComplexPoint,
    bottom_right: ComplexPoint,
    step: f64,
) -> Result<ComplexGrid, FractalError> {
    let (rows, cols) = grid_dimensions(top_left, bottom_right, step)?;

    let real = (0..cols).map(|k| top_left.re + k as f64 * step).collect();
    let imag = (0..rows).map(|k| top_left.im - k as f64 * step).collect();

    Ok(ComplexGrid { real, imag })
}
