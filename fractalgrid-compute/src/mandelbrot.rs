use crate::cancellation::{CancellationChecker, NeverCancel};
use fractalgrid_core::{
    validate_max_iterations, ComplexGrid, EscapeTimeArray, FractalError, IntensityArray,
    BAILOUT_RADIUS_SQ,
};
use log::{debug, trace};

/// Orbit components are clamped to this magnitude once they pass it.
///
/// Any component this large has already escaped, and `2 * 1e20` stays far
/// inside f64 range, so squaring a clamped value never produces inf/NaN.
pub const COMPONENT_LIMIT: f64 = 1e10;

#[inline]
fn clamp_component(x: f64) -> f64 {
    if x.abs() > COMPONENT_LIMIT {
        COMPONENT_LIMIT.copysign(x)
    } else {
        x
    }
}

/// Escape time of every grid cell, each cell being the Mandelbrot parameter `c`.
pub fn mandelbrot_escape_times(
    grid: &ComplexGrid,
    max_iterations: u32,
) -> Result<EscapeTimeArray, FractalError> {
    mandelbrot_escape_times_cancellable(grid, max_iterations, &NeverCancel)
}

/// Greyscale intensity of every grid cell. Non-escaping cells are `0.0`.
pub fn mandelbrot_intensity(
    grid: &ComplexGrid,
    max_iterations: u32,
) -> Result<IntensityArray, FractalError> {
    Ok(mandelbrot_escape_times(grid, max_iterations)?.to_intensity())
}

/// Evaluate the whole grid one iteration at a time.
///
/// Orbit state is kept as separate real/imaginary arrays starting at zero.
/// Step 0 produces `z = c`, so a cell outside the bailout radius escapes at 0
/// and later steps line up with [`crate::escape_time()`]. Only the first escape
/// of a cell is recorded. Orbits keep advancing after escape; their components
/// are clamped to [`COMPONENT_LIMIT`] so they stay finite.
///
/// `cancel` is polled before every iteration. A cancelled run returns
/// [`FractalError::Cancelled`] and no array.
pub fn mandelbrot_escape_times_cancellable<C>(
    grid: &ComplexGrid,
    max_iterations: u32,
    cancel: &C,
) -> Result<EscapeTimeArray, FractalError>
where
    C: CancellationChecker + ?Sized,
{
    validate_max_iterations(max_iterations)?;

    let (rows, cols) = grid.shape();
    let len = grid.len();
    let (c_re, c_im): (Vec<f64>, Vec<f64>) = grid.points().map(|c| (c.re, c.im)).unzip();

    let mut z_re = vec![0.0_f64; len];
    let mut z_im = vec![0.0_f64; len];

    let not_escaped = max_iterations + 1;
    let mut escape_time = vec![not_escaped; len];
    let mut remaining = len;

    for iteration in 0..=max_iterations {
        if remaining == 0 {
            break;
        }
        cancel.check(iteration)?;

        let mut newly_escaped = 0usize;
        for i in 0..len {
            let zr = z_re[i];
            let zi = z_im[i];
            let next_re = zr * zr - zi * zi + c_re[i];
            let next_im = 2.0 * zr * zi + c_im[i];

            // Non-finite cells count as escaped; the comparison is skipped for them.
            let escaped = if next_re.is_finite() && next_im.is_finite() {
                next_re * next_re + next_im * next_im > BAILOUT_RADIUS_SQ
            } else {
                true
            };

            if escaped && escape_time[i] == not_escaped {
                escape_time[i] = iteration;
                newly_escaped += 1;
            }

            z_re[i] = clamp_component(next_re);
            z_im[i] = clamp_component(next_im);
        }

        remaining -= newly_escaped;
        trace!(
            "mandelbrot iteration {}: {} escaped, {} remaining",
            iteration,
            newly_escaped,
            remaining
        );
    }

    debug!(
        "mandelbrot {}x{} at {} iterations: {} of {} cells escaped",
        rows,
        cols,
        max_iterations,
        len - remaining,
        len
    );

    EscapeTimeArray::from_raw(rows, cols, max_iterations, escape_time)
}
