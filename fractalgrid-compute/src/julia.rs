use crate::cancellation::{CancellationChecker, NeverCancel};
use fractalgrid_core::{
    validate_max_iterations, ComplexGrid, ComplexPoint, EscapeTimeArray, FractalError,
    IntensityArray, BAILOUT_RADIUS_SQ,
};
use log::{debug, trace};

/// Escape time of every grid cell, each cell being the orbit seed `z₀` under fixed `c`.
pub fn julia_escape_times(
    grid: &ComplexGrid,
    c: ComplexPoint,
    max_iterations: u32,
) -> Result<EscapeTimeArray, FractalError> {
    julia_escape_times_cancellable(grid, c, max_iterations, &NeverCancel)
}

/// Greyscale intensity of every grid cell. Non-escaping cells are `0.0`.
pub fn julia_intensity(
    grid: &ComplexGrid,
    c: ComplexPoint,
    max_iterations: u32,
) -> Result<IntensityArray, FractalError> {
    Ok(julia_escape_times(grid, c, max_iterations)?.to_intensity())
}

/// Evaluate the whole grid under `z ← z² + c`.
///
/// Iteration 0 tests the seeds themselves, before any step is applied: a seed
/// with `|z₀| > 2` gets escape time 0 and intensity `1.0`. This is one lower
/// than counting the first step as iteration 1, and matches the indexing of
/// [`crate::julia_escape_time()`] and the Mandelbrot evaluator.
///
/// From then on only cells that have not escaped are advanced; an escaped
/// orbit is frozen at its escaping value, which keeps every stored component
/// finite without clamping.
pub fn julia_escape_times_cancellable<C>(
    grid: &ComplexGrid,
    c: ComplexPoint,
    max_iterations: u32,
    cancel: &C,
) -> Result<EscapeTimeArray, FractalError>
where
    C: CancellationChecker + ?Sized,
{
    validate_max_iterations(max_iterations)?;
    if !c.is_finite() {
        return Err(FractalError::NonFiniteCoordinate { re: c.re, im: c.im });
    }

    let (rows, cols) = grid.shape();
    let len = grid.len();
    let (mut z_re, mut z_im): (Vec<f64>, Vec<f64>) =
        grid.points().map(|z| (z.re, z.im)).unzip();

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
            if escape_time[i] != not_escaped {
                continue;
            }

            if iteration > 0 {
                let zr = z_re[i];
                let zi = z_im[i];
                z_re[i] = zr * zr - zi * zi + c.re;
                z_im[i] = 2.0 * zr * zi + c.im;
            }

            let (zr, zi) = (z_re[i], z_im[i]);
            let escaped = if zr.is_finite() && zi.is_finite() {
                zr * zr + zi * zi > BAILOUT_RADIUS_SQ
            } else {
                true
            };

            if escaped {
                escape_time[i] = iteration;
                newly_escaped += 1;
            }
        }

        remaining -= newly_escaped;
        trace!(
            "julia iteration {}: {} escaped, {} remaining",
            iteration,
            newly_escaped,
            remaining
        );
    }

    debug!(
        "julia c={}{:+}i {}x{} at {} iterations: {} of {} cells escaped",
        c.re,
        c.im,
        rows,
        cols,
        max_iterations,
        len - remaining,
        len
    );

    EscapeTimeArray::from_raw(rows, cols, max_iterations, escape_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julia_escape_time;
    use fractalgrid_core::build_grid;

    const DENDRITE: ComplexPoint = ComplexPoint::new(0.0, 1.0);
    const SAN_MARCO: ComplexPoint = ComplexPoint::new(-0.75, 0.0);

    fn square_grid(half: f64, step: f64) -> ComplexGrid {
        build_grid(
            ComplexPoint::new(-half, half),
            ComplexPoint::new(half, -half),
            step,
        )
        .unwrap()
    }

    #[test]
    fn output_shape_matches_grid() {
        let grid = square_grid(1.5, 0.1);
        let intensity = julia_intensity(&grid, SAN_MARCO, 40).unwrap();
        assert_eq!(intensity.shape(), grid.shape());
    }

    #[test]
    fn agrees_with_scalar_evaluator() {
        let grid = square_grid(1.6, 0.04);
        for c in [DENDRITE, SAN_MARCO, ComplexPoint::new(-0.7, 0.27015)] {
            let times = julia_escape_times(&grid, c, 80).unwrap();
            for (idx, z0) in grid.points().enumerate() {
                let (row, col) = (idx / grid.cols(), idx % grid.cols());
                assert_eq!(times.get(row, col), julia_escape_time(z0, c, 80));
            }
        }
    }

    #[test]
    fn zero_parameter_splits_at_radius_two() {
        // With c = 0 the unit disk never escapes and |z0| > 2 escapes before any step.
        let grid = build_grid(
            ComplexPoint::new(-3.0, 0.5),
            ComplexPoint::new(3.5, 0.0),
            0.5,
        )
        .unwrap();

        for n in [2, 10, 100] {
            let intensity = julia_intensity(&grid, ComplexPoint::ZERO, n).unwrap();
            for (z0, &v) in grid.points().zip(intensity.values()) {
                if z0.norm_sq() < 1.0 {
                    assert_eq!(v, 0.0, "{:?} should stay bounded", z0);
                } else if z0.norm_sq() > 4.0 {
                    assert_eq!(v, 1.0, "{:?} should escape immediately", z0);
                }
            }
        }
    }

    #[test]
    fn seeds_outside_radius_escape_before_first_step() {
        let grid = build_grid(
            ComplexPoint::new(2.5, 0.5),
            ComplexPoint::new(3.5, -0.5),
            0.5,
        )
        .unwrap();
        for n in [1, 5, 50] {
            let times = julia_escape_times(&grid, DENDRITE, n).unwrap();
            assert!(times.to_tagged().iter().all(|&e| e == Some(0)));
            assert!(times.to_intensity().values().iter().all(|&v| v == 1.0));
        }
    }

    #[test]
    fn non_finite_parameter_is_rejected() {
        let grid = square_grid(1.0, 0.5);
        assert!(matches!(
            julia_escape_times(&grid, ComplexPoint::new(f64::NAN, 0.0), 10),
            Err(FractalError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn zero_cap_is_rejected() {
        let grid = square_grid(1.0, 0.5);
        assert!(matches!(
            julia_intensity(&grid, DENDRITE, 0),
            Err(FractalError::InvalidIterationCap { .. })
        ));
    }

    #[test]
    fn cancellation_between_iterations() {
        use std::cell::Cell;

        let grid = square_grid(1.0, 0.1);
        let polls = Cell::new(0u32);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > 3
        };
        let result = julia_escape_times_cancellable(&grid, SAN_MARCO, 100, &cancel);
        assert!(matches!(
            result,
            Err(FractalError::Cancelled { iteration: 3 })
        ));
    }
}
