use fractalgrid_core::{validate_max_iterations, ComplexPoint, FractalError};

/// Escape time of a single Mandelbrot parameter.
///
/// The orbit is seeded at the parameter itself (`z₀ = c`), so a point already
/// outside the bailout radius escapes at iteration 0. Otherwise returns the
/// first `i` in `1..=max_iterations` where `|z_i| > 2`, or `None` if the orbit
/// stays bounded for the whole cap.
///
/// This is the reference the grid evaluators agree with cell by cell.
/// `c` must be finite: a NaN orbit never compares greater than the bailout
/// radius and would report `None`. Use [`escape_time_checked`] for untrusted input.
pub fn escape_time(c: ComplexPoint, max_iterations: u32) -> Option<u32> {
    orbit_escape_time(c, c, max_iterations)
}

/// [`escape_time`] with the iteration cap and the finiteness of `c` validated first.
pub fn escape_time_checked(
    c: ComplexPoint,
    max_iterations: u32,
) -> Result<Option<u32>, FractalError> {
    validate_max_iterations(max_iterations)?;
    if !c.is_finite() {
        return Err(FractalError::NonFiniteCoordinate { re: c.re, im: c.im });
    }
    Ok(escape_time(c, max_iterations))
}

/// Escape time of a single Julia seed `z0` under the fixed parameter `c`.
pub fn julia_escape_time(z0: ComplexPoint, c: ComplexPoint, max_iterations: u32) -> Option<u32> {
    orbit_escape_time(z0, c, max_iterations)
}

fn orbit_escape_time(z0: ComplexPoint, c: ComplexPoint, max_iterations: u32) -> Option<u32> {
    if z0.escaped() {
        return Some(0);
    }

    let mut z = z0;
    for i in 1..=max_iterations {
        z = z.square_add(&c);
        if z.escaped() {
            return Some(i);
        }
    }
    None
}
