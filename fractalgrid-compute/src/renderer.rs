use crate::cancellation::{CancellationChecker, NeverCancel};
use crate::{julia_escape_times_cancellable, mandelbrot_escape_times_cancellable};
use fractalgrid_core::{
    ComplexGrid, ComplexPoint, EscapeTimeArray, FractalError, FractalKind, IntensityArray,
    RenderParams,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Core Renderer Trait
// ============================================================================

/// An escape-time evaluator bound to its fractal parameters.
///
/// Implementations hold no mutable state, so one renderer can be shared across
/// threads and evaluate any number of grids.
pub trait Renderer: dyn_clone::DynClone + Send + Sync {
    /// Matches the `FractalConfig` id of the fractal being rendered.
    fn id(&self) -> &'static str;

    fn max_iterations(&self) -> u32;

    /// Escape time of every cell, polling `cancel` between iterations.
    fn escape_times(
        &self,
        grid: &ComplexGrid,
        cancel: &dyn CancellationChecker,
    ) -> Result<EscapeTimeArray, FractalError>;

    /// Normalized intensity of every cell.
    fn intensity(&self, grid: &ComplexGrid) -> Result<IntensityArray, FractalError> {
        Ok(self.escape_times(grid, &NeverCancel)?.to_intensity())
    }
}

dyn_clone::clone_trait_object!(Renderer);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MandelbrotRenderer {
    max_iterations: u32,
}

impl MandelbrotRenderer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl Renderer for MandelbrotRenderer {
    fn id(&self) -> &'static str {
        "mandelbrot"
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_times(
        &self,
        grid: &ComplexGrid,
        cancel: &dyn CancellationChecker,
    ) -> Result<EscapeTimeArray, FractalError> {
        mandelbrot_escape_times_cancellable(grid, self.max_iterations, cancel)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JuliaRenderer {
    c: ComplexPoint,
    max_iterations: u32,
}

impl JuliaRenderer {
    pub fn new(c: ComplexPoint, max_iterations: u32) -> Self {
        Self { c, max_iterations }
    }

    /// The fixed parameter defining this Julia set.
    pub fn c(&self) -> ComplexPoint {
        self.c
    }
}

impl Renderer for JuliaRenderer {
    fn id(&self) -> &'static str {
        "julia"
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn escape_times(
        &self,
        grid: &ComplexGrid,
        cancel: &dyn CancellationChecker,
    ) -> Result<EscapeTimeArray, FractalError> {
        julia_escape_times_cancellable(grid, self.c, self.max_iterations, cancel)
    }
}

// ============================================================================
// Renderer Factory
// ============================================================================

/// Create the renderer described by `params`.
///
/// Parameters are validated here so a bad request fails before any grid is built.
pub fn create_renderer(params: &RenderParams) -> Result<Box<dyn Renderer>, FractalError> {
    params.validate()?;
    Ok(match params.fractal {
        FractalKind::Mandelbrot => Box::new(MandelbrotRenderer::new(params.max_iterations)),
        FractalKind::Julia { c } => Box::new(JuliaRenderer::new(c, params.max_iterations)),
    })
}

/// Both arrays from one evaluation, shaped like the sampled grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub escape_times: EscapeTimeArray,
    pub intensity: IntensityArray,
}

/// Build the grid for `params` and evaluate it.
pub fn render(params: &RenderParams) -> Result<RenderOutput, FractalError> {
    render_cancellable(params, &NeverCancel)
}

pub fn render_cancellable(
    params: &RenderParams,
    cancel: &dyn CancellationChecker,
) -> Result<RenderOutput, FractalError> {
    let renderer = create_renderer(params)?;
    let grid = params.region.build_grid()?;
    log::debug!(
        "rendering {} over {}x{} grid",
        renderer.id(),
        grid.rows(),
        grid.cols()
    );

    let escape_times = renderer.escape_times(&grid, cancel)?;
    let intensity = escape_times.to_intensity();
    Ok(RenderOutput {
        escape_times,
        intensity,
    })
}
