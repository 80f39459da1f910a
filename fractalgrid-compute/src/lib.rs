//! Escape-time iteration engines.
//!
//! The scalar evaluator answers single-point queries and serves as the
//! reference; the grid evaluators process a whole [`ComplexGrid`] one
//! iteration at a time and must agree with it cell for cell.

pub mod cancellation;
pub mod escape_time;
pub mod julia;
pub mod mandelbrot;
pub mod renderer;

pub use cancellation::{AtomicBoolChecker, CancellationChecker, NeverCancel};
pub use escape_time::{escape_time, escape_time_checked, julia_escape_time};
pub use julia::{julia_escape_times, julia_escape_times_cancellable, julia_intensity};
pub use mandelbrot::{
    mandelbrot_escape_times, mandelbrot_escape_times_cancellable, mandelbrot_intensity,
    COMPONENT_LIMIT,
};
pub use renderer::{
    create_renderer, render, render_cancellable, JuliaRenderer, MandelbrotRenderer, Renderer,
    RenderOutput,
};

// Re-export core types for convenience
pub use fractalgrid_core::*;
