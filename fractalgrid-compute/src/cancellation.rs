use fractalgrid_core::FractalError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Trait for checking if an evaluation should be abandoned.
///
/// Evaluators poll this between iterations, never inside the per-cell loop.
pub trait CancellationChecker {
    /// Returns true if computation should be cancelled
    fn is_cancelled(&self) -> bool;

    /// `Err(Cancelled)` if cancelled, tagged with the iteration about to run.
    fn check(&self, iteration: u32) -> Result<(), FractalError> {
        if self.is_cancelled() {
            Err(FractalError::Cancelled { iteration })
        } else {
            Ok(())
        }
    }
}

/// Never cancels - for callers with no front-end to interrupt them
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl CancellationChecker for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Checks an atomic boolean flag for cancellation
#[derive(Clone, Debug)]
pub struct AtomicBoolChecker {
    flag: Arc<AtomicBool>,
}

impl AtomicBoolChecker {
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl CancellationChecker for AtomicBoolChecker {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<F> CancellationChecker for F
where
    F: Fn() -> bool,
{
    fn is_cancelled(&self) -> bool {
        self()
    }
}
