//! Result arrays produced by the evaluators.

use crate::{validate_max_iterations, FractalError};
use serde::{Deserialize, Serialize};

fn cell_count(rows: usize, cols: usize) -> Result<usize, FractalError> {
    rows.checked_mul(cols)
        .ok_or(FractalError::GridTooLarge {
            rows: rows as u64,
            cols: cols as u64,
        })
}

/// Per-cell escape iteration, row-major, same shape as the sampled grid.
///
/// Cells are stored in a bulk encoding where `max_iterations + 1` means the
/// orbit never escaped. Use [`EscapeTimeArray::get`] or
/// [`EscapeTimeArray::to_tagged`] to read them as `Option<u32>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEscapeTimeArray")]
pub struct EscapeTimeArray {
    rows: usize,
    cols: usize,
    max_iterations: u32,
    data: Vec<u32>,
}

impl EscapeTimeArray {
    /// Array with every cell marked as not escaped.
    pub fn not_escaped(
        rows: usize,
        cols: usize,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        validate_max_iterations(max_iterations)?;
        Ok(Self {
            rows,
            cols,
            max_iterations,
            data: vec![max_iterations + 1; cell_count(rows, cols)?],
        })
    }

    /// Wrap an existing sentinel-encoded buffer.
    pub fn from_raw(
        rows: usize,
        cols: usize,
        max_iterations: u32,
        data: Vec<u32>,
    ) -> Result<Self, FractalError> {
        validate_max_iterations(max_iterations)?;
        let expected = cell_count(rows, cols)?;
        if data.len() != expected {
            return Err(FractalError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if let Some(&escape_time) = data.iter().find(|&&e| e > max_iterations + 1) {
            return Err(FractalError::EscapeOutOfRange {
                escape_time,
                max_iterations,
            });
        }
        Ok(Self {
            rows,
            cols,
            max_iterations,
            data,
        })
    }

    /// Build from the tagged form, `None` meaning not escaped.
    pub fn from_tagged(
        rows: usize,
        cols: usize,
        max_iterations: u32,
        cells: &[Option<u32>],
    ) -> Result<Self, FractalError> {
        validate_max_iterations(max_iterations)?;
        let sentinel = max_iterations + 1;
        let data = cells
            .iter()
            .map(|cell| match *cell {
                Some(escape_time) if escape_time > max_iterations => {
                    Err(FractalError::EscapeOutOfRange {
                        escape_time,
                        max_iterations,
                    })
                }
                Some(escape_time) => Ok(escape_time),
                None => Ok(sentinel),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_raw(rows, cols, max_iterations, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The bulk encoding of "did not escape".
    pub fn not_escaped_sentinel(&self) -> u32 {
        self.max_iterations + 1
    }

    /// Sentinel-encoded cells, row-major.
    pub fn raw(&self) -> &[u32] {
        &self.data
    }

    /// Escape iteration at `(row, col)`, `None` if the orbit stayed bounded.
    ///
    /// Out-of-range indices also return `None`; use [`Self::shape`] to tell
    /// them apart.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let value = self.data[row * self.cols + col];
        (value != self.not_escaped_sentinel()).then_some(value)
    }

    pub fn to_tagged(&self) -> Vec<Option<u32>> {
        let sentinel = self.not_escaped_sentinel();
        self.data
            .iter()
            .map(|&e| (e != sentinel).then_some(e))
            .collect()
    }

    pub fn escaped_count(&self) -> usize {
        let sentinel = self.not_escaped_sentinel();
        self.data.iter().filter(|&&e| e != sentinel).count()
    }

    /// Normalize to greyscale intensity.
    ///
    /// Escaping cells map to `(N - e + 1) / (N + 1)`, which lies in
    /// `[1/(N+1), 1]`. Cells that never escaped are exactly `0.0`.
    pub fn to_intensity(&self) -> IntensityArray {
        let sentinel = self.not_escaped_sentinel();
        let n = self.max_iterations as f64;
        let values = self
            .data
            .iter()
            .map(|&e| {
                if e == sentinel {
                    0.0
                } else {
                    (n - e as f64 + 1.0) / (n + 1.0)
                }
            })
            .collect();

        IntensityArray {
            rows: self.rows,
            cols: self.cols,
            values,
        }
    }
}

/// Normalized greyscale intensities in `[0.0, 1.0]`, row-major.
///
/// `0.0` is reserved for cells whose orbit never escaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIntensityArray")]
pub struct IntensityArray {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl IntensityArray {
    /// Wrap existing intensities, checking shape and range.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, FractalError> {
        let expected = cell_count(rows, cols)?;
        if values.len() != expected {
            return Err(FractalError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        // NaN fails the range check too
        if let Some(&value) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(FractalError::IntensityOutOfRange { value });
        }
        Ok(Self { rows, cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// One row of the image, left to right.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Linear 8-bit greyscale, for handing to an image writer.
    pub fn to_greyscale_u8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

// Deserialization goes through the same checks as the constructors.

#[derive(Deserialize)]
struct RawEscapeTimeArray {
    rows: usize,
    cols: usize,
    max_iterations: u32,
    data: Vec<u32>,
}

impl TryFrom<RawEscapeTimeArray> for EscapeTimeArray {
    type Error = FractalError;

    fn try_from(raw: RawEscapeTimeArray) -> Result<Self, Self::Error> {
        Self::from_raw(raw.rows, raw.cols, raw.max_iterations, raw.data)
    }
}

#[derive(Deserialize)]
struct RawIntensityArray {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl TryFrom<RawIntensityArray> for IntensityArray {
    type Error = FractalError;

    fn try_from(raw: RawIntensityArray) -> Result<Self, Self::Error> {
        Self::from_values(raw.rows, raw.cols, raw.values)
    }
}
