//! Stacking decoded traces into one 2-D sample array.

use crate::trace::Trace;
use crate::{Result, Seg2Error};

/// Row-major `[traces × samples]` array of samples widened to `f64`.
///
/// Row `i` is the trace at position `i` of the pointer table.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceArray {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TraceArray {
    /// Stack traces row by row. Every trace must have the same sample count.
    pub fn from_traces(traces: &[Trace]) -> Result<Self> {
        let cols = traces.first().map_or(0, |t| t.samples.len());
        let mut data = Vec::with_capacity(traces.len() * cols);
        for (i, trace) in traces.iter().enumerate() {
            let len = trace.samples.len();
            if len != cols {
                return Err(Seg2Error::RaggedTraces {
                    trace: i,
                    expected: cols,
                    actual: len,
                });
            }
            data.extend(trace.samples.to_f64());
        }
        Ok(Self {
            rows: traces.len(),
            cols,
            data,
        })
    }

    /// `(traces, samples per trace)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.rows {
            return None;
        }
        Some(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.row(row).map(|r| r[col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
