// src/spike.rs
//! Binary spike trains of a motor unit population

use crate::error::{SynthError, SynthResult};
use ndarray::{Array2, ArrayView1};

/// A validated grid of binary discharge events: one row per motor unit,
/// one column per time sample at a fixed sampling rate.
///
/// Construction is the validation boundary. Every `SpikeMatrix` has at
/// least one unit, at least one sample, and only 0/1 entries, so the
/// synthesis core never re-checks its input.
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeMatrix {
    firings: Array2<u8>,
}

impl SpikeMatrix {
    /// Build from an already-assembled 2-D array (units x samples)
    pub fn from_array(firings: Array2<u8>) -> SynthResult<Self> {
        if firings.nrows() == 0 {
            return Err(SynthError::invalid_input("spike matrix has no motor units"));
        }
        if firings.ncols() == 0 {
            return Err(SynthError::invalid_input("spike matrix has no time samples"));
        }
        for ((unit, sample), &value) in firings.indexed_iter() {
            if value > 1 {
                return Err(SynthError::invalid_input(format!(
                    "spike matrix entry at unit {}, sample {} is {}, expected 0 or 1",
                    unit, sample, value
                )));
            }
        }
        Ok(Self { firings })
    }

    /// Build from row-major per-unit spike trains. All rows must share
    /// the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> SynthResult<Self> {
        if rows.is_empty() {
            return Err(SynthError::invalid_input("spike matrix has no motor units"));
        }
        let sample_count = rows[0].len();
        for (unit, row) in rows.iter().enumerate() {
            if row.len() != sample_count {
                return Err(SynthError::invalid_input(format!(
                    "ragged spike matrix: unit 0 has {} samples but unit {} has {}",
                    sample_count,
                    unit,
                    row.len()
                )));
            }
        }
        let flat: Vec<u8> = rows.iter().flatten().copied().collect();
        let firings = Array2::from_shape_vec((rows.len(), sample_count), flat)
            .map_err(|e| SynthError::invalid_input(e.to_string()))?;
        Self::from_array(firings)
    }

    /// Number of motor units (rows)
    pub fn unit_count(&self) -> usize {
        self.firings.nrows()
    }

    /// Time horizon in samples (columns)
    pub fn sample_count(&self) -> usize {
        self.firings.ncols()
    }

    /// Spike train of one unit
    ///
    /// # Panics
    /// Panics if `unit >= unit_count()`.
    pub fn unit_firings(&self, unit: usize) -> ArrayView1<'_, u8> {
        self.firings.row(unit)
    }

    /// Total number of discharge events across all units
    pub fn firing_events(&self) -> usize {
        self.firings.iter().filter(|&&v| v == 1).count()
    }

    /// The underlying units x samples array
    pub fn as_array(&self) -> &Array2<u8> {
        &self.firings
    }
}
