// src/io.rs
//! Recording artifacts at the pipeline boundary
//!
//! Upstream, the circuit simulation persists one labeled spike matrix
//! per muscle and experimental condition (e.g. `TA_ablated`,
//! `GM_active`); downstream, the reconstructed trace is persisted with
//! the same label for plotting or further analysis. Both artifacts are
//! JSON documents.

use crate::error::{SynthError, SynthResult};
use crate::signal::EmgSignal;
use crate::spike::SpikeMatrix;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Persisted binary spike matrix, keyed by a muscle/condition label
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpikeRecording {
    /// Muscle/condition key, e.g. `TA_ablated`
    pub label: String,
    /// Sampling rate the spike trains were discretized at, in Hz
    pub sampling_rate_hz: f32,
    /// Row-major spike trains, one row per motor unit
    pub spikes: Vec<Vec<u8>>,
}

impl SpikeRecording {
    /// Validate the stored grid into a [`SpikeMatrix`]
    pub fn to_matrix(&self) -> SynthResult<SpikeMatrix> {
        SpikeMatrix::from_rows(&self.spikes)
    }
}

/// Persisted EMG trace with its originating label
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmgRecording {
    /// Label carried over from the source spike recording
    pub label: String,
    /// Sampling rate of the trace in Hz
    pub sampling_rate_hz: f32,
    /// Trace samples in time order
    pub samples: Vec<f32>,
}

impl EmgRecording {
    /// Package a synthesized signal under a label
    pub fn from_signal(signal: &EmgSignal, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sampling_rate_hz: signal.sampling_rate_hz(),
            samples: signal.samples().to_vec(),
        }
    }

    /// Unpack into an [`EmgSignal`], dropping the label
    pub fn into_signal(self) -> EmgSignal {
        EmgSignal::new(self.samples, self.sampling_rate_hz)
    }
}

/// Load a labeled spike recording from a JSON artifact
pub fn load_spike_recording<P: AsRef<Path>>(path: P) -> SynthResult<SpikeRecording> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| SynthError::ArtifactIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let recording: SpikeRecording =
        serde_json::from_str(&text).map_err(|e| SynthError::ArtifactFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    info!(
        path = %path.display(),
        label = %recording.label,
        units = recording.spikes.len(),
        "loaded spike recording"
    );
    Ok(recording)
}

/// Persist a labeled spike recording as a JSON artifact
pub fn save_spike_recording<P: AsRef<Path>>(path: P, recording: &SpikeRecording) -> SynthResult<()> {
    let path = path.as_ref();
    write_json(path, recording)?;
    info!(path = %path.display(), label = %recording.label, "saved spike recording");
    Ok(())
}

/// Load a persisted EMG trace from a JSON artifact
pub fn load_emg_recording<P: AsRef<Path>>(path: P) -> SynthResult<EmgRecording> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| SynthError::ArtifactIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let recording: EmgRecording =
        serde_json::from_str(&text).map_err(|e| SynthError::ArtifactFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    info!(
        path = %path.display(),
        label = %recording.label,
        samples = recording.samples.len(),
        "loaded EMG recording"
    );
    Ok(recording)
}

/// Persist a synthesized trace with its label as a JSON artifact
pub fn save_emg_recording<P: AsRef<Path>>(path: P, recording: &EmgRecording) -> SynthResult<()> {
    let path = path.as_ref();
    write_json(path, recording)?;
    info!(
        path = %path.display(),
        label = %recording.label,
        samples = recording.samples.len(),
        "saved EMG recording"
    );
    Ok(())
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> SynthResult<()> {
    let path = path.as_ref();
    let text = serde_json::to_string(value).map_err(|e| SynthError::ArtifactFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, text).map_err(|e| SynthError::ArtifactIo {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
