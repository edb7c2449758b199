// src/config.rs
//! Synthesis configuration with validation and TOML loading

use crate::error::{SynthError, SynthResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of the EMG synthesis, all in physical units.
///
/// Timing fields are milliseconds; sample counts are derived from the
/// sampling rate at synthesizer construction. The MUAP duration defaults
/// model empirically observed durations of 5-10 ms (Day et al 2001),
/// centered at 7.5 ms with 1 ms unit-to-unit jitter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SynthConfig {
    /// Sampling rate of the reconstructed signal in Hz
    #[serde(default = "defaults::sampling_rate_hz")]
    pub sampling_rate_hz: f32,

    /// Electromechanical delay between an action potential and the
    /// onset of its MUAP in the EMG, in ms
    #[serde(default = "defaults::delay_ms")]
    pub delay_ms: f32,

    /// Mean MUAP duration in ms
    #[serde(default = "defaults::mean_muap_duration_ms")]
    pub mean_muap_duration_ms: f32,

    /// Standard deviation of the per-unit MUAP duration in ms
    #[serde(default = "defaults::muap_duration_jitter_ms")]
    pub muap_duration_jitter_ms: f32,

    /// Standard deviation of the per-unit peak amplitude around 1.0
    #[serde(default = "defaults::amplitude_jitter")]
    pub amplitude_jitter: f32,
}

/// Default value providers, shared between serde and `Default`
mod defaults {
    pub fn sampling_rate_hz() -> f32 {
        1000.0
    }

    pub fn delay_ms() -> f32 {
        2.0
    }

    pub fn mean_muap_duration_ms() -> f32 {
        7.5
    }

    pub fn muap_duration_jitter_ms() -> f32 {
        1.0
    }

    pub fn amplitude_jitter() -> f32 {
        0.2
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sampling_rate_hz: defaults::sampling_rate_hz(),
            delay_ms: defaults::delay_ms(),
            mean_muap_duration_ms: defaults::mean_muap_duration_ms(),
            muap_duration_jitter_ms: defaults::muap_duration_jitter_ms(),
            amplitude_jitter: defaults::amplitude_jitter(),
        }
    }
}

impl SynthConfig {
    /// Validate all fields, reporting the first violation found
    pub fn validate(&self) -> SynthResult<()> {
        if !self.sampling_rate_hz.is_finite() || self.sampling_rate_hz <= 0.0 {
            return Err(SynthError::invalid_input(format!(
                "sampling_rate_hz must be positive and finite, got {}",
                self.sampling_rate_hz
            )));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(SynthError::invalid_input(format!(
                "delay_ms must be non-negative and finite, got {}",
                self.delay_ms
            )));
        }
        if !self.mean_muap_duration_ms.is_finite() || self.mean_muap_duration_ms <= 0.0 {
            return Err(SynthError::invalid_input(format!(
                "mean_muap_duration_ms must be positive and finite, got {}",
                self.mean_muap_duration_ms
            )));
        }
        if !self.muap_duration_jitter_ms.is_finite() || self.muap_duration_jitter_ms < 0.0 {
            return Err(SynthError::invalid_input(format!(
                "muap_duration_jitter_ms must be non-negative and finite, got {}",
                self.muap_duration_jitter_ms
            )));
        }
        if !self.amplitude_jitter.is_finite() || self.amplitude_jitter < 0.0 {
            return Err(SynthError::invalid_input(format!(
                "amplitude_jitter must be non-negative and finite, got {}",
                self.amplitude_jitter
            )));
        }
        Ok(())
    }

    /// Sample interval in ms (`1000 / sampling_rate_hz`)
    pub fn sample_interval_ms(&self) -> f32 {
        1000.0 / self.sampling_rate_hz
    }

    /// Parse a configuration from TOML text. Missing fields take their
    /// defaults; the result is validated before it is returned.
    pub fn from_toml_str(text: &str) -> SynthResult<Self> {
        let config: SynthConfig = toml::from_str(text)
            .map_err(|e| SynthError::ConfigParse { reason: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> SynthResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SynthError::ArtifactIo {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}
