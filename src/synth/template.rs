// src/synth/template.rs
//! Deterministic MUAP waveform construction

use super::profile::MotorUnitProfile;

/// Fraction of the MUAP duration spent at full envelope before the
/// hyperbolic decay begins
const RISE_FRACTION: f32 = 0.4;

/// Base of the logarithmic chirp; the instantaneous phase sweeps
/// `log_1.05` of a geometric ramp up to `1.05^(4 pi)`
const CHIRP_LOG_BASE: f32 = 1.05;

/// One motor unit's action potential waveform.
///
/// Built once per unit per synthesis call from its
/// [`MotorUnitProfile`], then reused for every firing of that unit.
/// The shape is a fast-building, slowly-decaying amplitude envelope
/// carrying a rising-then-resolving oscillation, which yields the
/// biphasic/triphasic morphology of recorded MUAPs.
#[derive(Debug, Clone, PartialEq)]
pub struct MuapTemplate {
    samples: Vec<f32>,
}

impl MuapTemplate {
    /// Construct the waveform for one unit. Length equals the profile's
    /// duration; the profile amplitude is already applied.
    pub fn build(profile: &MotorUnitProfile) -> Self {
        let n = profile.duration_samples;
        let rise_len = (n as f32 * RISE_FRACTION) as usize;
        let decay_len = n - rise_len;

        // (1 - t^2) over the full duration, held at 1 across the rise
        // segment and divided down to a third across the decay segment
        let decay = linspace(1.0, 3.0, decay_len);
        let envelope = linspace(0.0, 1.0, n).into_iter().enumerate().map(|(k, t)| {
            let segment = if k < rise_len { 1.0 } else { 1.0 / decay[k - rise_len] };
            (1.0 - t * t) * segment
        });

        // Instantaneous phase: log_b of a geometric ramp to b^(4 pi),
        // a monotone chirp from 0 to 4 pi
        let phase_end = CHIRP_LOG_BASE.powf(4.0 * std::f32::consts::PI);
        let log_base = CHIRP_LOG_BASE.ln();
        let phase = linspace(1.0, phase_end, n).into_iter().map(move |p| p.ln() / log_base);

        let samples = envelope
            .zip(phase)
            .map(|(env, ph)| profile.amplitude * env * ph.sin())
            .collect();

        Self { samples }
    }

    /// Waveform samples, one per duration sample
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Template length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True only for the degenerate zero-duration template, which
    /// profile clamping prevents
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive; a single
/// point collapses to `start`
fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|k| start + step * k as f32).collect()
        }
    }
}
