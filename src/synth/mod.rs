// src/synth/mod.rs
//! EMG reconstruction from motor unit spike trains
//!
//! The synthesizer converts a binary discharge grid into a continuous
//! EMG waveform: each unit gets a randomly parameterized MUAP template,
//! and every firing adds a time-shifted copy of that template into the
//! output, delayed by the electromechanical delay. Overlapping MUAPs sum
//! linearly. The random source is injected by the caller, so a seeded
//! generator makes whole runs reproducible.

pub mod profile;
pub mod template;

pub use profile::MotorUnitProfile;
pub use template::MuapTemplate;

use crate::config::SynthConfig;
use crate::error::SynthResult;
use crate::signal::EmgSignal;
use crate::spike::SpikeMatrix;
use ndarray::ArrayView1;
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

/// Spike-train to EMG synthesizer.
///
/// Holds a validated configuration plus the sample-domain quantities
/// derived from it. Synthesis itself is pure: the only state consumed is
/// the caller's random source.
#[derive(Debug, Clone)]
pub struct EmgSynthesizer {
    config: SynthConfig,
    delay_samples: usize,
    mean_duration_samples: f32,
    duration_jitter_samples: f32,
}

impl EmgSynthesizer {
    /// Validate the configuration and derive sample-domain parameters.
    ///
    /// The millisecond MUAP statistics are converted to samples once,
    /// rounded the way the duration draw expects them, and the delay is
    /// floored to whole samples.
    pub fn new(config: SynthConfig) -> SynthResult<Self> {
        config.validate()?;
        let dt_ms = config.sample_interval_ms();
        Ok(Self {
            delay_samples: (config.delay_ms / dt_ms).floor() as usize,
            mean_duration_samples: (config.mean_muap_duration_ms / dt_ms).round(),
            duration_jitter_samples: (config.muap_duration_jitter_ms / dt_ms).round(),
            config,
        })
    }

    /// The configuration this synthesizer was built from
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Electromechanical delay in whole samples
    pub fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    /// Draw one unit's MUAP parameters from the random source.
    ///
    /// Synthesis draws one profile per unit in row order before any
    /// template work, so re-seeding a source and calling this reproduces
    /// the profiles a synthesis run used.
    pub fn draw_profile<R: Rng>(&self, rng: &mut R) -> MotorUnitProfile {
        MotorUnitProfile::draw(
            rng,
            self.mean_duration_samples,
            self.duration_jitter_samples,
            self.config.amplitude_jitter,
        )
    }

    /// Reconstruct the EMG trace for one spike matrix.
    ///
    /// The output length equals the matrix sample count; MUAP energy
    /// past the horizon is discarded. An all-zero matrix yields an
    /// all-zero trace.
    pub fn synthesize<R: Rng>(&self, spikes: &SpikeMatrix, rng: &mut R) -> SynthResult<EmgSignal> {
        let profiles = self.draw_profiles(spikes.unit_count(), rng);
        let horizon = spikes.sample_count();
        debug!(
            units = spikes.unit_count(),
            samples = horizon,
            firings = spikes.firing_events(),
            delay_samples = self.delay_samples,
            "synthesizing EMG trace"
        );

        let mut out = vec![0.0f32; horizon];
        for (unit, profile) in profiles.iter().enumerate() {
            let template = MuapTemplate::build(profile);
            accumulate_unit(&mut out, spikes.unit_firings(unit), template.samples(), self.delay_samples);
        }
        Ok(EmgSignal::new(out, self.config.sampling_rate_hz))
    }

    /// Reconstruct the EMG trace with per-unit work on the rayon pool.
    ///
    /// Profiles are drawn serially from the caller's source, exactly as
    /// in [`synthesize`](Self::synthesize), so the same seed gives the
    /// same unit parameters. Each worker accumulates its unit into a
    /// private buffer; the buffers are then summed in unit order, which
    /// keeps repeated runs deterministic. Agrees with the sequential
    /// path to floating-point reassociation.
    pub fn synthesize_parallel<R: Rng>(
        &self,
        spikes: &SpikeMatrix,
        rng: &mut R,
    ) -> SynthResult<EmgSignal> {
        let profiles = self.draw_profiles(spikes.unit_count(), rng);
        let horizon = spikes.sample_count();
        debug!(
            units = spikes.unit_count(),
            samples = horizon,
            firings = spikes.firing_events(),
            "synthesizing EMG trace on worker pool"
        );

        let partials: Vec<Vec<f32>> = profiles
            .par_iter()
            .enumerate()
            .map(|(unit, profile)| {
                let template = MuapTemplate::build(profile);
                let mut scratch = vec![0.0f32; horizon];
                accumulate_unit(&mut scratch, spikes.unit_firings(unit), template.samples(), self.delay_samples);
                scratch
            })
            .collect();

        let mut out = vec![0.0f32; horizon];
        for partial in &partials {
            for (acc, &value) in out.iter_mut().zip(partial) {
                *acc += value;
            }
        }
        Ok(EmgSignal::new(out, self.config.sampling_rate_hz))
    }

    fn draw_profiles<R: Rng>(&self, unit_count: usize, rng: &mut R) -> Vec<MotorUnitProfile> {
        (0..unit_count).map(|_| self.draw_profile(rng)).collect()
    }
}

/// Add one unit's template at every firing sample, shifted by the delay
/// and clipped at the horizon. Writing into the fixed-size output
/// directly is equivalent to the oversized-buffer-then-truncate
/// formulation.
fn accumulate_unit(out: &mut [f32], firings: ArrayView1<'_, u8>, template: &[f32], delay_samples: usize) {
    let horizon = out.len();
    for (sample, &fired) in firings.iter().enumerate() {
        if fired == 0 {
            continue;
        }
        let onset = sample + delay_samples;
        if onset >= horizon {
            continue;
        }
        let span = (horizon - onset).min(template.len());
        for (acc, &value) in out[onset..onset + span].iter_mut().zip(template) {
            *acc += value;
        }
    }
}
