// src/synth/profile.rs
//! Stochastic per-unit MUAP parameters

use rand::Rng;

/// Parameters of one motor unit's action potential, drawn once per
/// synthesis call and held fixed across that unit's firings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorUnitProfile {
    /// MUAP duration in samples, at least 1
    pub duration_samples: usize,
    /// Peak amplitude scale, always non-negative
    pub amplitude: f32,
}

impl MotorUnitProfile {
    /// Draw a fresh profile from the given random source.
    ///
    /// Consumes exactly two Gaussian deviates in a fixed order, duration
    /// first, then amplitude, so a seeded source reproduces the same
    /// profile sequence. The duration draw is rounded and clamped to a
    /// minimum of one sample; the amplitude is `|1 + N(0, jitter)|`.
    pub fn draw<R: Rng>(
        rng: &mut R,
        mean_duration_samples: f32,
        duration_jitter_samples: f32,
        amplitude_jitter: f32,
    ) -> Self {
        let duration = mean_duration_samples + gauss(rng, duration_jitter_samples);
        let amplitude = (1.0 + gauss(rng, amplitude_jitter)).abs();
        Self {
            duration_samples: duration.round().max(1.0) as usize,
            amplitude,
        }
    }
}

/// Zero-mean Gaussian deviate via the Box-Muller transform.
///
/// `1 - U` keeps the log argument in (0, 1] so the transform never sees
/// zero.
fn gauss<R: Rng>(rng: &mut R, std_dev: f32) -> f32 {
    let u1 = 1.0 - rng.gen::<f32>();
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos() * std_dev
}
