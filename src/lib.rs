//! EMG-Synth: synthetic EMG reconstruction from motor unit spike trains
//!
//! This library turns the discharge events of a simulated motor unit
//! population into a physiologically plausible EMG waveform. It is the
//! post-processing stage of a spinal motor-circuit simulation: the
//! circuit model produces one binary spike train per motoneuron, and
//! this crate reconstructs the surface EMG those discharges would
//! generate. It features:
//!
//! - Stochastic per-unit MUAP synthesis with an injected, seedable
//!   random source for reproducible runs
//! - Linear superposition of time-shifted MUAP templates with a
//!   configurable electromechanical delay
//! - Optional per-unit parallel accumulation on a worker pool
//! - Labeled JSON recording artifacts at the pipeline boundary
//!
//! # Quick Start
//!
//! ```rust
//! use emg_synth::{EmgSynthesizer, SpikeMatrix, SynthConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), emg_synth::SynthError> {
//! let spikes = SpikeMatrix::from_rows(&[
//!     vec![0, 1, 0, 0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 1, 0, 0, 0],
//! ])?;
//!
//! let synthesizer = EmgSynthesizer::new(SynthConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let emg = synthesizer.synthesize(&spikes, &mut rng)?;
//!
//! assert_eq!(emg.len(), 8);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod signal;
pub mod spike;
pub mod synth;

// Re-export commonly used types for convenience
pub use config::SynthConfig;
pub use error::{SynthError, SynthResult};
pub use io::{EmgRecording, SpikeRecording};
pub use signal::EmgSignal;
pub use spike::SpikeMatrix;
pub use synth::{EmgSynthesizer, MotorUnitProfile, MuapTemplate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
