//! euclidgen — Euclidean rhythm generation and percussive rendering.
//!
//! [`rhythm::generate`] distributes pulses over steps; [`synth::render`] turns
//! the resulting pattern into a mono 16-bit sample buffer, which
//! [`export::write_wav`] wraps in a WAV file. [`batch`] renders whole
//! collections from a YAML config.

pub mod batch;
pub mod export;
pub mod rhythm;
pub mod synth;

pub use rhythm::{generate, InvalidSpec, Pattern, RhythmSpec};
pub use synth::{render, AudioParams, InvalidParams, SampleBuffer};
