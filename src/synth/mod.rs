//! Synthesis engine — renders a pattern into a mono 16-bit sample buffer.
//!
//! One [`ToneBurst`] is synthesized per render and summed onto the step grid
//! at every hit. Timing uses truncating integer math (see [`timing`]) and the
//! mix is never clamped, so overlapping bursts can exceed the 16-bit range.

pub mod mixer;
pub mod timing;
pub mod tone;

pub use mixer::SampleBuffer;
pub use timing::Timing;
pub use tone::ToneBurst;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rhythm::Pattern;

/// Rejected audio configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParams {
    /// Sample rate of 0 Hz.
    ZeroSampleRate,
    /// Tempo of 0 BPM; the beat length is undefined.
    ZeroBpm,
}

impl std::fmt::Display for InvalidParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidParams::ZeroSampleRate => write!(f, "sample rate must be positive"),
            InvalidParams::ZeroBpm => write!(f, "tempo must be positive"),
        }
    }
}

impl std::error::Error for InvalidParams {}

/// Tempo and drum settings for a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioParams {
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Beats per minute; one step lasts one beat.
    #[serde(default = "default_bpm")]
    pub bpm: u32,
    /// Length of each drum hit in milliseconds.
    #[serde(default = "default_drum_length_ms")]
    pub drum_length_ms: u32,
    /// Drum pitch in Hz.
    #[serde(default = "default_drum_freq_hz")]
    pub drum_freq_hz: f64,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_bpm() -> u32 {
    120
}

fn default_drum_length_ms() -> u32 {
    80
}

fn default_drum_freq_hz() -> f64 {
    180.0
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            bpm: default_bpm(),
            drum_length_ms: default_drum_length_ms(),
            drum_freq_hz: default_drum_freq_hz(),
        }
    }
}

impl AudioParams {
    /// Check that the tempo grid is defined.
    pub fn validate(&self) -> Result<(), InvalidParams> {
        self.timing().map(|_| ())
    }

    /// Derive the integer timing grid for these settings.
    pub fn timing(&self) -> Result<Timing, InvalidParams> {
        Timing::new(self.sample_rate, self.bpm)
    }

    /// Synthesize the drum hit these settings describe.
    pub fn tone_burst(&self) -> ToneBurst {
        ToneBurst::synthesize(self.sample_rate, self.drum_length_ms, self.drum_freq_hz)
    }
}

/// Render `pattern` with `params`.
///
/// The buffer is `sample_rate * steps * (60000 / bpm) / 1000` samples long and
/// silent except where bursts were placed. Fails only on a zero sample rate or
/// tempo.
pub fn render(pattern: &Pattern, params: &AudioParams) -> Result<SampleBuffer, InvalidParams> {
    let timing = params.timing()?;
    let burst = params.tone_burst();
    let buffer = mixer::mix(pattern, &burst, &timing, params.sample_rate);

    debug!(
        steps = pattern.len(),
        hits = pattern.pulses(),
        burst_len = burst.len(),
        samples = buffer.len(),
        "rendered pattern"
    );

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhythm;

    #[test]
    fn defaults_match_reference_render() {
        let p = AudioParams::default();
        assert_eq!(p.sample_rate, 44100);
        assert_eq!(p.bpm, 120);
        assert_eq!(p.drum_length_ms, 80);
        assert!((p.drum_freq_hz - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_zero_rates() {
        let zero_bpm = AudioParams {
            bpm: 0,
            ..AudioParams::default()
        };
        assert_eq!(zero_bpm.validate(), Err(InvalidParams::ZeroBpm));

        let zero_rate = AudioParams {
            sample_rate: 0,
            ..AudioParams::default()
        };
        assert_eq!(zero_rate.validate(), Err(InvalidParams::ZeroSampleRate));
        assert!(AudioParams::default().validate().is_ok());
    }

    #[test]
    fn render_fails_fast() {
        let pattern = rhythm::generate(8, 3).unwrap();
        let params = AudioParams {
            bpm: 0,
            ..AudioParams::default()
        };
        assert_eq!(render(&pattern, &params), Err(InvalidParams::ZeroBpm));
    }

    #[test]
    fn default_render_length() {
        let pattern = rhythm::generate(16, 6).unwrap();
        let buf = render(&pattern, &AudioParams::default()).unwrap();
        assert_eq!(buf.len(), 352_800);
        assert_eq!(buf.sample_rate(), 44100);
        assert!((buf.duration_secs() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn silent_pattern_renders_silence() {
        let pattern = rhythm::generate(4, 0).unwrap();
        let buf = render(&pattern, &AudioParams::default()).unwrap();
        assert_eq!(buf.len(), 4 * 22050);
        assert!(buf.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn params_from_partial_yaml() {
        let params: AudioParams = serde_yaml::from_str("bpm: 90\ndrum_freq_hz: 220.0\n").unwrap();
        assert_eq!(params.bpm, 90);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.drum_length_ms, 80);
        assert!((params.drum_freq_hz - 220.0).abs() < f64::EPSILON);
    }
}
