//! Tone burst — one exponentially decaying sine hit, quantized to 16-bit scale.

use std::f64::consts::PI;

use super::timing::burst_len;

/// Peak amplitude as a fraction of full scale.
pub const PEAK: f64 = 0.5;

/// Envelope decay: the burst falls to `exp(-DECAY_RATE)` of its peak by the end.
pub const DECAY_RATE: f64 = 4.0;

/// Full-scale value of a signed 16-bit sample.
pub const FULL_SCALE: f64 = 32767.0;

/// A single synthesized drum hit. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneBurst {
    samples: Vec<i32>,
}

impl ToneBurst {
    /// Synthesize `sample_rate * length_ms / 1000` samples of
    /// `PEAK * exp(-DECAY_RATE * i / n) * sin(2π f i / sample_rate)`,
    /// scaled by [`FULL_SCALE`] and truncated toward zero.
    pub fn synthesize(sample_rate: u32, length_ms: u32, freq_hz: f64) -> Self {
        let n = burst_len(sample_rate, length_ms);
        let len = n as f64;
        let rate = f64::from(sample_rate);

        let samples = (0..n)
            .map(|i| {
                let t = i as f64;
                let amp = PEAK * (-DECAY_RATE * t / len).exp();
                let phase = 2.0 * PI * freq_hz * t / rate;
                (amp * FULL_SCALE * phase.sin()) as i32
            })
            .collect();

        Self { samples }
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
