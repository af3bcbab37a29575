//! Places tone bursts on the step grid and sums them.

use crate::rhythm::Pattern;

use super::timing::Timing;
use super::tone::ToneBurst;

/// Channel count of every rendered buffer.
pub const CHANNELS: u16 = 1;

/// Bit depth the buffer is encoded at.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Rendered mono audio at 16-bit scale.
///
/// Samples are stored wider than 16 bits: overlapping bursts are summed
/// without clamping, and narrowing only happens in [`SampleBuffer::to_pcm16`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i64>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// A zero-filled buffer of `len` samples.
    pub fn silent(len: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0; len],
            sample_rate,
        }
    }

    /// Sum `burst` into the buffer starting at `start`.
    ///
    /// The tail is dropped if it runs past the end; a `start` beyond the end
    /// adds nothing.
    pub fn add_at(&mut self, start: usize, burst: &[i32]) {
        let Some(window) = self.samples.get_mut(start..) else {
            return;
        };
        for (dst, &src) in window.iter_mut().zip(burst) {
            *dst += i64::from(src);
        }
    }

    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        CHANNELS
    }

    pub fn bits_per_sample(&self) -> u16 {
        BITS_PER_SAMPLE
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Size of the encoded PCM data in bytes.
    pub fn data_size_bytes(&self) -> usize {
        self.samples.len() * usize::from(BITS_PER_SAMPLE / 8)
    }

    /// Narrow every sample to 16 bits. Out-of-range sums wrap around.
    pub fn to_pcm16(&self) -> Vec<i16> {
        self.samples.iter().map(|&s| s as i16).collect()
    }
}

/// Allocate the timeline for `pattern` and add `burst` at every hit.
pub fn mix(
    pattern: &Pattern,
    burst: &ToneBurst,
    timing: &Timing,
    sample_rate: u32,
) -> SampleBuffer {
    let mut buffer = SampleBuffer::silent(timing.total_samples(pattern.len()), sample_rate);
    for index in pattern.hit_indices() {
        buffer.add_at(timing.step_offset(index), burst.samples());
    }
    buffer
}
