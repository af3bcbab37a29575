//! Integer timing laws for beat length and sample offsets.
//!
//! All divisions truncate, in a fixed order: the beat length in milliseconds
//! is computed first (`60000 / bpm`), and every sample position is derived
//! from it by multiplying before dividing by 1000. Changing the order changes
//! buffer lengths at tempos that do not divide 60000 evenly.

use super::InvalidParams;

/// Milliseconds per minute.
const MS_PER_MINUTE: u64 = 60_000;

/// Number of samples in a burst of `length_ms` at `sample_rate`.
pub fn burst_len(sample_rate: u32, length_ms: u32) -> usize {
    (u64::from(sample_rate) * u64::from(length_ms) / 1000) as usize
}

/// Validated tempo grid for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    sample_rate: u64,
    beat_ms: u64,
}

impl Timing {
    /// Fails when either rate is zero, since the beat length is undefined.
    pub fn new(sample_rate: u32, bpm: u32) -> Result<Self, InvalidParams> {
        if sample_rate == 0 {
            return Err(InvalidParams::ZeroSampleRate);
        }
        if bpm == 0 {
            return Err(InvalidParams::ZeroBpm);
        }
        Ok(Self {
            sample_rate: u64::from(sample_rate),
            beat_ms: MS_PER_MINUTE / u64::from(bpm),
        })
    }

    /// Beat length in whole milliseconds (`60000 / bpm`, truncated).
    pub fn beat_ms(&self) -> u64 {
        self.beat_ms
    }

    /// Samples per beat (`sample_rate * beat_ms / 1000`, truncated).
    pub fn samples_per_beat(&self) -> u64 {
        self.sample_rate * self.beat_ms / 1000
    }

    /// Total buffer length for `steps` beats: `sample_rate * steps * beat_ms / 1000`.
    pub fn total_samples(&self, steps: usize) -> usize {
        (self.sample_rate * steps as u64 * self.beat_ms / 1000) as usize
    }

    /// First sample of step `index`: `index * sample_rate * beat_ms / 1000`.
    pub fn step_offset(&self, index: usize) -> usize {
        (index as u64 * self.sample_rate * self.beat_ms / 1000) as usize
    }
}
