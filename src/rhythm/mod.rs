//! Rhythm generation — distributing pulses over steps with the Bjorklund pairing.
//!
//! A [`RhythmSpec`] can only be built for `steps >= 1` and `pulses <= steps`,
//! so [`RhythmSpec::pattern`] never fails. [`generate`] is the unchecked-input
//! entry point that validates first.

mod bjorklund;
pub mod catalog;
pub mod pattern;

pub use catalog::{NamedRhythm, CATALOG};
pub use pattern::Pattern;

/// Returned when `steps` is zero or `pulses` exceeds `steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSpec {
    pub steps: u32,
    pub pulses: u32,
}

impl std::fmt::Display for InvalidSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.steps == 0 {
            write!(f, "invalid rhythm: steps must be at least 1")
        } else {
            write!(
                f,
                "invalid rhythm: {} pulses do not fit in {} steps",
                self.pulses, self.steps
            )
        }
    }
}

impl std::error::Error for InvalidSpec {}

/// A validated `(steps, pulses)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RhythmSpec {
    steps: u32,
    pulses: u32,
}

impl RhythmSpec {
    /// Validate and build a spec.
    pub fn new(steps: u32, pulses: u32) -> Result<Self, InvalidSpec> {
        if steps == 0 || pulses > steps {
            return Err(InvalidSpec { steps, pulses });
        }
        Ok(Self { steps, pulses })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    /// Run the pairing algorithm for this spec.
    pub fn pattern(&self) -> Pattern {
        bjorklund::distribute(self.steps as usize, self.pulses as usize)
    }
}

/// Distribute `pulses` hits over `steps` slots.
///
/// Fails fast with [`InvalidSpec`] when `steps == 0` or `pulses > steps`;
/// no partial pattern is produced.
pub fn generate(steps: u32, pulses: u32) -> Result<Pattern, InvalidSpec> {
    Ok(RhythmSpec::new(steps, pulses)?.pattern())
}
