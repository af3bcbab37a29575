//! Catalog of well-known rhythms that the pairing algorithm reproduces.

use super::{InvalidSpec, Pattern, RhythmSpec};

/// A named `(steps, pulses)` rhythm with some musical context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedRhythm {
    pub name: &'static str,
    pub steps: u32,
    pub pulses: u32,
    pub description: &'static str,
    pub origin: &'static str,
}

impl NamedRhythm {
    pub fn spec(&self) -> Result<RhythmSpec, InvalidSpec> {
        RhythmSpec::new(self.steps, self.pulses)
    }

    pub fn pattern(&self) -> Result<Pattern, InvalidSpec> {
        Ok(self.spec()?.pattern())
    }

    /// Hit density as a percentage of steps.
    pub fn density_percent(&self) -> f64 {
        self.pulses as f64 / self.steps as f64 * 100.0
    }

    /// Pulses per beat, reading the steps as one bar of four beats.
    pub fn pulses_per_beat(&self) -> f64 {
        (self.pulses * 4) as f64 / self.steps as f64
    }
}

pub const CATALOG: &[NamedRhythm] = &[
    NamedRhythm {
        name: "Cuban Tresillo",
        steps: 8,
        pulses: 3,
        description: "The fundamental rhythm of Cuban music",
        origin: "Cuba, Latin America",
    },
    NamedRhythm {
        name: "Turkish Aksak",
        steps: 8,
        pulses: 5,
        description: "Asymmetrical rhythm common in Turkish folk music",
        origin: "Turkey, Eastern Europe",
    },
    NamedRhythm {
        name: "West African Polyrhythm",
        steps: 12,
        pulses: 5,
        description: "Complex polyrhythmic pattern",
        origin: "West Africa",
    },
    NamedRhythm {
        name: "Flamenco Bulería",
        steps: 12,
        pulses: 7,
        description: "Fast-paced rhythm in flamenco music",
        origin: "Spain",
    },
    NamedRhythm {
        name: "Brazilian Bossa Nova",
        steps: 16,
        pulses: 6,
        description: "Smooth, syncopated rhythm (the default render)",
        origin: "Brazil",
    },
    NamedRhythm {
        name: "Indian Classical Tala",
        steps: 7,
        pulses: 3,
        description: "Asymmetrical cycle in Indian classical music",
        origin: "India",
    },
    NamedRhythm {
        name: "Minimalist Pattern",
        steps: 5,
        pulses: 2,
        description: "Simple, hypnotic pattern",
        origin: "Modern/Minimal Music",
    },
    NamedRhythm {
        name: "Dense Polyrhythm",
        steps: 16,
        pulses: 11,
        description: "Complex, dense rhythmic texture",
        origin: "Contemporary/Experimental",
    },
];

/// Look up a catalog entry by case-insensitive name.
pub fn find(name: &str) -> Option<&'static NamedRhythm> {
    CATALOG.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}
