//! Pattern — the hit/rest sequence produced by the generator.

use std::fmt;

/// An ordered hit/rest sequence. Index order is temporal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    steps: Vec<bool>,
}

impl Pattern {
    pub(crate) fn from_steps(steps: Vec<bool>) -> Self {
        Self { steps }
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pattern has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of hits.
    pub fn pulses(&self) -> usize {
        self.steps.iter().filter(|&&hit| hit).count()
    }

    /// Whether step `index` is a hit. Out-of-range indices are rests.
    pub fn is_hit(&self, index: usize) -> bool {
        self.steps.get(index).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.steps.iter().copied()
    }

    /// Indices of all hit steps, ascending.
    pub fn hit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, &hit)| hit.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.steps
    }

    /// Fraction of steps that are hits, in `[0, 1]`.
    pub fn density(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.pulses() as f64 / self.steps.len() as f64
    }
}

impl FromIterator<bool> for Pattern {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self::from_steps(iter.into_iter().collect())
    }
}

/// `X` for a hit, `.` for a rest.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &hit in &self.steps {
            f.write_str(if hit { "X" } else { "." })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn pattern(s: &str) -> Pattern {
        s.chars().map(|c| c == 'X').collect()
    }

    #[test]
    fn display_uses_x_and_dot() {
        assert_eq!(pattern("X..X.").to_string(), "X..X.");
    }

    #[test]
    fn counts_and_indices() {
        let p = pattern("X.X..X");
        assert_eq!(p.len(), 6);
        assert_eq!(p.pulses(), 3);
        assert_eq!(p.hit_indices().collect::<Vec<_>>(), vec![0, 2, 5]);
        assert!(p.is_hit(2));
        assert!(!p.is_hit(3));
        assert!(!p.is_hit(100));
    }

    #[test]
    fn density() {
        assert_approx_eq!(pattern("X.X.").density(), 0.5);
        assert_approx_eq!(pattern("....").density(), 0.0);
        assert_approx_eq!(Pattern::from_steps(Vec::new()).density(), 0.0);
    }
}
