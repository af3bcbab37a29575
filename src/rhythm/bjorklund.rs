//! Bjorklund pairing — the group-merging form of the Euclidean distribution.
//!
//! Every step starts as its own single-symbol group, hits first. Each round
//! walks the list left to right and, whenever the current group and the last
//! group are both single symbols of opposite kind, moves the last symbol onto
//! the current group. Rounds repeat until one merges nothing; the groups are
//! then flattened in order.
//!
//! The hits-first layout fixes the phase of the result, e.g. 16 steps with
//! 6 pulses gives `X.X.X.X.X.X.....`.

use super::Pattern;

/// A run of symbols that has been merged together; `true` is a hit.
type Group = Vec<bool>;

/// Distribute `pulses` hits over `steps` slots. Callers guarantee
/// `pulses <= steps`.
pub(crate) fn distribute(steps: usize, pulses: usize) -> Pattern {
    debug_assert!(pulses <= steps);

    if pulses == 0 {
        return Pattern::from_steps(vec![false; steps]);
    }
    if pulses == steps {
        return Pattern::from_steps(vec![true; steps]);
    }

    let groups = pair_groups(steps, pulses);
    Pattern::from_steps(groups.into_iter().flatten().collect())
}

/// Run merge rounds until a round performs no merge.
fn pair_groups(steps: usize, pulses: usize) -> Vec<Group> {
    let mut groups: Vec<Group> = (0..steps).map(|i| vec![i < pulses]).collect();

    loop {
        let mut merged = 0;
        let mut i = 0;
        // The list shrinks as we go; the bound is re-read every iteration.
        while i + 1 < groups.len() {
            let last = groups.len() - 1;
            if can_merge(&groups[i], &groups[last]) {
                if let Some(tail) = groups.pop() {
                    groups[i].extend(tail);
                    merged += 1;
                }
            }
            i += 1;
        }
        if merged == 0 {
            break;
        }
    }

    groups
}

fn can_merge(current: &Group, last: &Group) -> bool {
    current.len() == 1 && last.len() == 1 && current[0] != last[0]
}
