use crate::{Extension, Literal, Theory};
use std::collections::HashSet;

/// One maximal set of default consequences firable from the world without
/// blocking each other, sorted by symbol text for a canonical form.
pub type Scenario = Vec<Literal>;

/// Preference order over rule indices, mirroring annotations like
/// `d1 ≤ d3 ≤ d2`. Priorities never prune a scenario; they fix the order in
/// which applicable defaults are tried, so enumeration is deterministic and
/// the most preferred path is discovered first.
#[derive(Debug, Clone)]
pub struct Priorities {
    // ranks[rule index] = preference rank, higher preferred
    ranks: Vec<usize>,
}

impl Priorities {
    /// `order` lists rule indices from least to most preferred.
    pub fn from_order(order: &[usize]) -> Self {
        let mut ranks = vec![0; order.len()];
        for (rank, &ridx) in order.iter().enumerate() {
            if let Some(slot) = ranks.get_mut(ridx) {
                *slot = rank;
            }
        }
        Self { ranks }
    }
    /// All rules tied: applicable defaults are tried in rule order.
    pub fn flat(rule_count: usize) -> Self {
        Self { ranks: vec![0; rule_count] }
    }
    pub fn rank(&self, ridx: usize) -> usize {
        self.ranks.get(ridx).copied().unwrap_or(0)
    }
    /// Rule indices from least to most preferred.
    pub fn ascending(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&ridx| self.rank(ridx));
        order
    }
}

/// Enumerates the distinct maximal scenarios reachable by firing defaults
/// one at a time. Unlike saturation, each branch applies a single default
/// and re-judges the rest against the grown state, so mutually
/// contradictory defaults end up in different scenarios.
pub fn possible_scenarios(theory: &Theory, priorities: &Priorities) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    let mut visited = HashSet::new();
    explore(theory, priorities, theory.world.clone(), Vec::new(), &mut visited, &mut scenarios);
    scenarios
}

fn explore(
    theory: &Theory,
    priorities: &Priorities,
    state: Extension,
    fired: Vec<Literal>,
    visited: &mut HashSet<Vec<Literal>>,
    out: &mut Vec<Scenario>,
) {
    // a state is world ∪ fired, so memoizing states also deduplicates
    // scenarios by their literal set
    if !visited.insert(state.to_sorted_vec()) {
        return;
    }
    let mut applicable: Vec<usize> = (0..theory.rules.len())
        .filter(|&ridx| theory.rules[ridx].applicable_in(&state))
        .collect();
    if applicable.is_empty() {
        let mut scenario = fired;
        scenario.sort_by_key(|literal| (literal.symbol.text(), literal.negated));
        out.push(scenario);
        return;
    }
    // most preferred first; rule order breaks ties
    applicable.sort_by_key(|&ridx| std::cmp::Reverse(priorities.rank(ridx)));
    for ridx in applicable {
        let consequence = theory.rules[ridx].consequence;
        let mut next_state = state.clone();
        next_state.insert(consequence);
        let mut next_fired = fired.clone();
        next_fired.push(consequence);
        explore(theory, priorities, next_state, next_fired, visited, out);
    }
}
