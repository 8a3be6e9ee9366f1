use std::collections::BTreeSet;

use crate::combination::Combination;
use crate::modifier::ModifierSet;

/// Grow every combination in the candidate set by one modifier
///
/// The Cartesian product of the candidate set and the modifier set, with
/// each result re-normalized; permutations of the same multiset collapse
/// into a single entry. Every output combination is one longer than its
/// inputs.
pub fn expand(
    candidates: &BTreeSet<Combination>,
    modifiers: &ModifierSet,
) -> BTreeSet<Combination> {
    let mut expanded = BTreeSet::new();
    for combination in candidates {
        for &modifier in modifiers.values() {
            expanded.insert(combination.with(modifier));
        }
    }
    expanded
}
