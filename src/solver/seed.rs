use std::collections::BTreeSet;

use log::debug;

use crate::combination::Combination;
use crate::modifier::ModifierSet;
use crate::solver::estimate::Estimate;

/// Build the first candidate set from the repetition estimate
///
/// An estimate of one or less is not worth committing to, so the search
/// starts fully general with one length-1 combination per modifier. A
/// larger estimate seeds a single combination of the repeated extremal
/// modifier, cutting straight to that depth.
pub fn seed_candidates(estimate: &Estimate, modifiers: &ModifierSet) -> BTreeSet<Combination> {
    let repetitions = usize::try_from(estimate.repetitions).unwrap_or_default();

    if repetitions <= 1 {
        debug!("Seeding one length-1 combination per modifier");
        modifiers
            .values()
            .iter()
            .map(|&modifier| Combination::single(modifier))
            .collect()
    } else {
        debug!(
            "Seeding {} repetitions of extremal modifier {}",
            repetitions, estimate.modifier
        );
        BTreeSet::from([Combination::repeated(estimate.modifier, repetitions)])
    }
}
