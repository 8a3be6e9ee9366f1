use log::debug;

use crate::modifier::ModifierSet;

/// Heuristic starting point for the search: roughly how many copies of the
/// extremal modifier are needed to approach the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub repetitions: i64,
    pub modifier: i64,
}

// Quotient rounded toward negative infinity. Truncating division disagrees
// for mixed-sign operands.
fn floor_div(dividend: i64, divisor: i64) -> i64 {
    let quotient = dividend / divisor;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Estimate the repetition count of the extremal modifier for the target
///
/// A positive target uses the maximum of the set as the lever and the
/// residual left after applying every positive modifier once; any other
/// target, zero included, uses the minimum of the set and the target plus
/// the sum of the negative modifiers.
pub fn estimate(target: i64, modifiers: &ModifierSet) -> Estimate {
    let (lever, residual) = if target > 0 {
        (modifiers.max(), target - modifiers.positive_sum())
    } else {
        (modifiers.min(), target + modifiers.negative_sum())
    };

    let repetitions = floor_div(residual, lever);
    debug!(
        "Estimated {} repetitions of extremal modifier {} for target {}",
        repetitions, lever, target
    );

    Estimate {
        repetitions,
        modifier: lever,
    }
}
