//! Anvilcalc - A library for finding modifier combinations that reach a target
//!
//! This library searches a fixed set of allowed modifier values for a
//! combination whose sum equals a target value, optionally forcing a set of
//! caller-supplied modifiers into the answer.

pub mod combination;
pub mod modifier;
pub mod solver;

// Re-export the main public API
pub use combination::Combination;
pub use modifier::{ANVIL_MODIFIERS, ModifierError, ModifierSet};
pub use solver::{LogReporter, ModifierSolver, SearchReporter, SolverConfig, SolverError};

/// Find a combination of anvil modifiers that sums to the target value
///
/// This is a convenience function that creates a solver over the default
/// anvil modifier set and searches with the default configuration.
///
/// # Arguments
///
/// * `target` - The total the returned modifiers must sum to
/// * `required` - Modifiers that must appear in the answer
///
/// # Returns
///
/// * `Ok(answer)` - The required modifiers followed by the matched combination
/// * `Err(SolverError)` - If the input is invalid or the search cap is reached
///
/// # Errors
///
/// This function will return an error if:
/// * Any element of `required` is outside the allowed modifier set
/// * No combination within the default length cap sums to the target
///
/// # Examples
///
/// ```
/// use anvilcalc::solve;
///
/// // Find modifiers summing to 70 while using -5, -9 and 2
/// match solve(70, &[-5, -9, 2]) {
///     Ok(answer) => assert_eq!(answer.iter().sum::<i64>(), 70),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, required: &[i64]) -> Result<Vec<i64>, SolverError> {
    let solver = ModifierSolver::new(ModifierSet::default());
    solver.solve(target, required)
}
