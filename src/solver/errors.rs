use thiserror::Error;

use crate::modifier::ModifierError;

/// Errors that can occur during solving
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Modifier error: {0}")]
    Modifier(#[from] ModifierError),
    #[error("No combination of {max_length} or fewer modifiers sums to {target}")]
    LengthLimitExceeded { target: i64, max_length: usize },
}
