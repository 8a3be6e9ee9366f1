use thiserror::Error;

/// Errors that can occur when building or validating a modifier set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModifierError {
    #[error("Modifier set cannot be empty")]
    EmptySet,
    #[error("Modifier set must contain a positive modifier")]
    MissingPositive,
    #[error("Modifier set must contain a negative modifier")]
    MissingNegative,
    #[error("Required modifier {0} is not in the allowed set")]
    NotAllowed(i64),
}
