// Configuration constants for the solver module
pub const DEFAULT_MAX_LENGTH: usize = 32;
