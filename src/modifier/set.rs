use log::{debug, warn};

use crate::modifier::errors::ModifierError;

/// Modifier values of the reference anvil, sorted ascending
pub const ANVIL_MODIFIERS: [i64; 8] = [-15, -9, -6, -5, 2, 7, 13, 16];

/// The allowed modifier values for one search
///
/// The values are kept sorted and deduplicated and always contain at least
/// one strictly positive and one strictly negative modifier, so the
/// estimator's extremal lever is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierSet {
    values: Vec<i64>,
}

impl ModifierSet {
    /// # Errors
    ///
    /// Returns an error if the values are empty after deduplication or lack
    /// a strictly positive or strictly negative entry.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, ModifierError> {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        debug!("Building modifier set from {:?}", values);

        if values.is_empty() {
            warn!("Modifier set is empty");
            return Err(ModifierError::EmptySet);
        }
        if !values.iter().any(|&value| value > 0) {
            warn!("Modifier set {:?} has no positive modifier", values);
            return Err(ModifierError::MissingPositive);
        }
        if !values.iter().any(|&value| value < 0) {
            warn!("Modifier set {:?} has no negative modifier", values);
            return Err(ModifierError::MissingNegative);
        }

        Ok(Self { values })
    }

    /// The allowed values, sorted ascending
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// # Errors
    ///
    /// Returns an error naming the first required modifier that is not in
    /// the allowed set.
    pub fn validate_required(&self, required: &[i64]) -> Result<(), ModifierError> {
        for &value in required {
            if !self.contains(value) {
                warn!("Required modifier {} is not in the allowed set", value);
                return Err(ModifierError::NotAllowed(value));
            }
        }
        Ok(())
    }

    /// Largest modifier in the set
    pub fn max(&self) -> i64 {
        self.values.last().copied().unwrap_or_default()
    }

    /// Smallest modifier in the set
    pub fn min(&self) -> i64 {
        self.values.first().copied().unwrap_or_default()
    }

    /// Sum of the strictly positive modifiers
    pub fn positive_sum(&self) -> i64 {
        self.values.iter().filter(|&&value| value > 0).sum()
    }

    /// Sum of the strictly negative modifiers
    pub fn negative_sum(&self) -> i64 {
        self.values.iter().filter(|&&value| value < 0).sum()
    }
}

impl Default for ModifierSet {
    fn default() -> Self {
        // ANVIL_MODIFIERS is sorted, deduplicated and carries both signs.
        Self {
            values: ANVIL_MODIFIERS.to_vec(),
        }
    }
}
