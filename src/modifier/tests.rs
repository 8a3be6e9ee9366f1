use crate::modifier::{ANVIL_MODIFIERS, ModifierError, ModifierSet};

#[test]
fn test_default_set_is_the_anvil_set() {
    let set = ModifierSet::default();
    assert_eq!(set.values(), ANVIL_MODIFIERS);
}

#[test]
fn test_new_sorts_and_deduplicates() {
    let result = ModifierSet::new([7, -5, 7, 2, -5]);
    assert!(result.is_ok());
    if let Ok(set) = result {
        assert_eq!(set.values(), [-5, 2, 7]);
    }
}

#[test]
fn test_empty_set_rejected() {
    let result = ModifierSet::new(Vec::new());
    assert_eq!(result, Err(ModifierError::EmptySet));
}

#[test]
fn test_set_without_positive_rejected() {
    let result = ModifierSet::new([-5, -9]);
    assert_eq!(result, Err(ModifierError::MissingPositive));
}

#[test]
fn test_set_without_negative_rejected() {
    let result = ModifierSet::new([2, 7, 13]);
    assert_eq!(result, Err(ModifierError::MissingNegative));
}

#[test]
fn test_contains() {
    let set = ModifierSet::default();
    assert!(set.contains(-15));
    assert!(set.contains(16));
    assert!(!set.contains(3));
    assert!(!set.contains(0));
}

#[test]
fn test_validate_required_accepts_members() {
    let set = ModifierSet::default();
    assert!(set.validate_required(&[-5, -9, 2]).is_ok());
    assert!(set.validate_required(&[]).is_ok());
}

#[test]
fn test_validate_required_rejects_outsiders() {
    let set = ModifierSet::default();
    let result = set.validate_required(&[-5, 3]);
    assert_eq!(result, Err(ModifierError::NotAllowed(3)));
}

#[test]
fn test_extremal_values() {
    let set = ModifierSet::default();
    assert_eq!(set.max(), 16);
    assert_eq!(set.min(), -15);
}

#[test]
fn test_sign_sums() {
    let set = ModifierSet::default();
    assert_eq!(set.positive_sum(), 38);
    assert_eq!(set.negative_sum(), -35);
}
