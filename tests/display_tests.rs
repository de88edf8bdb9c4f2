//! Integration tests for the display signature and debug formatting.
//!
//! The display form is a documented contract: it always begins with the
//! five-character `Maybe` prefix, and an empty container renders exactly
//! as `Maybe(empty)`.

use maybe_chain::{Maybe, SIGNATURE};

// =============================================================================
// Display Contract
// =============================================================================

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Maybe::new(5)), "Maybe(5)");
}

#[test]
fn test_empty_display_exact_form() {
    assert_eq!(format!("{}", Maybe::<i32>::NOTHING), "Maybe(empty)");
}

#[test]
fn test_display_uses_the_value_own_string_form() {
    assert_eq!(format!("{}", Maybe::new("hello")), "Maybe(hello)");
    assert_eq!(format!("{}", Maybe::new(2.5)), "Maybe(2.5)");
}

#[test]
fn test_signature_prefix_is_five_characters() {
    assert_eq!(SIGNATURE, "Maybe");
    assert_eq!(SIGNATURE.len(), 5);
}

#[test]
fn test_every_display_form_carries_the_prefix() {
    assert!(Maybe::new(5).to_string().starts_with(SIGNATURE));
    assert!(Maybe::<i32>::NOTHING.to_string().starts_with(SIGNATURE));
    assert!(Maybe::new("Maybe imposter").to_string().starts_with(SIGNATURE));
}

// =============================================================================
// Debug Formatting
// =============================================================================

#[test]
fn test_value_debug() {
    assert_eq!(format!("{:?}", Maybe::new(5)), "Value(5)");
}

#[test]
fn test_empty_debug() {
    assert_eq!(format!("{:?}", Maybe::<i32>::NOTHING), "Empty");
}

// =============================================================================
// Tagged Projection
// =============================================================================

#[test]
fn test_tagged_projection_carries_signature_discriminant() {
    let container = Maybe::new(5);
    let tagged = container.to_tagged();
    assert_eq!(tagged.kind, SIGNATURE);
    assert_eq!(tagged.value, Some(&5));
}

#[test]
fn test_tagged_projection_of_empty_keeps_absence_unconverted() {
    let empty = Maybe::<i32>::NOTHING;
    let tagged = empty.to_tagged();
    assert_eq!(tagged.kind, SIGNATURE);
    assert_eq!(tagged.value, None);
}
