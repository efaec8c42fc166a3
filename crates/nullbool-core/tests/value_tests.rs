use nullbool_core::NullBool;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_keeps_both_fields() {
    assert_eq!(NullBool::new(true, false).into_parts(), (true, false));
    assert_eq!(NullBool::new(false, true).into_parts(), (false, true));
}

#[test]
fn from_bool_is_always_valid() {
    assert_eq!(NullBool::from_bool(true), NullBool::new(true, true));
    assert_eq!(NullBool::from_bool(false), NullBool::new(false, true));
    assert_eq!(NullBool::from(false), NullBool::new(false, true));
}

#[test]
fn from_option_absent_is_null() {
    assert_eq!(NullBool::from_option(None), NullBool::new(false, false));
    assert_eq!(NullBool::from_ref(None), NullBool::new(false, false));
}

#[test]
fn from_option_present_is_valid() {
    assert_eq!(NullBool::from_option(Some(true)), NullBool::new(true, true));
    assert_eq!(NullBool::from_ref(Some(&false)), NullBool::new(false, true));
    assert_eq!(NullBool::from(Some(false)), NullBool::new(false, true));
}

#[test]
fn parts_roundtrip_for_nullable_column() {
    for pair in [(false, false), (true, false), (false, true), (true, true)] {
        assert_eq!(NullBool::from_parts(pair).into_parts(), pair);
    }
}

// ============================================================================
// Accessors and mutation
// ============================================================================

#[test]
fn set_valid_makes_value_definite() {
    let mut b = NullBool::null();
    b.set_valid(false);
    assert_eq!(b, NullBool::new(false, true));
    b.set_valid(true);
    assert_eq!(b, NullBool::new(true, true));
}

#[test]
fn value_ref_present_only_when_valid() {
    assert_eq!(NullBool::new(true, true).value_ref(), Some(&true));
    assert_eq!(NullBool::new(false, true).value_ref(), Some(&false));
    assert_eq!(NullBool::new(true, false).value_ref(), None);
}

#[test]
fn option_conversion_follows_validity() {
    assert_eq!(Option::<bool>::from(NullBool::from_bool(false)), Some(false));
    assert_eq!(Option::<bool>::from(NullBool::null()), None);
    assert_eq!(NullBool::new(true, false).to_option(), None);
}

#[test]
fn is_zero_for_null_and_false() {
    assert!(NullBool::null().is_zero());
    assert!(NullBool::new(true, false).is_zero());
    assert!(NullBool::new(false, true).is_zero());
    assert!(!NullBool::new(true, true).is_zero());
}

#[test]
fn get_is_true_only_when_valid_and_true() {
    assert!(NullBool::new(true, true).get());
    assert!(!NullBool::new(true, false).get());
    assert!(!NullBool::new(false, true).get());
}

#[test]
fn overwrite_if_valid_ignores_null_candidate() {
    let mut b = NullBool::new(true, true);
    b.overwrite_if_valid(false, false);
    assert_eq!(b, NullBool::new(true, true));
}

#[test]
fn overwrite_if_valid_copies_valid_candidate() {
    let mut b = NullBool::new(true, true);
    b.overwrite_if_valid(false, true);
    assert_eq!(b, NullBool::new(false, true));

    let mut n = NullBool::null();
    n.overwrite_if_valid(true, true);
    assert_eq!(n, NullBool::new(true, true));
}
