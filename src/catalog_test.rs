use super::*;
use crate::consts::PUZZLE_SET_COUNT;

#[test]
fn catalog_covers_every_set() {
    assert_eq!(PUZZLE_SETS.len(), usize::from(PUZZLE_SET_COUNT));
}

#[test]
fn ids_match_indices() {
    for (i, set) in PUZZLE_SETS.iter().enumerate() {
        assert_eq!(usize::from(set.id), i);
    }
}

#[test]
fn lookup_known_and_unknown() {
    assert_eq!(get(3).map(|s| s.name), Some("Citrine"));
    assert!(get(10).is_none());
}

#[test]
fn colors_are_hex() {
    for set in &PUZZLE_SETS {
        assert!(set.color.starts_with('#'));
        assert_eq!(set.color.len(), 7);
    }
}

#[test]
fn fragment_label_is_one_based() {
    assert_eq!(fragment_label(0, 0), "R PT-1");
    assert_eq!(fragment_label(9, 3), "T PT-4");
    assert_eq!(fragment_label(42, 1), "? PT-2");
}
