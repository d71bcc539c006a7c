#![allow(clippy::float_cmp)]

use super::*;

fn seeded() -> (EngineCore, StdRng) {
    (EngineCore::new(), StdRng::seed_from_u64(0))
}

// =============================================================================
// check_jitter
// =============================================================================

#[test]
fn jitter_within_board_is_accepted() {
    let config = BoardConfig::default();
    assert!(check_jitter(0.0, &config).is_ok());
    assert!(check_jitter(10.0, &config).is_ok());
    assert!(check_jitter(1280.0, &config).is_ok());
}

#[test]
fn non_finite_jitter_is_rejected() {
    let config = BoardConfig::default();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(check_jitter(value, &config), Err(CliError::InvalidJitter { .. })));
    }
}

#[test]
fn negative_or_oversized_jitter_is_rejected() {
    let config = BoardConfig::default();
    assert!(matches!(check_jitter(-1.0, &config), Err(CliError::InvalidJitter { .. })));
    assert!(matches!(check_jitter(1e308, &config), Err(CliError::InvalidJitter { max, .. }) if max == 1280.0));
}

// =============================================================================
// assemble
// =============================================================================

#[test]
fn assemble_rejects_bad_jitter_before_spawning() {
    let (mut core, mut rng) = seeded();
    assert!(matches!(assemble(&mut core, &mut rng, f64::INFINITY), Err(CliError::InvalidJitter { .. })));
    assert!(matches!(assemble(&mut core, &mut rng, f64::NAN), Err(CliError::InvalidJitter { .. })));
    assert!(core.pieces().is_empty());
}

#[test]
fn assemble_completes_every_set() {
    let (mut core, mut rng) = seeded();
    let actions = assemble(&mut core, &mut rng, 5.0).unwrap();

    assert!(core.is_pool_exhausted());
    assert_eq!(core.completed_sets(), (0..PUZZLE_SET_COUNT).collect::<Vec<_>>());
    let spawned = actions.iter().filter(|a| matches!(a, Action::PieceSpawned { .. })).count();
    assert_eq!(spawned, TOTAL_PIECES);
    assert!(actions.iter().any(|a| matches!(a, Action::Snapped { .. })));
}

#[test]
fn assembled_pieces_sit_at_ideal_offsets() {
    let (mut core, mut rng) = seeded();
    assemble(&mut core, &mut rng, 5.0).unwrap();

    for puzzle_set in 0..PUZZLE_SET_COUNT {
        let anchor = find_piece(&core, puzzle_set, 0).unwrap();
        for slot in 1..SLOTS_PER_SET {
            let piece = find_piece(&core, puzzle_set, slot).unwrap();
            let expected = anchor.position + ideal_offset(slot, 0, anchor.rotation, core.config.piece_size);
            assert!(piece.position.distance(expected) < 1e-9, "set {puzzle_set} slot {slot}");
            assert_eq!(piece.rotation, anchor.rotation);
        }
    }
}
