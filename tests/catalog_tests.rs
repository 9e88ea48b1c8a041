use splooshkaboom::{initialize, Mask, BOARD_SIZE, PROBABILITY_TOLERANCE, SQUID_LENGTHS};

/// Every in-bounds straight placement of `len`, built from coordinate ranges
/// rather than the descriptor list.
fn placements_by_range(len: usize) -> Vec<Mask> {
    let mut out = Vec::new();
    for y in 0..BOARD_SIZE {
        for x in 0..=BOARD_SIZE - len {
            out.push(Mask::from_indices((0..len).map(|k| x + k + BOARD_SIZE * y)).unwrap());
        }
    }
    for y in 0..=BOARD_SIZE - len {
        for x in 0..BOARD_SIZE {
            out.push(Mask::from_indices((0..len).map(|k| x + BOARD_SIZE * (y + k))).unwrap());
        }
    }
    out
}

#[test]
fn every_board_has_well_formed_squids() {
    let catalog = initialize();
    assert!(!catalog.is_empty());
    for board in catalog {
        assert_eq!(board.squids().count_ones(), 9);
        assert_eq!(board.squid(2).unwrap().count_ones(), 2);
        assert_eq!(board.squid(3).unwrap().count_ones(), 3);
        assert_eq!(board.squid(4).unwrap().count_ones(), 4);
        let [a, b, c] = *board.squid_masks();
        assert!(!a.intersects(&b) && !a.intersects(&c) && !b.intersects(&c));
        assert_eq!(a | b | c, board.squids());
        assert!(board.probability() > 0.0);
    }
    assert!(catalog.iter().all(|b| b.squid(5).is_none()));
}

#[test]
fn prior_mass_sums_to_one() {
    let catalog = initialize();
    let total = catalog.check_invariants();
    assert!((total - 1.0).abs() < PROBABILITY_TOLERANCE, "total = {}", total);
    assert!((catalog.total_probability() - 1.0).abs() < PROBABILITY_TOLERANCE);
}

#[test]
fn board_count_matches_independent_enumeration() {
    let [l2, l3, l4] = SQUID_LENGTHS.map(placements_by_range);
    assert_eq!((l2.len(), l3.len(), l4.len()), (112, 96, 80));

    let mut expected = 0usize;
    for a in &l2 {
        for b in l3.iter().filter(|b| !b.intersects(a)) {
            let ab = *a | *b;
            expected += l4.iter().filter(|c| !c.intersects(&ab)).count();
        }
    }
    assert_eq!(initialize().len(), expected);
}

#[test]
fn boards_are_distinct() {
    let catalog = initialize();
    let mut keys: Vec<_> = catalog
        .iter()
        .map(|b| b.squid_masks().map(|m| m.into_raw()))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), catalog.len());
}

#[test]
fn initialize_returns_the_same_catalog() {
    let a = initialize();
    let b = initialize();
    assert!(std::ptr::eq(a, b));
}
