use splooshkaboom::{BitBoard, BitBoardError, Mask};

#[test]
fn test_index_layout() {
    assert_eq!(Mask::index_of(0, 0), Ok(0));
    assert_eq!(Mask::index_of(7, 0), Ok(7));
    assert_eq!(Mask::index_of(0, 1), Ok(8));
    assert_eq!(Mask::index_of(7, 7), Ok(63));
    assert_eq!(Mask::coords_of(42), (2, 5));
    assert!(matches!(
        Mask::index_of(8, 0),
        Err(BitBoardError::IndexOutOfBounds { x: 8, y: 0 })
    ));
}

#[test]
fn test_get_set_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 2).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(bb.contains(1 + 4 * 2));
    assert!(!bb.contains(16));
    assert_eq!(bb.count_ones(), 1);

    assert!(matches!(bb.insert(16), Err(BitBoardError::CellOutOfBounds { index: 16 })));
}

#[test]
fn test_from_indices_and_iter() {
    let bb = Mask::from_indices([63, 0, 9]).unwrap();
    let bits: Vec<_> = bb.iter_indices().collect();
    assert_eq!(bits, vec![0, 9, 63]);
    assert!(Mask::from_indices([64]).is_err());
}

#[test]
fn test_subset_and_intersection() {
    let small = Mask::from_indices([1, 2]).unwrap();
    let big = Mask::from_indices([1, 2, 3]).unwrap();
    let other = Mask::from_indices([4]).unwrap();
    assert!(small.is_subset_of(&big));
    assert!(!big.is_subset_of(&small));
    assert!(Mask::new().is_subset_of(&other));
    assert!(small.intersects(&big));
    assert!(!small.intersects(&other));
    assert_eq!((big & !small).iter_indices().collect::<Vec<_>>(), vec![3]);
    assert_eq!((!Mask::new()).count_ones(), 64);
}
