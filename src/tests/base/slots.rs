use crate::{callback, EventError, Listener, SlotTable};

#[test]
fn new_table_is_empty() {
    let table = SlotTable::new(3, 4).unwrap();
    assert_eq!(table.rows(), 3);
    assert_eq!(table.columns(), 4);
    for row in 0..3 {
        assert_eq!(table.occupied(row), 0);
        assert_eq!(table.first_free(row), Some(0));
        assert!(table.row(row).iter().all(Option::is_none));
    }
}

#[test]
fn rows_are_independent() {
    let mut table = SlotTable::new(2, 2).unwrap();
    let cb = callback(|_| 0);
    table.set(1, 1, Listener::new(cb.clone()));

    assert_eq!(table.find(1, &cb), Some(1));
    assert_eq!(table.find(0, &cb), None);
    assert_eq!(table.occupied(0), 0);
    assert_eq!(table.occupied(1), 1);
    assert_eq!(table.first_free(1), Some(0));
}

#[test]
fn take_leaves_a_hole() {
    let mut table = SlotTable::new(1, 3).unwrap();
    let a = callback(|_| 0);
    let b = callback(|_| 0);
    table.set(0, 0, Listener::new(a.clone()));
    table.set(0, 1, Listener::new(b.clone()));

    let taken = table.take(0, 0).unwrap();
    assert!(taken.is(&a));
    assert!(table.get(0, 0).is_none());
    assert!(table.get(0, 1).unwrap().is(&b));
    assert_eq!(table.first_free(0), Some(0));
    assert_eq!(table.take(0, 0), None);
}

#[test]
fn full_row_has_no_free_slot() {
    let mut table = SlotTable::new(1, 2).unwrap();
    table.set(0, 0, Listener::new(callback(|_| 0)));
    table.set(0, 1, Listener::new(callback(|_| 0)));
    assert_eq!(table.first_free(0), None);
}

#[test]
fn clear_row_and_clear() {
    let mut table = SlotTable::new(2, 2).unwrap();
    table.set(0, 0, Listener::new(callback(|_| 0)));
    table.set(1, 0, Listener::new(callback(|_| 0)));

    table.clear_row(0);
    assert_eq!(table.occupied(0), 0);
    assert_eq!(table.occupied(1), 1);

    table.clear();
    assert_eq!(table.occupied(1), 0);
}

#[test]
fn get_out_of_range_is_none() {
    let table = SlotTable::new(2, 2).unwrap();
    assert!(table.get(2, 0).is_none());
    assert!(table.get(0, 2).is_none());
}

#[test]
fn oversized_table_is_an_error() {
    assert_eq!(SlotTable::new(usize::MAX, 2).unwrap_err(), EventError::InvalidCapacity);
}
