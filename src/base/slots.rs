extern crate alloc;
use alloc::{boxed::Box, vec::Vec};

use crate::{Callback, EventError, Listener};

/// The fixed `rows × columns` callback arena.
///
/// Row `i` belongs to the event stored in event slot `i`. Slots are holes
/// (`None`) or listeners; removal never compacts a row, so a listener keeps
/// its column until it is removed or the row is cleared.
#[derive(Clone, Debug)]
pub(crate) struct SlotTable {
    columns: usize,
    slots: Box<[Option<Listener>]>,
}

impl SlotTable {
    /// Allocate an all-empty table.
    ///
    /// # Returns
    /// * `Err(EventError::InvalidCapacity)` - If `rows * columns` overflows or the allocation fails.
    pub fn new(rows: usize, columns: usize) -> Result<Self, EventError> {
        let len = rows.checked_mul(columns).ok_or(EventError::InvalidCapacity)?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| EventError::InvalidCapacity)?;
        slots.resize_with(len, || None);
        Ok(Self {
            columns,
            slots: slots.into_boxed_slice(),
        })
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.slots.len() / self.columns
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The slots of `row`, in ascending column order.
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Option<Listener>] {
        let start = row * self.columns;
        &self.slots[start..start + self.columns]
    }

    fn row_mut(&mut self, row: usize) -> &mut [Option<Listener>] {
        let start = row * self.columns;
        &mut self.slots[start..start + self.columns]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Listener> {
        if row >= self.rows() || column >= self.columns {
            return None;
        }
        self.slots[row * self.columns + column].as_ref()
    }

    /// Column of `callback` within `row`, if stored there.
    pub fn find(&self, row: usize, callback: &Callback) -> Option<usize> {
        self.row(row)
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|listener| listener.is(callback)))
    }

    /// First empty column of `row`.
    pub fn first_free(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(Option::is_none)
    }

    pub fn occupied(&self, row: usize) -> usize {
        self.row(row).iter().filter(|slot| slot.is_some()).count()
    }

    /// # Panics
    /// Panics if `row` or `column` is out of range.
    pub fn set(&mut self, row: usize, column: usize, listener: Listener) {
        self.row_mut(row)[column] = Some(listener);
    }

    /// # Panics
    /// Panics if `row` or `column` is out of range.
    pub fn take(&mut self, row: usize, column: usize) -> Option<Listener> {
        self.row_mut(row)[column].take()
    }

    pub fn clear_row(&mut self, row: usize) {
        self.row_mut(row).iter_mut().for_each(|slot| *slot = None);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}
