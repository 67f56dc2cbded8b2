//! Fixed-length slot storage backing a `GrowableArray`.
//!
//! A [`Buffer`] is a zero-initialised `Box<[i32]>` whose length *is* the
//! array's capacity. It never grows on its own: the owning array decides
//! when to [`reallocate`](Buffer::reallocate) and to what length.

use std::collections::TryReserveError;

/// A contiguous run of `i32` slots with an exact, caller-controlled length.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Buffer {
    /// Backing storage. Length is the slot count; there is no spare capacity.
    slots: Box<[i32]>,
}

impl Buffer {
    /// Create a buffer of `len` zeroed slots.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            slots: vec![0; len].into_boxed_slice(),
        }
    }

    /// Create a buffer of `len` zeroed slots, reporting allocation failure
    /// instead of aborting.
    pub(crate) fn try_new(len: usize) -> Result<Self, TryReserveError> {
        Ok(Self {
            slots: zeroed(len)?,
        })
    }

    /// Replace the storage with a fresh buffer of `new_len` slots.
    ///
    /// The first `min(len, new_len)` slots are carried over; any extra
    /// slots are zeroed. On allocation failure the buffer is left untouched.
    pub(crate) fn reallocate(&mut self, new_len: usize) -> Result<(), TryReserveError> {
        let mut fresh = zeroed(new_len)?;
        let keep = self.slots.len().min(new_len);
        fresh[..keep].copy_from_slice(&self.slots[..keep]);
        self.slots = fresh;
        Ok(())
    }

    /// Shift `slots[from..end]` one position to the right, into `from + 1..end + 1`.
    ///
    /// Walks from the top down so no source slot is overwritten before it
    /// has been moved.
    ///
    /// # Panics
    ///
    /// Panics if `end >= len()` (there must be a free slot above the run).
    pub(crate) fn shift_right(&mut self, from: usize, end: usize) {
        for i in (from..end).rev() {
            self.slots[i + 1] = self.slots[i];
        }
    }

    /// Shift `slots[from + 1..end]` one position to the left, into `from..end - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `end > len()`.
    pub(crate) fn shift_left(&mut self, from: usize, end: usize) {
        for i in from..end.saturating_sub(1) {
            self.slots[i] = self.slots[i + 1];
        }
    }

    /// Read the slot at `index`. Panics if out of range.
    pub(crate) fn read(&self, index: usize) -> i32 {
        self.slots[index]
    }

    /// Overwrite the slot at `index`. Panics if out of range.
    pub(crate) fn write(&mut self, index: usize, value: i32) {
        self.slots[index] = value;
    }

    /// Shared view of the first `len` slots.
    pub(crate) fn prefix(&self, len: usize) -> &[i32] {
        &self.slots[..len]
    }

    /// Shared view of every slot, occupied or not.
    pub(crate) fn as_slice(&self) -> &[i32] {
        &self.slots
    }

    /// Total slot count.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Memory usage of the backing storage in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<i32>()
    }
}

fn zeroed(len: usize) -> Result<Box<[i32]>, TryReserveError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(len)?;
    slots.resize(len, 0);
    Ok(slots.into_boxed_slice())
}
