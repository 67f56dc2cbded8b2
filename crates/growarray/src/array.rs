//! The growable integer array and its capacity policy.
//!
//! [`GrowableArray`] keeps its elements in the leading `len` slots of a
//! `Buffer` whose length is the capacity. The capacity changes only at two
//! points:
//!
//! - **Growth:** an insertion that finds `len == capacity` first reallocates
//!   to `capacity * growth_factor` slots (at least one more than before).
//! - **Shrink:** after every removal, if `capacity > shrink_threshold * len`,
//!   the buffer is halved once. A single removal never halves twice.

use std::collections::TryReserveError;
use std::fmt;

use log::debug;

use crate::buffer::Buffer;
use crate::config::{scaled_capacity, ArrayConfig};
use crate::error::ArrayError;

/// A contiguous, growable array of `i32` with an explicit capacity policy.
///
/// Indices are signed so that negative requests can be reported as
/// [`ArrayError::IndexOutOfBounds`] rather than being unrepresentable.
#[derive(Clone)]
pub struct GrowableArray {
    buffer: Buffer,
    len: usize,
    config: ArrayConfig,
}

impl GrowableArray {
    /// Create an empty array with the default capacity of 3.
    pub fn new() -> Self {
        let config = ArrayConfig::default();
        Self {
            buffer: Buffer::new(config.initial_capacity),
            len: 0,
            config,
        }
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if `capacity` is negative,
    /// above [`ArrayConfig::MAX_CAPACITY`], or cannot be allocated.
    pub fn with_capacity(capacity: isize) -> Result<Self, ArrayError> {
        let capacity = usize::try_from(capacity).map_err(|_| ArrayError::InvalidArgument {
            reason: format!("capacity cannot be negative, got {capacity}"),
        })?;
        Self::with_config(ArrayConfig::new(capacity))
    }

    /// Create an empty array governed by a custom capacity policy.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let buffer = Buffer::try_new(config.initial_capacity)
            .map_err(|err| allocation_error(config.initial_capacity, err))?;
        Ok(Self {
            buffer,
            len: 0,
            config,
        })
    }

    /// Deep-copy `other`, including the unoccupied tail of its buffer.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if there is nothing to copy.
    pub fn copy_of(other: Option<&GrowableArray>) -> Result<Self, ArrayError> {
        other
            .cloned()
            .ok_or_else(|| ArrayError::InvalidArgument {
                reason: "copy source cannot be absent".into(),
            })
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// True if no slots are occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Heap memory held by the backing buffer, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// The capacity policy this array follows.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Copy of the entire backing buffer, unoccupied slots included.
    pub fn snapshot_full(&self) -> Vec<i32> {
        self.buffer.as_slice().to_vec()
    }

    /// Copy of the occupied prefix.
    pub fn snapshot_occupied(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }

    /// Borrowed view of the occupied prefix.
    pub fn as_slice(&self) -> &[i32] {
        self.buffer.prefix(self.len)
    }

    /// Iterate over the occupied elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Index of the first element equal to `key`, or `None` if absent.
    pub fn index_of(&self, key: i32) -> Option<usize> {
        self.iter().position(|&v| v == key)
    }

    /// Element at `index`.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` unless `0 <= index < len`.
    pub fn get(&self, index: isize) -> Result<i32, ArrayError> {
        let i = self.checked_index(index, self.len)?;
        Ok(self.buffer.read(i))
    }

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown buffer would exceed [`ArrayConfig::MAX_CAPACITY`]
    /// or cannot be allocated, as `Vec::push` does.
    pub fn push(&mut self, value: i32) {
        if self.len == self.capacity() {
            if let Err(err) = self.grow() {
                panic!("cannot grow array: {err}");
            }
        }
        self.buffer.write(self.len, value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends. Returns `Err(ArrayError::IndexOutOfBounds)`
    /// unless `0 <= index <= len`, or `Err(ArrayError::InvalidArgument)` if
    /// a full buffer cannot grow.
    pub fn insert_at(&mut self, index: isize, value: i32) -> Result<(), ArrayError> {
        let i = self.checked_index(index, self.len + 1)?;
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer.shift_right(i, self.len);
        self.buffer.write(i, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns `Err(ArrayError::EmptyContainer)` if the array is empty.
    pub fn remove_last(&mut self) -> Result<i32, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer);
        }
        self.len -= 1;
        let value = self.buffer.read(self.len);
        self.maybe_shrink();
        Ok(value)
    }

    /// Remove the element at `index`, shifting later elements one slot left.
    ///
    /// The vacated trailing slot is zeroed. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` unless `0 <= index < len`.
    pub fn remove_at(&mut self, index: isize) -> Result<(), ArrayError> {
        let i = self.checked_index(index, self.len)?;
        self.buffer.shift_left(i, self.len);
        self.buffer.write(self.len - 1, 0);
        self.len -= 1;
        self.maybe_shrink();
        Ok(())
    }

    /// Grow the buffer to `capacity * factor` slots, or by one slot if that
    /// would not enlarge it.
    ///
    /// Returns `Err(ArrayError::InvalidArgument)` if `factor` is zero, if the
    /// new capacity would exceed [`ArrayConfig::MAX_CAPACITY`], or if it
    /// cannot be allocated. The array is unchanged on error.
    pub fn grow_by(&mut self, factor: usize) -> Result<(), ArrayError> {
        if factor == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "growth factor cannot be zero".into(),
            });
        }
        let old = self.capacity();
        let new = scaled_capacity(old, factor).ok_or_else(|| ArrayError::InvalidArgument {
            reason: format!("growing capacity {old} by {factor} exceeds the maximum capacity"),
        })?;
        self.reallocate(new)
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let old = self.capacity();
        let new = self
            .config
            .grown_capacity(old)
            .ok_or_else(|| ArrayError::InvalidArgument {
                reason: format!("growing capacity {old} exceeds the maximum capacity"),
            })?;
        self.reallocate(new)
    }

    fn maybe_shrink(&mut self) {
        let capacity = self.capacity();
        if self.config.should_shrink(capacity, self.len) {
            // A failed shrink keeps the larger buffer, which is still valid.
            let _ = self.reallocate(capacity / 2);
        }
    }

    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug!(
            "reallocating array buffer: capacity {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.buffer
            .reallocate(new_capacity)
            .map_err(|err| allocation_error(new_capacity, err))
    }

    /// Convert a signed caller index into a slot index below `bound`.
    fn checked_index(&self, index: isize, bound: usize) -> Result<usize, ArrayError> {
        match usize::try_from(index) {
            Ok(i) if i < bound => Ok(i),
            _ => Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }
}

fn allocation_error(slots: usize, err: TryReserveError) -> ArrayError {
    ArrayError::InvalidArgument {
        reason: format!("cannot allocate {slots} slots: {err}"),
    }
}

impl Default for GrowableArray {
    fn default() -> Self {
        Self::new()
    }
}

/// Two arrays are equal when their occupied elements are; capacity and
/// policy are ignored.
impl PartialEq for GrowableArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowableArray {}

impl fmt::Display for GrowableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[ ]");
        }
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for GrowableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a> IntoIterator for &'a GrowableArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<i32> for GrowableArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for GrowableArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
