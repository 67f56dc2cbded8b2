//! Capacity policy parameters.

use crate::error::ArrayError;

/// Configuration for a [`GrowableArray`](crate::GrowableArray)'s capacity policy.
///
/// Controls the starting capacity and how aggressively the backing buffer
/// grows and shrinks. Validated when the array is built; immutable after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 3.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an insertion finds no free slot.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// Occupancy ratio below which a removal halves the buffer.
    ///
    /// After a removal, the buffer is halved once if
    /// `capacity > shrink_threshold * len`. Default: 4. Must be at least 2,
    /// otherwise a halving could drop capacity below the occupied length.
    pub shrink_threshold: usize,
}

impl ArrayConfig {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 3;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink threshold.
    pub const DEFAULT_SHRINK_THRESHOLD: usize = 4;

    /// Largest slot count a buffer may hold: `isize::MAX` bytes of `i32`.
    pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<i32>();

    /// Create a config with the given starting capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            shrink_threshold: Self::DEFAULT_SHRINK_THRESHOLD,
        }
    }

    /// Check that the policy parameters describe a usable policy.
    ///
    /// Rejects an initial capacity above [`MAX_CAPACITY`](Self::MAX_CAPACITY)
    /// and a growth factor that overflows it even from a single slot.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity > Self::MAX_CAPACITY {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "initial capacity {} exceeds the maximum of {}",
                    self.initial_capacity,
                    Self::MAX_CAPACITY
                ),
            });
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidArgument {
                reason: format!("growth factor must be at least 2, got {}", self.growth_factor),
            });
        }
        if self.shrink_threshold < 2 {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "shrink threshold must be at least 2, got {}",
                    self.shrink_threshold
                ),
            });
        }
        if self.grown_capacity(1).is_none() {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "growth factor {} overflows the maximum capacity",
                    self.growth_factor
                ),
            });
        }
        Ok(())
    }

    /// Capacity the buffer should grow to from `capacity`.
    ///
    /// Always strictly larger than `capacity`, so an empty buffer still
    /// gains a slot. `None` if the result would exceed `MAX_CAPACITY`.
    pub(crate) fn grown_capacity(&self, capacity: usize) -> Option<usize> {
        scaled_capacity(capacity, self.growth_factor)
    }

    /// Whether a buffer of `capacity` slots holding `len` elements is
    /// sparse enough to halve.
    pub(crate) fn should_shrink(&self, capacity: usize, len: usize) -> bool {
        capacity > self.shrink_threshold.saturating_mul(len)
    }
}

/// `capacity * factor`, floored at `capacity + 1` and capped at
/// [`ArrayConfig::MAX_CAPACITY`].
pub(crate) fn scaled_capacity(capacity: usize, factor: usize) -> Option<usize> {
    let scaled = capacity.checked_mul(factor)?.max(capacity.checked_add(1)?);
    (scaled <= ArrayConfig::MAX_CAPACITY).then_some(scaled)
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
