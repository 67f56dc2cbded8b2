//! A growable `i32` array with an explicit, bespoke capacity policy.
//!
//! Unlike `Vec`, whose growth strategy is an implementation detail, a
//! [`GrowableArray`] follows a fixed and observable policy:
//!
//! ```text
//! GrowableArray
//! ├── Buffer (Box<[i32]>, length == capacity)
//! ├── len (occupied prefix)
//! └── ArrayConfig (initial capacity, growth factor, shrink threshold)
//! ```
//!
//! - **Growth:** an insertion into a full buffer multiplies the capacity by
//!   the growth factor (default 2), always gaining at least one slot.
//! - **Shrink:** after a removal, if `capacity > shrink_threshold * len`
//!   (default threshold 4), the capacity is halved exactly once.
//!
//! ```rust
//! use growarray::GrowableArray;
//!
//! let mut a = GrowableArray::new();
//! a.extend([1, 2, 3]);
//! assert_eq!(a.capacity(), 3);
//!
//! a.push(4);
//! assert_eq!(a.capacity(), 6);
//!
//! a.remove_at(1).unwrap();
//! assert_eq!(a.to_string(), "[1, 3, 4]");
//! assert_eq!(a.remove_last(), Ok(4));
//! ```
//!
//! Every fallible operation validates before it mutates, so an error never
//! leaves the array partially modified.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
