#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod flat_table;

pub mod fnv;

/// A hash map keyed by FNV-1a-hashable keys.
///
/// This module provides a `HashMap` that wraps the `FlatTable` and provides
/// a standard key-value map interface over the supported key kinds.
pub mod hash_map;

mod metadata;

pub use flat_table::DEFAULT_CAPACITY;
pub use flat_table::FlatTable;
pub use fnv::HashKey;
pub use hash_map::Entry;
pub use hash_map::HashMap;
