//! # Chain Table
//!
//! A Rust implementation of a hash table that resolves collisions by separate chaining.
//!
//! `HashTable` keeps an array of buckets, each owning a singly linked chain of entries.
//! Lookups, updates and removals hash the key once, pick a bucket and scan its chain, giving
//! amortized O(1) operations. When an insert brings the load factor to 0.7 the bucket array
//! doubles and every entry is relinked into the new array before the insert returns.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::HashTable;
//!
//! // Create a table with room for a few keys
//! let mut table = HashTable::with_capacity(4);
//!
//! // Insert values
//! table.put("apple".to_string(), 1);
//! table.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Some(&1));
//!
//! // Update values
//! table.put("apple".to_string(), 10);
//! assert_eq!(table.get("apple"), Some(&10));
//! assert_eq!(table.len(), 2);
//!
//! // A third key reaches 3 / 4 buckets and doubles the table
//! table.put("cherry".to_string(), 3);
//! assert_eq!(table.capacity(), 8);
//!
//! // Remove values
//! assert_eq!(table.remove("apple"), Some(10));
//! assert_eq!(table.get("apple"), None);
//! ```
//!
//! ## Fallible Growth
//!
//! ```rust
//! use chaintable::HashTable;
//!
//! let mut table = HashTable::with_capacity(2);
//! match table.try_put("key", 1) {
//!     Ok(()) => assert_eq!(table.get("key"), Some(&1)),
//!     Err(err) => {
//!         // The table is untouched and the pair comes back
//!         let (key, value) = err.into_inner();
//!         assert!(!table.contains_key(key));
//!         assert_eq!(value, 1);
//!     }
//! }
//! ```

/// Error types reported when the bucket array cannot grow
mod error;
/// Module implementing the separate-chaining hash table
mod hash_table;
/// Utility functions and traits for the hash table
mod utils;

pub use error::{GrowError, PutError};
pub use hash_table::{DEFAULT_CAPACITY, GROWTH_THRESHOLD, HashTable, Iter, TableStats};
pub use utils::{HashTableExtensions, from_pairs};
