//! A simple, thread-safe hash map.
//!
//! This crate provides [`ConcurrentMap`], a hash map guarded by a single reader/writer lock.
//! Every operation acquires the lock for its own duration, so callers never have to coordinate
//! locking themselves.
//!
//! # Features
//!
//! - Thread-safe by default - no need for explicit synchronization
//! - Shared access for reads, exclusive access for writes
//! - Iteration over a consistent snapshot of the map
//! - No unsafe code
//!
//! # Guarantees
//!
//! - Each single-key operation is atomic
//! - [`ConcurrentMap::for_each`] holds the read lock for the whole traversal, so no writer can
//!   interleave with it
//! - Iteration order is unspecified
//!
//! Composing operations (e.g. a `get` followed by an `insert`) is not atomic.
//!
//! # Examples
//!
//! Basic usage with string keys and values:
//!
//! ```rust
//! use plain_map::ConcurrentMap;
//!
//! let map = ConcurrentMap::new();
//!
//! map.insert("a", 1);
//! map.insert("b", 2);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), Some(1));
//!
//! map.remove("a");
//! assert_eq!(map.get("a"), None);
//! ```
//!
//! Stopping an iteration early:
//!
//! ```rust
//! use plain_map::ConcurrentMap;
//!
//! let map = ConcurrentMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//!
//! let result = map.try_for_each(|key, _| if *key == "a" { Err(*key) } else { Ok(()) });
//!
//! assert_eq!(result, Err("a"));
//! ```
//!
//! Thread-safe usage across multiple threads:
//!
//! ```rust
//! use plain_map::ConcurrentMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let map = Arc::new(ConcurrentMap::new());
//! map.insert("key1", "value1");
//!
//! let map_in_arc = Arc::clone(&map);
//! let handle = thread::spawn(move || {
//!     map_in_arc.insert("key2", "value2");
//! });
//!
//! handle.join().unwrap();
//!
//! assert_eq!(map.get("key1"), Some("value1"));
//! assert_eq!(map.get("key2"), Some("value2"));
//! ```

#![forbid(unsafe_code)]
pub mod map;

pub use map::ConcurrentMap;
